//! Text grid and end-of-game lines.

use crate::card::{Card, Cell};
use crate::core::Column;
use crate::game::GameOutcome;

/// Width of the rule under the header row.
const RULE_WIDTH: usize = 35;

/// Render a card as a tab-separated grid with column headers.
///
/// Marked cells print as `X`.
///
/// ```
/// use bingo_engine::card::CardGenerator;
/// use bingo_engine::render::card_to_string;
///
/// let card = CardGenerator::from_seed(42).generate().unwrap();
/// let text = card_to_string(&card);
/// assert!(text.starts_with("B\tI\tN\tG\tO\n"));
/// ```
#[must_use]
pub fn card_to_string(card: &Card) -> String {
    let mut out = String::new();

    let header: Vec<String> = Column::ALL.iter().map(|c| c.to_string()).collect();
    out.push_str(&header.join("\t"));
    out.push('\n');
    out.push_str(&"-".repeat(RULE_WIDTH));
    out.push('\n');

    for row in card.rows() {
        let cells: Vec<String> = row.iter().map(|cell| cell_to_string(*cell)).collect();
        out.push_str(&cells.join("\t"));
        out.push('\n');
    }

    out
}

/// The end-of-game report line.
#[must_use]
pub fn outcome_line(outcome: GameOutcome) -> String {
    match outcome {
        GameOutcome::Win(pattern) => {
            format!("*** BINGO! You win! *** Pattern: {pattern}")
        }
        GameOutcome::Exhausted => "*** No more balls left. Game over.".to_string(),
    }
}

fn cell_to_string(cell: Cell) -> String {
    match cell.number() {
        Some(value) => value.to_string(),
        None => "X".to_string(),
    }
}
