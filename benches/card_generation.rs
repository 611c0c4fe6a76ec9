use criterion::{criterion_group, criterion_main, Criterion};

use bingo_engine::card::CardGenerator;
use bingo_engine::game::GameSession;

fn bench_generate_card(c: &mut Criterion) {
    c.bench_function("generate_card", |b| {
        let mut generator = CardGenerator::from_seed(42);
        b.iter(|| generator.generate().unwrap());
    });
}

fn bench_full_session(c: &mut Criterion) {
    c.bench_function("full_session", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed = seed.wrapping_add(1);
            let mut session = GameSession::builder().seed(seed).build().unwrap();
            session.run_to_completion()
        });
    });
}

criterion_group!(benches, bench_generate_card, bench_full_session);
criterion_main!(benches);
