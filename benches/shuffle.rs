use criterion::{criterion_group, criterion_main, Criterion};

use gandalf_engine::{Deck, EngineRng, RoundEngine};

fn bench_shuffle(c: &mut Criterion) {
    c.bench_function("shuffle_standard_deck", |b| {
        let mut rng = EngineRng::new(42);
        b.iter(|| {
            let mut deck = Deck::standard();
            deck.shuffle(&mut rng);
            deck
        });
    });
}

fn bench_deal(c: &mut Criterion) {
    c.bench_function("start_four_player_round", |b| {
        b.iter(|| {
            let mut round = RoundEngine::seeded(42);
            for name in ["a", "b", "c", "d"] {
                round.join(name, false).unwrap();
            }
            round.start().unwrap();
            round
        });
    });
}

fn bench_projection(c: &mut Criterion) {
    let mut round = RoundEngine::seeded(42);
    for name in ["a", "b", "c", "d"] {
        round.join(name, false).unwrap();
    }
    round.start().unwrap();
    for name in ["a", "b", "c", "d"] {
        round.peek(name, 0).unwrap();
    }

    c.bench_function("render_per_viewer_projection", |b| {
        b.iter(|| round.view_for(Some("a")));
    });
}

criterion_group!(benches, bench_shuffle, bench_deal, bench_projection);
criterion_main!(benches);
