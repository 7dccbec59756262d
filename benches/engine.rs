//! Shuffle and playout benchmarks.

use std::collections::HashMap;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use concentration::core::{shuffle, GameRng};
use concentration::game::{generate_cards, Game};

fn bench_shuffle(c: &mut Criterion) {
    let mut rng = GameRng::new(42);

    c.bench_function("shuffle 512 pairs", |b| {
        b.iter_batched(
            || generate_cards(512),
            |mut cards| {
                shuffle(&mut cards, &mut rng);
                cards
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_perfect_playout(c: &mut Criterion) {
    c.bench_function("perfect playout 64 pairs", |b| {
        b.iter_batched(
            || {
                let game = Game::new(64, 7);
                let mut first_seen: HashMap<u32, usize> = HashMap::new();
                let mut pairs = Vec::new();
                for (index, card) in game.cards().iter().enumerate() {
                    match first_seen.remove(&card.pair.raw()) {
                        Some(partner) => pairs.push((partner, index)),
                        None => {
                            first_seen.insert(card.pair.raw(), index);
                        }
                    }
                }
                (game, pairs)
            },
            |(mut game, pairs)| {
                for (a, b) in pairs {
                    game.choose_card(a);
                    game.choose_card(b);
                }
                black_box(game.score())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_shuffle, bench_perfect_playout);
criterion_main!(benches);
