criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        dealing_turn_scenario,
        drawing_weighted_stage,
        decoding_turn_presentation,
        computing_difficulty_window,
        filtering_memory_corpus,
}

fn dealing_turn_scenario(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    c.bench_function("deal a random Turn scenario", |b| {
        b.iter(|| Deal::random(Stage::Turn, rng))
    });
}

fn drawing_weighted_stage(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let weights = Weights::default();
    c.bench_function("draw a weighted Stage", |b| b.iter(|| weights.draw(rng)));
}

fn decoding_turn_presentation(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let deal = Deal::random(Stage::Turn, rng);
    let (hand1, hand2, board) = (
        deal.hand1.to_string(),
        deal.hand2.to_string(),
        deal.board.to_string(),
    );
    c.bench_function("decode a Turn presentation", |b| {
        b.iter(|| (Face::hole(&hand1), Face::hole(&hand2), Face::board(&board)))
    });
}

fn computing_difficulty_window(c: &mut criterion::Criterion) {
    c.bench_function("compute windows for 100 streaks", |b| {
        b.iter(|| {
            (0..100u32)
                .map(Difficulty::from)
                .map(|d| d.window())
                .filter(|w| w.contains(0.75))
                .count()
        })
    });
}

fn filtering_memory_corpus(c: &mut criterion::Criterion) {
    let ref mut rng = SmallRng::seed_from_u64(0);
    let criteria = Criteria::from(Stage::Flop).within(Difficulty::from(8u32).window(), Measure::Favorite);
    let rows = (0..10_000)
        .map(|i| {
            let deal = Deal::random(Stage::all()[i % 3], rng);
            let e = rng.random::<f64>();
            Scenario::from((
                deal,
                Equity {
                    equities: [e, 1. - e],
                    wins: [0, 0],
                    ties: 0,
                },
            ))
        })
        .collect::<Vec<_>>();
    c.bench_function("filter 10k scenarios by Criteria", |b| {
        b.iter(|| rows.iter().filter(|s| criteria.accepts(s)).count())
    });
}

use equityguesser::cards::*;
use equityguesser::corpus::*;
use equityguesser::difficulty::*;
use equityguesser::selection::*;
use equityguesser::solver::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
