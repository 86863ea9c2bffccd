use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use tractor_api::{Cards, Deck, Pattern, Seed, Shape};

pub fn classify(c: &mut Criterion) {
    let mut g = c.benchmark_group("classify");
    for cards in &["9S", "9S 9H", "5S 5S 6S 6S 7H 7D", "5S 5S 7S 7S", "SJ BJ"] {
        g.bench_with_input(
            BenchmarkId::from_parameter(cards),
            &cards.parse::<Cards>().unwrap(),
            |b, cards| {
                b.iter(|| Pattern::classify(cards));
            },
        );
    }
    g.finish();
}

pub fn hand_plays(c: &mut Criterion) {
    let hand = Deck::shuffled(&mut Seed::chosen("bench"), 1).deal().hands[0].clone();
    let mut g = c.benchmark_group("hand");
    g.bench_with_input(BenchmarkId::new("leads", ""), &hand, |b, hand| {
        b.iter(|| hand.leads());
    });
    g.bench_with_input(BenchmarkId::new("pairs", ""), &hand, |b, hand| {
        b.iter(|| hand.plays(Shape::Pair, 2));
    });
    g.bench_with_input(BenchmarkId::new("can_form tractor", ""), &hand, |b, hand| {
        b.iter(|| hand.can_form(Shape::Tractor, 4));
    });
    g.finish();
}

criterion_group!(benches, classify, hand_plays);
criterion_main!(benches);
