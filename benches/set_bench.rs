//! Set construction and algebra benchmarks.
//!
//! Construction runs over 1500 inputs with 333 distinct values. The algebra
//! benchmarks draw 1 to 5 operands per iteration from a fixed pool of string
//! sets with a seeded RNG, so every run sees the same operand sequence.

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use toolbox::set::{Set, difference_of, intersection_of, union_of, unique_of};

const NUMBER_OF_ADDS: usize = 1500;
const NUMBER_OF_DIFFERENT_VALUES: usize = 333;

fn repeating_inputs() -> Vec<usize> {
    (0..NUMBER_OF_ADDS)
        .map(|index| index % NUMBER_OF_DIFFERENT_VALUES)
        .collect()
}

fn operand_pool() -> Vec<Set<&'static str>> {
    [
        "a b c",
        "d e f",
        "a b c d e f g h i j k l m n o p q s t u v w x y z",
        "d e f g h",
        "a b c d e f g h i j k l m n o",
        "p q",
        "s t u v w",
        "x y z a b c d",
        "m n o p q s t",
        "e f g",
        "h i j k l m n",
        "y z a b c d e f g h i",
    ]
    .into_iter()
    .map(|letters| Set::of(letters.split(' ')))
    .collect()
}

/// Picks 1 to 5 operands from `pool`.
fn choose_operands<'a>(
    random: &mut StdRng,
    pool: &'a [Set<&'static str>],
) -> Vec<&'a Set<&'static str>> {
    let amount = random.random_range(1..=5);
    (0..amount)
        .map(|_| &pool[random.random_range(0..pool.len())])
        .collect()
}

fn benchmark_construction(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_construction");
    let inputs = repeating_inputs();

    group.bench_function("of", |bencher| {
        bencher.iter(|| black_box(Set::of(black_box(inputs.iter().copied()))));
    });

    group.bench_function("add", |bencher| {
        bencher.iter(|| {
            let mut set = Set::new();
            for &value in &inputs {
                set.add(black_box(value));
            }
            black_box(set)
        });
    });

    group.finish();
}

fn benchmark_mutating(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_mutating");
    let pool = operand_pool();

    type Mutation = fn(&mut Set<&'static str>, &[&Set<&'static str>]);
    let mutations: [(&str, Mutation); 4] = [
        ("union_with", |set, others| {
            set.union_with(others);
        }),
        ("intersect_with", |set, others| {
            set.intersect_with(others);
        }),
        ("difference_with", |set, others| {
            set.difference_with(others);
        }),
        ("unique_with", |set, others| {
            set.unique_with(others);
        }),
    ];

    for (name, mutation) in mutations {
        let mut random = StdRng::seed_from_u64(0);
        group.bench_function(name, |bencher| {
            bencher.iter_batched(
                || {
                    let operands = choose_operands(&mut random, &pool);
                    (operands[0].clone(), operands)
                },
                |(mut receiver, operands)| {
                    mutation(&mut receiver, &operands[1..]);
                    black_box(receiver)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_constructive(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_constructive");
    let pool = operand_pool();

    type Combine = fn(&[&Set<&'static str>]) -> Set<&'static str>;
    let combinations: [(&str, Combine); 4] = [
        ("union_of", union_of),
        ("intersection_of", intersection_of),
        ("difference_of", difference_of),
        ("unique_of", unique_of),
    ];

    for (name, combine) in combinations {
        let mut random = StdRng::seed_from_u64(0);
        group.bench_function(name, |bencher| {
            bencher.iter_batched(
                || choose_operands(&mut random, &pool),
                |operands| black_box(combine(&operands)),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_construction,
    benchmark_mutating,
    benchmark_constructive
);

criterion_main!(benches);
