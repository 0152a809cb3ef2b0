use btree::BTree;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::seq::SliceRandom;
use rand::SeedableRng;

const TREE_SIZE: i32 = 1_000;

fn shuffled_input() -> Vec<i32> {
    let mut input: Vec<i32> = (1..=TREE_SIZE).collect();
    let mut rng = rand::rngs::StdRng::seed_from_u64(0x5eed);
    input.shuffle(&mut rng);
    input
}

fn bench_construction(c: &mut Criterion) {
    let input = shuffled_input();
    let mut group = c.benchmark_group("construction");

    for degree in [2usize, 4, 8, 16, 32, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(degree), &degree, |b, &degree| {
            b.iter(|| {
                let tree = BTree::from_seed(degree, input.iter().copied())
                    .expect("seed stream has no duplicates");
                black_box(tree);
            })
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let input = shuffled_input();
    let mut group = c.benchmark_group("search");

    for degree in [2usize, 8, 32] {
        let tree = BTree::from_seed(degree, input.iter().copied())
            .expect("seed stream has no duplicates");
        group.bench_with_input(BenchmarkId::from_parameter(degree), &tree, |b, tree| {
            b.iter(|| {
                for e in 1..=TREE_SIZE {
                    black_box(tree.search(black_box(&e)));
                }
            })
        });
    }

    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let input = shuffled_input();
    let mut group = c.benchmark_group("removal");

    for degree in [2usize, 8, 32] {
        group.bench_with_input(BenchmarkId::from_parameter(degree), &degree, |b, &degree| {
            b.iter_batched(
                || {
                    BTree::from_seed(degree, input.iter().copied())
                        .expect("seed stream has no duplicates")
                },
                |mut tree| {
                    for e in &input {
                        tree.remove(e);
                    }
                    black_box(tree);
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_construction, bench_search, bench_removal);
criterion_main!(benches);
