use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

use avl_index::{AvlIndex, Order};

const N: usize = 100_000;

pub fn benchmarks(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let values: Vec<i32> = (1..=N).map(|_| rng.gen()).collect();

    c.bench_function("index_insert", |b| {
        let mut index = AvlIndex::new();
        b.iter(|| {
            for value in &values {
                black_box(index.insert(*value));
            }
        })
    });

    let index: AvlIndex = values.iter().copied().collect();

    c.bench_function("index_contains", |b| {
        b.iter(|| {
            for value in &values {
                black_box(index.contains(*value));
            }
        })
    });

    for order in Order::ALL {
        c.bench_function(&format!("index_traverse_{order}"), |b| {
            b.iter(|| {
                for key in index.traverse(order) {
                    black_box(key);
                }
            })
        });
    }

    c.bench_function("index_delete", |b| {
        let mut index = index.clone();
        b.iter(|| {
            for value in &values {
                black_box(index.delete(*value));
            }
        })
    });
}

criterion_group!(benches, benchmarks);
criterion_main!(benches);
