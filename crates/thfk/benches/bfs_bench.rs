//! Criterion microbenches for the frontier-BFS search (group "bfs").
//!
//! Uses the arc-index-9 trefoil grid diagram to keep runs fast while still
//! exercising a state space bigger than the toy unknot examples in the unit
//! tests.

use criterion::{criterion_group, criterion_main, Criterion};
use thfk::observer::{CancelToken, Limits};

const TREFOIL9_X: [u32; 9] = [4, 5, 6, 7, 8, 9, 1, 2, 3];
const TREFOIL9_O: [u32; 9] = [7, 8, 9, 1, 2, 3, 4, 5, 6];

fn bench_lambda_plus(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    group.bench_function("trefoil9_lambda_plus", |b| {
        b.iter(|| thfk::api::lambda_plus(&TREFOIL9_X, &TREFOIL9_O).unwrap())
    });
    group.finish();
}

fn bench_theta_2(c: &mut Criterion) {
    let mut group = c.benchmark_group("bfs");
    group.bench_function("trefoil9_theta_2", |b| {
        b.iter(|| {
            thfk::api::null_homologous_lift(
                &TREFOIL9_X,
                2,
                &TREFOIL9_X,
                &TREFOIL9_O,
                &Limits::default(),
                &CancelToken::new(),
            )
            .unwrap()
        })
    });
    group.finish();
}

fn bfs_benches(c: &mut Criterion) {
    bench_lambda_plus(c);
    bench_theta_2(c);
}

criterion_group!(benches, bfs_benches);
criterion_main!(benches);
