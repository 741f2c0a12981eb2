// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use std::time::Duration;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use surfrec_ilp::{
    constraints::{ConstraintBuilder, ConstraintOptions},
    layout::ThresholdLayout,
    params::SolveParameters,
    solver::IlpSolver,
};
use surfrec_lp::microlp::MicrolpBackend;
use surfrec_model::{graph::GraphModel, index::ColumnIndex};

// Shape of the original random driver: 20 levels, unit gradient, costs
// uniform in [0, 1).
const NUM_LEVELS: usize = 20;
const MAX_GRADIENT: usize = 1;

fn random_chain(rng: &mut ChaCha8Rng, num_columns: usize) -> GraphModel {
    let mut model =
        GraphModel::with_capacity(num_columns, num_columns, NUM_LEVELS, MAX_GRADIENT).unwrap();
    let first = model.add_columns(num_columns).unwrap();
    for i in 0..num_columns {
        let costs: Vec<f64> = (0..NUM_LEVELS)
            .map(|_| rng.gen::<f64>())
            .collect();
        model.set_level_costs(first + i, costs).unwrap();
        if i + 1 < num_columns {
            model
                .add_edge(ColumnIndex::new(i), ColumnIndex::new(i + 1))
                .unwrap();
        }
    }
    model
}

fn bench_solve_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_chain");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(120));
    let parameters = SolveParameters::default();
    for &num_columns in &[100usize, 1000] {
        group.bench_function(format!("microlp_columns_{num_columns}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = ChaCha8Rng::seed_from_u64(123);
                    let model = random_chain(&mut rng, num_columns);
                    IlpSolver::from_model(model, MicrolpBackend::factory())
                },
                |mut solver| black_box(solver.min_surface(&parameters).unwrap()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_formulate_chain(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let model = random_chain(&mut rng, 1000);
    let layout = ThresholdLayout::new(NUM_LEVELS);
    let options = ConstraintOptions {
        zero_minimum_neighbors: Some(2),
        ..ConstraintOptions::default()
    };

    c.bench_function("formulate_chain_1000", |b| {
        b.iter(|| {
            let (rows, _) = ConstraintBuilder::new(&model, layout, options).build();
            black_box(rows.len())
        })
    });
}

criterion_group!(benches, bench_solve_chain, bench_formulate_chain);
criterion_main!(benches);
