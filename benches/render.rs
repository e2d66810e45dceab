use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use trestle::border::{BorderMatch, BorderStyle};
use trestle::model::GridModel;
use trestle::table::Table;

const NUM_ROWS: usize = 5;
const NUM_WORDS_IN_CELL: usize = 25;
const AVERAGE_COLUMN_WIDTH: usize = 35;

fn generate_table(ncols: usize, mut seed: u64) -> Table<GridModel<String>> {
    let cells: Vec<String> = (0..NUM_ROWS * ncols)
        .map(|_| {
            seed = seed.wrapping_add(1);
            lipsum::lipsum_words_from_seed(NUM_WORDS_IN_CELL, seed)
        })
        .collect();
    let model = GridModel::new(cells, NUM_ROWS, ncols).unwrap();
    let mut table = Table::new(model);
    table
        .with_border(0, 0, NUM_ROWS, ncols, BorderMatch::ALL, BorderStyle::Thin)
        .unwrap();
    table
}

fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let ncols_choices = [1usize, 2, 3, 4, 5, 6, 8, 10];
    let seeds = 0..ncols_choices.len() as u64;
    for (&ncols, seed) in ncols_choices.iter().zip(seeds) {
        let table = generate_table(ncols, seed);
        group.bench_with_input(
            BenchmarkId::from_parameter(ncols),
            &(ncols, table),
            |b, (ncols, table)| {
                b.iter(|| {
                    table.render(AVERAGE_COLUMN_WIDTH * ncols).unwrap()
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench);
criterion_main!(benches);
