use criterion::{criterion_group, criterion_main, Criterion};
use once_cell::sync::Lazy;
use std::hint::black_box;
use std::path::PathBuf;

use transit_lib::{build_graph, find_path, Graph, LineTable, Network};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/mtr_partial.csv")
}

/// Square grid of `size * size` stations: one line per row and per column.
fn grid_table(size: usize) -> LineTable {
    let name = |row: usize, col: usize| format!("S{row}-{col}");
    let mut table = LineTable::new();
    for row in 0..size {
        table.insert(format!("Row {row}"), (0..size).map(|col| name(row, col)).collect());
    }
    for col in 0..size {
        table.insert(format!("Col {col}"), (0..size).map(|row| name(row, col)).collect());
    }
    table
}

static FIXTURE: Lazy<Network> = Lazy::new(|| {
    let table = LineTable::from_path(&fixture_path()).expect("fixture loads");
    Network::from_table(&table).expect("fixture builds")
});
static GRID: Lazy<Graph> = Lazy::new(|| build_graph(&grid_table(60)).expect("grid builds"));

fn benchmark_pathfinding(c: &mut Criterion) {
    let network = &*FIXTURE;

    c.bench_function("path_kennedy_town_disneyland", |b| {
        b.iter(|| {
            let summary = network
                .path_between("Kennedy Town", "Disneyland Resort")
                .expect("route exists");
            black_box(summary.hops)
        });
    });

    let grid = &*GRID;
    let start = grid.station("S0-0").expect("corner exists");
    let goal = grid.station("S59-59").expect("corner exists");
    c.bench_function("bfs_grid_corner_to_corner", |b| {
        b.iter(|| {
            let path = find_path(grid, start, goal).expect("grid is connected");
            black_box(path.hop_count())
        });
    });

    c.bench_function("build_grid_graph", |b| {
        let table = grid_table(60);
        b.iter(|| black_box(build_graph(&table).expect("grid builds").len()));
    });
}

criterion_group!(benches, benchmark_pathfinding);
criterion_main!(benches);
