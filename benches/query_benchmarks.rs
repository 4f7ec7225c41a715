//! Performance benchmarks for the roster query engine.
//!
//! Every query is a single bounded pass over its input (linearithmic for the
//! department merge), so throughput should scale linearly with roster size.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use roster_query::models::{Employee, PositionType};
use roster_query::query::{
    average_rating_by_position, count_by_efficiency, distinct_above_rating, merge_distinct_sorted,
    paginate,
};

const POSITIONS: [PositionType; 4] = [
    PositionType::Manager,
    PositionType::Analyst,
    PositionType::Developer,
    PositionType::Tester,
];

/// Creates a roster of the given size with roughly one duplicate entry in
/// eight and ratings spread over 0..100.
fn create_roster(size: usize) -> Vec<Employee> {
    (0..size)
        .map(|i| {
            let id = if i % 8 == 7 { i as u32 - 1 } else { i as u32 };
            Employee {
                id,
                name: format!("Name{id}"),
                rating: (id as i32 * 37) % 101,
                position_type: POSITIONS[id as usize % POSITIONS.len()],
            }
        })
        .collect()
}

fn bench_distinct_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct_above_rating");
    for size in [100, 1_000, 10_000] {
        let roster = create_roster(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| distinct_above_rating(black_box(roster), black_box(50)));
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_distinct_sorted");
    for size in [100, 1_000, 10_000] {
        // Four departments with overlapping membership.
        let departments: Vec<Vec<Employee>> = (0..4)
            .map(|_| create_roster(size / 4))
            .collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &departments,
            |b, departments| {
                b.iter(|| merge_distinct_sorted(black_box(departments)));
            },
        );
    }
    group.finish();
}

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("grouping");
    let roster = create_roster(10_000);
    group.throughput(Throughput::Elements(roster.len() as u64));
    group.bench_function("average_rating_by_position", |b| {
        b.iter(|| average_rating_by_position(black_box(&roster)));
    });
    group.bench_function("count_by_efficiency", |b| {
        b.iter(|| count_by_efficiency(black_box(&roster)));
    });
    group.finish();
}

fn bench_pagination(c: &mut Criterion) {
    let roster = create_roster(10_000);
    c.bench_function("paginate_middle_page", |b| {
        b.iter(|| paginate(black_box(&roster), black_box(250), black_box(20)));
    });
}

criterion_group!(
    benches,
    bench_distinct_filter,
    bench_merge,
    bench_grouping,
    bench_pagination
);
criterion_main!(benches);
