use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pane_nav::SpatialSorter;
use pane_nav::geometry::Rect;
use pane_nav::ir::{Direction, Pane, PaneSnapshot, Selection, SymbolRange, Viewport};
use pane_nav::relationships::{RawRelationship, RelationshipGraph};
use std::hint::black_box;

/// Jittered grid so rows and columns overlap unevenly, plus one child pane
/// per cell to exercise the parented fallback pass.
fn workspace(panes: usize) -> PaneSnapshot {
    let columns = (panes as f32).sqrt().ceil().max(1.0) as usize;
    (0..panes)
        .map(|idx| {
            let row = idx / columns;
            let col = idx % columns;
            let jitter = ((idx * 37) % 23) as f32;
            let pane = Pane::new(
                format!("pane-{idx}"),
                col as f32 * 640.0 + jitter,
                row as f32 * 420.0 - jitter,
                560.0 + jitter * 2.0,
                360.0,
            )
            .with_identifier(format!("editor-{idx}"));
            if idx % 5 == 4 {
                pane.with_parent(format!("editor-{}", idx - 1))
            } else {
                pane
            }
        })
        .collect()
}

fn facts(panes: usize) -> Vec<RawRelationship> {
    let mut facts = Vec::new();
    for idx in 0..panes {
        let from = format!("pane-{idx}");
        for offset in 1..=3 {
            let to = format!("pane-{}", (idx + offset * 7) % panes);
            facts.push(RawRelationship::symbol_dependency(
                from.clone(),
                to.clone(),
                SymbolRange::new(offset as u32, 1, offset as u32, 12),
            ));
        }
        if idx % 4 == 0 {
            facts.push(RawRelationship::same_file(from, format!("pane-{}", (idx + 1) % panes)));
        }
    }
    facts
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for size in [16usize, 64, 256] {
        let snapshot = workspace(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| {
                let mut sorter = SpatialSorter::default();
                sorter.should_regenerate_relationships(black_box(snapshot.clone()));
                black_box(sorter.sorted_panes().len());
            });
        });
    }
    group.finish();
}

fn bench_navigation_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("navigation_cycle");
    let viewport = Viewport::from_bounds(Rect::new(0.0, 0.0, 1920.0, 1080.0), 1.0);
    let selection = Selection::new();
    for size in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let mut sorter = SpatialSorter::default();
            sorter.should_regenerate_relationships(workspace(size));
            b.iter(|| {
                sorter.reset_index();
                for _ in 0..size {
                    black_box(sorter.next(Direction::Next, &viewport, &selection).is_some());
                }
            });
        });
    }
    group.finish();
}

fn bench_graph_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for size in [16usize, 64, 256] {
        let facts = facts(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &facts, |b, facts| {
            b.iter(|| {
                let graph = RelationshipGraph::build(black_box(facts));
                black_box(graph.edge_count());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_sort, bench_navigation_cycle, bench_graph_build
);
criterion_main!(benches);
