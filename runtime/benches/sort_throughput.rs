//! Reducer throughput for the sort toggle over lists of varying size.

#![allow(missing_docs, clippy::unwrap_used)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use todotable_core::reducer::Reducer;
use todotable_core::types::{SortKey, Todo, TodoAction, TodoState};
use todotable_core::{TodoEnvironment, TodoReducer};

/// Builds `len` todos in a deterministic non-sorted order.
fn scrambled_todos(len: u64) -> Vec<Todo> {
    (0..len)
        .map(|i| {
            let id = (i * 7919) % len;
            Todo {
                id,
                title: format!("todo-{id:05}"),
                completed: id % 3 == 0,
            }
        })
        .collect()
}

fn bench_toggle_sort(c: &mut Criterion) {
    let env = TodoEnvironment::detached();
    let mut group = c.benchmark_group("toggle_sort");

    for len in [16u64, 256, 4096] {
        let todos = scrambled_todos(len);

        for key in [SortKey::Id, SortKey::Title, SortKey::Completed] {
            group.bench_with_input(
                BenchmarkId::new(format!("{key}"), len),
                &todos,
                |b, todos| {
                    b.iter(|| {
                        let mut state = TodoState {
                            todos: todos.clone(),
                            ..TodoState::new()
                        };
                        TodoReducer.reduce(
                            &mut state,
                            TodoAction::ToggleSort { key, order: None },
                            &env,
                        );
                        black_box(state)
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_toggle_sort);
criterion_main!(benches);
