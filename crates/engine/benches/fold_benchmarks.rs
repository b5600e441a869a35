use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use chrono::{DateTime, Utc};
use tablefold_core::{EntityId, TenantId};
use tablefold_engine::{Event, FoldPolicy, ProjectionFolder, ProjectionTable};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Counter {
    id: EntityId,
    value: i64,
}

#[derive(Debug, Clone)]
enum CounterEvent {
    Opened { id: EntityId },
    Incremented { id: EntityId, delta: i64 },
    Closed { id: EntityId },
}

impl Event for CounterEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CounterEvent::Opened { .. } => "counters.counter.opened",
            CounterEvent::Incremented { .. } => "counters.counter.incremented",
            CounterEvent::Closed { .. } => "counters.counter.closed",
        }
    }

    fn entity_id(&self) -> Option<EntityId> {
        match self {
            CounterEvent::Opened { id }
            | CounterEvent::Incremented { id, .. }
            | CounterEvent::Closed { id } => Some(*id),
        }
    }

    fn tenant_id(&self) -> Option<TenantId> {
        None
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }
}

struct CounterPolicy;

impl FoldPolicy for CounterPolicy {
    type Ev = CounterEvent;
    type Entity = Counter;

    fn is_create(&self, event: &CounterEvent) -> bool {
        matches!(event, CounterEvent::Opened { .. })
    }

    fn create(&self, event: &CounterEvent) -> Option<Counter> {
        match event {
            CounterEvent::Opened { id } => Some(Counter { id: *id, value: 0 }),
            _ => None,
        }
    }

    fn apply(&self, mut counter: Counter, event: &CounterEvent) -> Counter {
        if let CounterEvent::Incremented { delta, .. } = event {
            counter.value += delta;
        }
        counter
    }

    fn is_delete(&self, event: &CounterEvent) -> bool {
        matches!(event, CounterEvent::Closed { .. })
    }
}

/// Build a log of `entities` create events followed by round-robin updates.
fn build_log(entities: u128, total_events: usize) -> Vec<CounterEvent> {
    let ids: Vec<EntityId> = (1..=entities)
        .map(|n| EntityId::from_uuid(Uuid::from_u128(n)))
        .collect();

    let mut events: Vec<CounterEvent> = ids
        .iter()
        .map(|id| CounterEvent::Opened { id: *id })
        .collect();

    for i in 0..total_events.saturating_sub(events.len()) {
        events.push(CounterEvent::Incremented {
            id: ids[i % ids.len()],
            delta: (i % 7) as i64 - 3,
        });
    }

    events
}

fn bench_fold_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("fold_throughput");
    let folder = ProjectionFolder::new(CounterPolicy);

    for &total in &[1_000usize, 10_000, 100_000] {
        let events = build_log(64, total);
        group.throughput(Throughput::Elements(total as u64));
        group.bench_with_input(BenchmarkId::from_parameter(total), &events, |b, events| {
            b.iter(|| {
                let table = folder
                    .fold(ProjectionTable::new(), black_box(events))
                    .unwrap();
                black_box(table)
            });
        });
    }

    group.finish();
}

fn bench_incremental_fold(c: &mut Criterion) {
    let folder = ProjectionFolder::new(CounterPolicy);
    let base = build_log(64, 10_000);
    let table = folder.fold(ProjectionTable::new(), &base).unwrap();
    let increment = build_log(64, 1_064)[64..].to_vec();

    c.bench_function("fold_incremental_1k_onto_10k", |b| {
        b.iter(|| {
            let next = folder
                .fold(black_box(table.clone()), black_box(&increment))
                .unwrap();
            black_box(next)
        });
    });
}

criterion_group!(benches, bench_fold_throughput, bench_incremental_fold);
criterion_main!(benches);
