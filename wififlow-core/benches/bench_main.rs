use chrono::{DateTime, Duration, FixedOffset};
use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use wififlow_core::prelude::*;

const ROUTERS: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

/// A day of synthetic detections: `users` devices, 40 sightings each
fn synthetic_day(users: usize) -> Vec<DetectionEvent> {
    let start: DateTime<FixedOffset> =
        DateTime::parse_from_rfc3339("2022-12-01T06:00:00+03:00").unwrap();
    let mut events = Vec::with_capacity(users * 40);
    for user in 0..users {
        let mut ts = start + Duration::seconds((user * 37 % 3600) as i64);
        for step in 0..40 {
            ts += Duration::seconds(((user + step) * 13 % 240 + 20) as i64);
            events.push(DetectionEvent {
                user: format!("u{user}"),
                router_id: ROUTERS[(user + step * 3) % ROUTERS.len()].to_string(),
                timestamp: ts,
            });
        }
    }
    events
}

fn bench_preprocess(c: &mut Criterion) {
    let events = synthetic_day(2_000);

    c.bench_function("extract_transitions", |b| {
        b.iter_batched(
            || events.clone(),
            |events| black_box(extract_transitions(events)),
            BatchSize::LargeInput,
        );
    });

    let transitions = extract_transitions(events);
    c.bench_function("aggregate_edges", |b| {
        b.iter(|| black_box(aggregate_edges(black_box(&transitions))));
    });
}

criterion_group!(benches, bench_preprocess);
criterion_main!(benches);
