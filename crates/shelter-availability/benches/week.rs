use std::hint::black_box;

use chrono::{Duration, NaiveDate, NaiveTime};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shelter_availability::{assemble, BusySlot};

/// `n` staggered reservations and `n / 4` multi-hour closures across the week.
fn slots(n: usize) -> (Vec<BusySlot>, Vec<BusySlot>) {
    let origin = NaiveDate::from_ymd_opt(2026, 3, 16)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let activity = (0..n)
        .map(|i| {
            let start = origin + Duration::minutes((i as i64 * 97) % (7 * 24 * 60));
            BusySlot::activity(i as u64, start, start + Duration::minutes(45))
        })
        .collect();
    let unavailability = (0..n / 4)
        .map(|i| {
            let start = origin + Duration::minutes((i as i64 * 389) % (7 * 24 * 60));
            BusySlot::unavailability(i as u64, start, start + Duration::hours(5))
        })
        .collect();
    (activity, unavailability)
}

fn bench_assemble(c: &mut Criterion) {
    let mut group = c.benchmark_group("assemble_week");
    let week_start = NaiveDate::from_ymd_opt(2026, 3, 16).unwrap();
    let opening = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    let closing = NaiveTime::from_hms_opt(18, 0, 0).unwrap();

    for n in [0usize, 10, 100, 1000] {
        let (activity, unavailability) = slots(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| {
                assemble(
                    black_box(week_start),
                    opening,
                    closing,
                    black_box(&activity),
                    black_box(&unavailability),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_assemble);
criterion_main!(benches);
