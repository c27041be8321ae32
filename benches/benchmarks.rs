// benches/benchmarks.rs — Performance benchmarks (criterion)
//
// The conflict check is the hot path of bulk timetable imports, so it
// is measured against busy days of increasing size, for both the
// accept case (scan everything) and the reject case (early return).

use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use uuid::Uuid;

use registrar::scheduling::{check_conflicts, Session};

fn t(minutes: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).expect("valid time")
}

/// A day with `n` sessions packed back to back, all disjoint from the
/// 20:00–21:00 slot the accept-case candidate asks for.
fn busy_day(n: usize) -> Vec<Session> {
    let date = NaiveDate::from_ymd_opt(2026, 9, 1).expect("valid date");
    (0..n)
        .map(|i| Session {
            id: Some(Uuid::new_v4()),
            course_id: Uuid::new_v4(),
            group_id: Uuid::new_v4(),
            trainer_id: Some(Uuid::new_v4()),
            date,
            start: t(8 * 60 + (i as u32 % 6) * 90),
            end: t(8 * 60 + (i as u32 % 6) * 90 + 60),
            room: format!("R{i}"),
        })
        .collect()
}

fn bench_conflict_check(c: &mut Criterion) {
    let mut group = c.benchmark_group("check_conflicts");

    for n in [10, 100, 1000] {
        let day = busy_day(n);
        let date = day[0].date;

        let free_slot = Session::candidate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Some(Uuid::new_v4()),
            date,
            t(20 * 60),
            t(21 * 60),
            "FREE-ROOM",
        );
        group.bench_with_input(BenchmarkId::new("accept", n), &n, |b, _| {
            b.iter(|| check_conflicts(black_box(&free_slot), black_box(&day)))
        });

        // Clashes with the last booked room, worst case for the scan.
        let clash = Session::candidate(
            Uuid::new_v4(),
            Uuid::new_v4(),
            Some(Uuid::new_v4()),
            date,
            day[n - 1].start,
            day[n - 1].end,
            day[n - 1].room.as_str(),
        );
        group.bench_with_input(BenchmarkId::new("reject", n), &n, |b, _| {
            b.iter(|| check_conflicts(black_box(&clash), black_box(&day)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_conflict_check);
criterion_main!(benches);
