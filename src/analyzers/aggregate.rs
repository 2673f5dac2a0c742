use crate::analyzers::types::{Report, Run, WeekSummary};
use crate::analyzers::utility::round2;
use crate::analyzers::weeks::WeekCalendar;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Groups runs into weeks and computes per-week and cumulative mileage.
///
/// `runs` must already be filtered to the report range and sorted by date;
/// each week's `days` keeps that order. Weeks without runs are omitted. Every
/// sum, average and cumulative step is rounded to two decimals.
pub fn aggregate_weeks(runs: &[Run], range_start: NaiveDate) -> Report {
    let calendar = WeekCalendar::new(range_start);

    let mut buckets: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for run in runs {
        buckets
            .entry(calendar.week_start(run.date))
            .or_default()
            .push(round2(run.miles));
    }

    let mut running_total = 0.0;
    let weeks = buckets
        .into_iter()
        .map(|(start_date, days)| {
            let total = round2(days.iter().sum());
            let average = if days.is_empty() {
                0.0
            } else {
                round2(total / days.len() as f64)
            };
            running_total = round2(running_total + total);

            WeekSummary {
                start_date,
                total,
                average,
                running_total,
                days,
            }
        })
        .collect();

    Report { weeks }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn run(date: NaiveDate, miles: f64) -> Run {
        Run { date, miles }
    }

    #[test]
    fn test_empty_runs_yield_no_weeks() {
        let report = aggregate_weeks(&[], ymd(2025, 1, 1));
        assert!(report.weeks.is_empty());
    }

    #[test]
    fn test_stub_week_then_monday_week() {
        let runs = [
            run(ymd(2025, 1, 1), 3.0),
            run(ymd(2025, 1, 2), 2.0),
            run(ymd(2025, 1, 6), 4.0),
        ];
        let report = aggregate_weeks(&runs, ymd(2025, 1, 1));

        assert_eq!(report.weeks.len(), 2);

        let stub = &report.weeks[0];
        assert_eq!(stub.start_date, ymd(2025, 1, 1));
        assert_eq!(stub.total, 5.0);
        assert_eq!(stub.average, 2.5);
        assert_eq!(stub.running_total, 5.0);
        assert_eq!(stub.days, vec![3.0, 2.0]);

        let second = &report.weeks[1];
        assert_eq!(second.start_date, ymd(2025, 1, 6));
        assert_eq!(second.total, 4.0);
        assert_eq!(second.running_total, 9.0);
        assert_eq!(second.days, vec![4.0]);
    }

    #[test]
    fn test_gap_weeks_are_not_materialized() {
        let runs = [run(ymd(2025, 1, 6), 1.0), run(ymd(2025, 2, 3), 2.0)];
        let report = aggregate_weeks(&runs, ymd(2025, 1, 1));

        let keys: Vec<_> = report.weeks.iter().map(|w| w.start_date).collect();
        assert_eq!(keys, vec![ymd(2025, 1, 6), ymd(2025, 2, 3)]);
        assert_eq!(report.weeks[1].running_total, 3.0);
    }

    #[test]
    fn test_rounding_at_each_step() {
        let runs = [
            run(ymd(2025, 1, 6), 3.1),
            run(ymd(2025, 1, 7), 2.2),
            run(ymd(2025, 1, 8), 1.0),
        ];
        let report = aggregate_weeks(&runs, ymd(2025, 1, 1));
        let week = &report.weeks[0];

        assert_eq!(week.total, 6.3);
        assert_eq!(week.average, 2.1);
        assert_eq!(week.running_total, 6.3);
    }

    #[test]
    fn test_average_tie_rounds_to_even() {
        let runs = [run(ymd(2025, 1, 6), 3.0), run(ymd(2025, 1, 7), 3.25)];
        let report = aggregate_weeks(&runs, ymd(2025, 1, 1));
        let week = &report.weeks[0];

        assert_eq!(week.total, 6.25);
        assert_eq!(week.average, 3.12);
        assert_eq!(week.running_total, 6.25);
    }

    #[test]
    fn test_running_total_is_non_decreasing_and_keys_ascend() {
        let runs: Vec<Run> = (0..60)
            .map(|i| run(ymd(2025, 1, 1) + chrono::Days::new(i * 3), 1.37))
            .collect();
        let report = aggregate_weeks(&runs, ymd(2025, 1, 1));

        for pair in report.weeks.windows(2) {
            assert!(pair[0].start_date < pair[1].start_date);
            assert!(pair[0].running_total <= pair[1].running_total);
        }
        for week in &report.weeks {
            let sum: f64 = week.days.iter().sum();
            assert_eq!(round2(sum), week.total);
            assert_eq!(round2(week.total / week.days.len() as f64), week.average);
        }
    }
}
