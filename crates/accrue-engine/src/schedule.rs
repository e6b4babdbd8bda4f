//! Decomposition of a bond's life into compounding intervals.

use accrue_core::types::Date;

/// One compounding interval, before its rate entry is resolved.
///
/// The interval is half-open `[start, end)`. `complete` is false only for
/// a trailing stub truncated at the valuation horizon; incomplete
/// intervals earn no interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    /// First day of the interval.
    pub start: Date,
    /// Day after the last day of the interval.
    pub end: Date,
    /// Whether the interval runs its full compounding length.
    pub complete: bool,
}

/// A finite, lazy sequence of compounding intervals from issue to the
/// valuation horizon.
///
/// Interval boundaries are anchored at the issue date (issue + k months)
/// rather than chained, so a month-end issue date cannot drift. The last
/// interval is truncated at the horizon and flagged incomplete when the
/// span does not divide evenly.
#[derive(Debug, Clone)]
pub struct CompoundingSchedule {
    issue: Date,
    horizon: Date,
    months: u32,
    index: i32,
}

impl CompoundingSchedule {
    /// Creates a schedule over `[issue, horizon)` with intervals of
    /// `months` months. An empty range yields no intervals.
    #[must_use]
    pub fn new(issue: Date, horizon: Date, months: u32) -> Self {
        Self {
            issue,
            horizon,
            months,
            index: 0,
        }
    }
}

impl Iterator for CompoundingSchedule {
    type Item = PeriodSpan;

    fn next(&mut self) -> Option<PeriodSpan> {
        if self.months == 0 {
            return None;
        }
        let start = self.issue.add_months(self.index * self.months as i32).ok()?;
        if start >= self.horizon {
            return None;
        }
        let nominal_end = self
            .issue
            .add_months((self.index + 1) * self.months as i32)
            .ok()?;
        self.index += 1;

        let complete = nominal_end <= self.horizon;
        Some(PeriodSpan {
            start,
            end: nominal_end.min(self.horizon),
            complete,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Date {
        Date::parse(s).unwrap()
    }

    #[test]
    fn test_even_decomposition() {
        let spans: Vec<_> =
            CompoundingSchedule::new(d("2020-01-01"), d("2021-01-01"), 6).collect();
        assert_eq!(
            spans,
            vec![
                PeriodSpan {
                    start: d("2020-01-01"),
                    end: d("2020-07-01"),
                    complete: true
                },
                PeriodSpan {
                    start: d("2020-07-01"),
                    end: d("2021-01-01"),
                    complete: true
                },
            ]
        );
    }

    #[test]
    fn test_truncated_stub() {
        let spans: Vec<_> =
            CompoundingSchedule::new(d("2020-01-01"), d("2020-10-15"), 6).collect();
        assert_eq!(spans.len(), 2);
        assert!(spans[0].complete);
        assert!(!spans[1].complete);
        assert_eq!(spans[1].start, d("2020-07-01"));
        assert_eq!(spans[1].end, d("2020-10-15"));
    }

    #[test]
    fn test_empty_range() {
        assert_eq!(
            CompoundingSchedule::new(d("2020-01-01"), d("2020-01-01"), 6).count(),
            0
        );
    }

    #[test]
    fn test_month_end_anchor_does_not_drift() {
        // Issue on Aug 31: boundaries land on Feb end / Aug 31, never Feb 28 + 6m = Aug 28.
        let spans: Vec<_> =
            CompoundingSchedule::new(d("2019-08-31"), d("2021-08-31"), 6).collect();
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[0].end, d("2020-02-29"));
        assert_eq!(spans[1].end, d("2020-08-31"));
        assert_eq!(spans[2].end, d("2021-02-28"));
        assert_eq!(spans[3].end, d("2021-08-31"));
        assert!(spans.iter().all(|s| s.complete));
    }

    #[test]
    fn test_restartable() {
        let schedule = CompoundingSchedule::new(d("2020-01-01"), d("2021-01-01"), 6);
        let first: Vec<_> = schedule.clone().collect();
        let second: Vec<_> = schedule.collect();
        assert_eq!(first, second);
    }
}
