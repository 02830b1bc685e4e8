//! Fixed-width time bucketing.
//!
//! Partitions `[start, start + period * repeat)` into `repeat` contiguous
//! half-open buckets and counts alert creations per bucket.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::Alert;

/// A repeating time interval: `repeat` back-to-back buckets of `period`
/// starting at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatingInterval {
    pub start: DateTime<Utc>,
    pub period: Duration,
    pub repeat: u32,
}

impl RepeatingInterval {
    /// Exclusive end of the whole interval.
    pub fn end(&self) -> DateTime<Utc> {
        self.start + self.period * self.repeat as i32
    }
}

/// One bucket of the metrics series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDataPoint {
    /// Bucket start.
    pub timestamp: DateTime<Utc>,
    pub alert_count: usize,
}

/// Map each bucket of `interval` to a data point counting the alerts whose
/// creation time falls in `[bucket_start, bucket_end)`.
///
/// `alerts` must be sorted ascending by `created_at`. Because each bucket's
/// upper bound only increases, counting is a single forward sweep: the
/// index into the alert slice advances monotonically and nothing is
/// re-scanned. Alerts created before `interval.start` are never counted.
///
/// Panics on a non-positive period; callers validate intervals before
/// reaching this point, so hitting the panic is a programming defect (the
/// alternative is an infinite loop).
pub fn split_range(interval: &RepeatingInterval, alerts: &[Alert]) -> Vec<AlertDataPoint> {
    assert!(
        interval.period > Duration::zero(),
        "bucket period must be positive"
    );

    let mut idx = 0;
    while idx < alerts.len() && alerts[idx].created_at < interval.start {
        idx += 1;
    }

    let end = interval.end();
    let mut points = Vec::new();
    let mut ts = interval.start;
    while ts < end {
        let mut next = ts + interval.period;
        if next > end {
            next = end;
        }

        let mut count = 0;
        while idx < alerts.len() && alerts[idx].created_at < next {
            idx += 1;
            count += 1;
        }

        points.push(AlertDataPoint {
            timestamp: ts,
            alert_count: count,
        });
        ts = next;
    }

    points
}
