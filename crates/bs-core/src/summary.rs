//! Aggregate statistics over a record sequence.

use serde::Serialize;

use crate::record::Record;

/// Totals for one blame listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub total_seconds: f64,
    pub mean_seconds: f64,
    /// First record with the largest duration, in input order.
    pub slowest: Option<Record>,
}

impl Summary {
    #[allow(clippy::cast_precision_loss)]
    pub fn from_records(records: &[Record]) -> Self {
        let count = records.len();
        let total_seconds: f64 = records.iter().map(|r| r.seconds).sum();
        let mean_seconds = if count == 0 {
            0.0
        } else {
            total_seconds / count as f64
        };

        let slowest = records
            .iter()
            .fold(None::<&Record>, |best, r| match best {
                Some(b) if b.seconds >= r.seconds => Some(b),
                _ => Some(r),
            })
            .cloned();

        Self {
            count,
            total_seconds,
            mean_seconds,
            slowest,
        }
    }
}
