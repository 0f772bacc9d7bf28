//! Chart data preparation for bar and pie charts.
//!
//! Rendering is left to the caller. This module only decides what goes on the
//! chart: display labels, values, ordering, and which pie slices are large
//! enough to be labelled.

use serde::Serialize;
use thiserror::Error;

use crate::record::Record;

/// Slices at or below this share of the total get neither label nor annotation.
pub const LABEL_THRESHOLD_PERCENT: f64 = 10.0;

/// Errors produced while preparing chart data.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChartError {
    /// Nothing to draw, or every value is zero so shares are undefined.
    #[error("no chart data: input is empty or all durations are zero")]
    EmptyOrZeroData,
}

/// Parallel label and value arrays, one entry per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartArrays {
    labels: Vec<String>,
    values: Vec<f64>,
}

/// A pie slice ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    /// Display label, empty for small slices.
    pub label: String,
    /// Underlying value, kept even when the label is suppressed.
    pub value: f64,
    /// Share of the total, 0 to 100.
    pub percentage: f64,
    /// Percentage text such as `"42.00%"`, empty for small slices.
    pub annotation: String,
}

impl ChartArrays {
    /// Builds chart arrays from records, stripping `suffix` once from each name.
    pub fn from_records(records: &[Record], suffix: Option<&str>) -> Result<Self, ChartError> {
        let labels = records
            .iter()
            .map(|r| match suffix {
                Some(suffix) if !suffix.is_empty() => r.name.replacen(suffix, "", 1),
                _ => r.name.clone(),
            })
            .collect();
        let values: Vec<f64> = records.iter().map(|r| r.seconds).collect();

        let total: f64 = values.iter().sum();
        if values.is_empty() || total <= 0.0 {
            return Err(ChartError::EmptyOrZeroData);
        }

        tracing::debug!(slices = values.len(), total, "prepared chart arrays");
        Ok(Self { labels, values })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all values. Always positive for a successfully built chart.
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Returns the arrays in reverse order.
    ///
    /// Input arrives longest-first, so a bar chart drawn bottom-up from the
    /// reversed arrays puts the slowest unit at the top.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            labels: self.labels.iter().rev().cloned().collect(),
            values: self.values.iter().rev().copied().collect(),
        }
    }

    /// Applies the pie labelling rules to every slice.
    pub fn pie_slices(&self) -> Vec<PieSlice> {
        let total = self.total();
        self.labels
            .iter()
            .zip(&self.values)
            .map(|(label, &value)| {
                let pct = percentage(value, total);
                PieSlice {
                    label: conditional_label(label, value, total).to_string(),
                    value,
                    percentage: pct,
                    annotation: conditional_annotation(pct),
                }
            })
            .collect()
    }
}

/// Builds chart arrays from records. See [`ChartArrays::from_records`].
pub fn to_chart_arrays(records: &[Record], suffix: Option<&str>) -> Result<ChartArrays, ChartError> {
    ChartArrays::from_records(records, suffix)
}

/// Share of `total` taken by `value`, in percent. Callers guarantee `total > 0`.
fn percentage(value: f64, total: f64) -> f64 {
    value * 100.0 / total
}

/// Returns `label` if the slice is larger than the threshold, else `""`.
///
/// `total` must be positive. A non-positive or NaN total has no shares, so
/// every label is suppressed.
pub fn conditional_label(label: &str, value: f64, total: f64) -> &str {
    if total > 0.0 && percentage(value, total) > LABEL_THRESHOLD_PERCENT {
        label
    } else {
        ""
    }
}

/// Formats a percentage with two decimals if it exceeds the threshold, else `""`.
pub fn conditional_annotation(pct: f64) -> String {
    if pct > LABEL_THRESHOLD_PERCENT {
        format!("{pct:.2}%")
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(values: &[f64]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, &seconds)| Record {
                name: format!("unit-{i}.service"),
                seconds,
            })
            .collect()
    }

    #[test]
    fn labels_strip_suffix_once() {
        let records = vec![
            Record {
                name: "a.service".to_string(),
                seconds: 1.0,
            },
            Record {
                name: "b.service.service".to_string(),
                seconds: 2.0,
            },
            Record {
                name: "dev-sda1.device".to_string(),
                seconds: 3.0,
            },
        ];
        let chart = to_chart_arrays(&records, Some(".service")).unwrap();

        assert_eq!(chart.labels(), ["a", "b.service", "dev-sda1.device"]);
        assert_eq!(chart.values(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn no_suffix_keeps_names() {
        let chart = to_chart_arrays(&records(&[1.0, 2.0]), None).unwrap();
        assert_eq!(chart.labels(), ["unit-0.service", "unit-1.service"]);

        let chart = to_chart_arrays(&records(&[1.0]), Some("")).unwrap();
        assert_eq!(chart.labels(), ["unit-0.service"]);
    }

    #[test]
    fn reversing_twice_is_identity() {
        let chart = to_chart_arrays(&records(&[5.0, 3.0, 1.0]), Some(".service")).unwrap();
        let reversed = chart.reversed();

        assert_eq!(reversed.labels(), ["unit-2", "unit-1", "unit-0"]);
        assert_eq!(reversed.values(), [1.0, 3.0, 5.0]);
        assert_eq!(reversed.reversed(), chart);
    }

    #[test]
    fn empty_input_is_an_error() {
        assert_eq!(to_chart_arrays(&[], None), Err(ChartError::EmptyOrZeroData));
    }

    #[test]
    fn all_zero_values_are_an_error() {
        assert_eq!(
            to_chart_arrays(&records(&[0.0, 0.0, 0.0]), None),
            Err(ChartError::EmptyOrZeroData)
        );
    }

    #[test]
    fn small_slices_lose_labels_but_keep_values() {
        let chart = to_chart_arrays(&records(&[80.0, 10.0, 5.0, 5.0]), Some(".service")).unwrap();
        let slices = chart.pie_slices();

        let labels: Vec<_> = slices.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["unit-0", "", "", ""]);

        let annotations: Vec<_> = slices.iter().map(|s| s.annotation.as_str()).collect();
        assert_eq!(annotations, ["80.00%", "", "", ""]);

        let values: Vec<_> = slices.iter().map(|s| s.value).collect();
        assert_eq!(values, [80.0, 10.0, 5.0, 5.0]);
    }

    #[test]
    fn exactly_ten_percent_is_suppressed() {
        assert_eq!(conditional_label("x", 10.0, 100.0), "");
        assert_eq!(conditional_annotation(10.0), "");
    }

    #[test]
    fn just_above_ten_percent_is_shown() {
        assert_eq!(conditional_label("x", 10.0001, 100.0), "x");
        assert_eq!(conditional_annotation(10.0001), "10.00%");
    }

    #[test]
    fn non_positive_total_suppresses_label() {
        assert_eq!(conditional_label("x", 1.0, 0.0), "");
        assert_eq!(conditional_label("x", 0.0, 0.0), "");
        assert_eq!(conditional_label("x", 1.0, -5.0), "");
        assert_eq!(conditional_label("x", 1.0, f64::NAN), "");
    }

    #[test]
    fn annotation_has_two_decimals() {
        assert_eq!(conditional_annotation(33.333_333), "33.33%");
        assert_eq!(conditional_annotation(100.0), "100.00%");
    }

    #[test]
    fn single_slice_owns_everything() {
        let chart = to_chart_arrays(&records(&[0.25]), None).unwrap();
        let slices = chart.pie_slices();
        assert_eq!(slices.len(), 1);
        assert!((slices[0].percentage - 100.0).abs() < f64::EPSILON);
        assert_eq!(slices[0].annotation, "100.00%");
    }
}
