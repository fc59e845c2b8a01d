//! Helpers to convert domain data into egui-facing view structs.

use crate::gateway::FeatureImportance;

/// One horizontal bar in the importance chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportanceRow {
    pub label: &'static str,
    pub value: f64,
    /// Bar length relative to the largest value, in `[0, 1]`.
    pub fraction: f32,
}

/// Build chart rows in the order given; never re-sorted.
pub fn importance_rows(importances: &[FeatureImportance]) -> Vec<ImportanceRow> {
    let max = importances
        .iter()
        .map(|bar| bar.value)
        .filter(|value| value.is_finite())
        .fold(0.0_f64, f64::max);
    importances
        .iter()
        .map(|bar| ImportanceRow {
            label: bar.field,
            value: bar.value,
            fraction: if max > 0.0 && bar.value.is_finite() {
                (bar.value / max).clamp(0.0, 1.0) as f32
            } else {
                0.0
            },
        })
        .collect()
}

/// Render a submitted value without rounding it.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn bars(values: &[f64]) -> Vec<FeatureImportance> {
        schema::FIELDS
            .iter()
            .zip(values)
            .map(|(spec, &value)| FeatureImportance {
                field: spec.name,
                value,
            })
            .collect()
    }

    #[test]
    fn rows_preserve_declared_order() {
        let rows = importance_rows(&bars(&[0.1, 0.4, 0.05, 0.2, 0.0, 0.1, 0.05, 0.05, 0.05]));
        let labels: Vec<_> = rows.iter().map(|row| row.label).collect();
        assert_eq!(labels, schema::column_names().to_vec());
        assert_eq!(rows[1].fraction, 1.0);
        assert_eq!(rows[3].fraction, 0.5);
        assert_eq!(rows[4].fraction, 0.0);
        assert_eq!(rows[0].value, 0.1);
    }

    #[test]
    fn all_zero_importances_have_empty_bars() {
        let rows = importance_rows(&bars(&[0.0; 9]));
        assert!(rows.iter().all(|row| row.fraction == 0.0));
    }

    #[test]
    fn values_are_shown_unrounded() {
        assert_eq!(format_value(7.0), "7");
        assert_eq!(format_value(12345.678), "12345.678");
        assert_eq!(format_value(0.1), "0.1");
    }
}
