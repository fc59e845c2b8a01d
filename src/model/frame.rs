use crate::record::MeasurementRecord;
use crate::schema;

/// Column-labelled table handed to a model.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureFrame {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureFrame {
    /// Build a frame from explicit columns and rows.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Self {
        Self { columns, rows }
    }

    /// Wrap one record as a single-row frame in schema column order.
    pub fn single_row(record: &MeasurementRecord) -> Self {
        Self {
            columns: schema::column_names()
                .iter()
                .map(|name| name.to_string())
                .collect(),
            rows: vec![record.values().to_vec()],
        }
    }

    /// Column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row values, each aligned with [`Self::columns`].
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Turn the first row into `(column, value)` pairs, one per column.
    pub fn transpose(&self) -> Vec<(String, f64)> {
        let Some(row) = self.rows.first() else {
            return Vec::new();
        };
        self.columns
            .iter()
            .cloned()
            .zip(row.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_uses_schema_columns() {
        let frame = FeatureFrame::single_row(&MeasurementRecord::default());
        let expected: Vec<String> = schema::column_names()
            .iter()
            .map(|name| name.to_string())
            .collect();
        assert_eq!(frame.columns(), expected.as_slice());
        assert_eq!(frame.rows().len(), 1);
        assert_eq!(frame.rows()[0], schema::default_values().to_vec());
    }

    #[test]
    fn transpose_yields_one_pair_per_column() {
        let frame = FeatureFrame::single_row(&MeasurementRecord::default());
        let pairs = frame.transpose();
        assert_eq!(pairs.len(), schema::FIELD_COUNT);
        assert_eq!(pairs[0], ("ph".to_string(), 7.0));
        assert_eq!(pairs[2], ("Solids".to_string(), 10000.0));
        assert_eq!(pairs[8], ("Turbidity".to_string(), 3.0));
    }

    #[test]
    fn transpose_of_empty_frame_is_empty() {
        let frame = FeatureFrame::new(vec!["a".into()], Vec::new());
        assert!(frame.transpose().is_empty());
    }
}
