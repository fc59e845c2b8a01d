//! Measurement records and the input validation that produces them.

use thiserror::Error;

use crate::schema::{self, FIELD_COUNT, FIELDS, FieldSpec};

/// Reason a single field was rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputIssue {
    /// The field was not supplied or was blank.
    #[error("value is missing")]
    Missing,
    /// The text could not be parsed as a number.
    #[error("'{0}' is not a number")]
    NotANumber(String),
    /// The text parsed to NaN or an infinity.
    #[error("value must be a finite number")]
    NotFinite,
    /// The value is below the declared minimum.
    #[error("must be at least {min}")]
    BelowMinimum { min: f64 },
    /// The value is above the declared maximum.
    #[error("must be at most {max}")]
    AboveMaximum { max: f64 },
    /// The name does not belong to the schema.
    #[error("is not a recognised measurement")]
    UnknownField,
    /// The same field was supplied twice.
    #[error("was supplied more than once")]
    Duplicate,
}

/// A field failed validation; submission must not proceed.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Invalid input for {field}: {reason}")]
pub struct InvalidInput {
    /// Column name of the offending field.
    pub field: String,
    /// Why the field was rejected.
    pub reason: InputIssue,
}

impl InvalidInput {
    fn new(field: impl Into<String>, reason: InputIssue) -> Self {
        Self {
            field: field.into(),
            reason,
        }
    }
}

/// Nine validated measurements in schema order.
///
/// Records can only be built through validation, so every instance satisfies
/// the schema bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeasurementRecord {
    values: [f64; FIELD_COUNT],
}

impl MeasurementRecord {
    /// Validate raw `(name, text)` pairs into a record.
    ///
    /// Pairs may arrive in any order. Schema fields are checked first, in
    /// schema order, and the first failure is returned. Only when every field
    /// is valid is an unknown or repeated name reported.
    pub fn collect<'a, 'b, I>(entries: I) -> Result<Self, InvalidInput>
    where
        I: IntoIterator<Item = (&'a str, &'b str)>,
    {
        let mut slots: [Option<&str>; FIELD_COUNT] = [None; FIELD_COUNT];
        let mut stray: Option<InvalidInput> = None;
        for (name, text) in entries {
            let issue = match schema::field(name) {
                None => InputIssue::UnknownField,
                Some((index, _)) if slots[index].is_none() => {
                    slots[index] = Some(text);
                    continue;
                }
                Some(_) => InputIssue::Duplicate,
            };
            if stray.is_none() {
                stray = Some(InvalidInput::new(name, issue));
            }
        }
        let mut values = [0.0; FIELD_COUNT];
        for (index, spec) in FIELDS.iter().enumerate() {
            let text = slots[index]
                .ok_or_else(|| InvalidInput::new(spec.name, InputIssue::Missing))?;
            values[index] =
                parse_field(spec, text).map_err(|reason| InvalidInput::new(spec.name, reason))?;
        }
        match stray {
            Some(err) => Err(err),
            None => Ok(Self { values }),
        }
    }

    /// Validate already-numeric values given in schema order.
    pub fn from_values(values: [f64; FIELD_COUNT]) -> Result<Self, InvalidInput> {
        for (spec, &value) in FIELDS.iter().zip(values.iter()) {
            check_value(spec, value).map_err(|reason| InvalidInput::new(spec.name, reason))?;
        }
        Ok(Self { values })
    }

    /// Values in schema order.
    pub fn values(&self) -> &[f64; FIELD_COUNT] {
        &self.values
    }

    /// Value of a named column.
    pub fn get(&self, name: &str) -> Option<f64> {
        schema::field(name).map(|(index, _)| self.values[index])
    }

    /// `(column, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FIELDS
            .iter()
            .zip(self.values.iter())
            .map(|(spec, &value)| (spec.name, value))
    }
}

impl Default for MeasurementRecord {
    fn default() -> Self {
        Self {
            values: schema::default_values(),
        }
    }
}

/// Parse and bound-check one field's text.
pub fn parse_field(spec: &FieldSpec, text: &str) -> Result<f64, InputIssue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(InputIssue::Missing);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| InputIssue::NotANumber(trimmed.to_string()))?;
    check_value(spec, value)?;
    Ok(value)
}

fn check_value(spec: &FieldSpec, value: f64) -> Result<(), InputIssue> {
    if !value.is_finite() {
        return Err(InputIssue::NotFinite);
    }
    if value < spec.min {
        return Err(InputIssue::BelowMinimum { min: spec.min });
    }
    if let Some(max) = spec.max
        && value > max
    {
        return Err(InputIssue::AboveMaximum { max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pairs() -> Vec<(String, String)> {
        FIELDS
            .iter()
            .map(|spec| (spec.name.to_string(), spec.default.to_string()))
            .collect()
    }

    fn collect_owned(pairs: &[(String, String)]) -> Result<MeasurementRecord, InvalidInput> {
        MeasurementRecord::collect(pairs.iter().map(|(n, v)| (n.as_str(), v.as_str())))
    }

    fn with_value(name: &str, value: &str) -> Vec<(String, String)> {
        let mut pairs = default_pairs();
        for pair in &mut pairs {
            if pair.0 == name {
                pair.1 = value.to_string();
            }
        }
        pairs
    }

    #[test]
    fn defaults_collect_into_default_record() {
        let record = collect_owned(&default_pairs()).unwrap();
        assert_eq!(record, MeasurementRecord::default());
    }

    #[test]
    fn input_order_does_not_change_column_order() {
        let mut pairs = default_pairs();
        pairs.reverse();
        let record = collect_owned(&pairs).unwrap();
        let names: Vec<_> = record.iter().map(|(name, _)| name).collect();
        assert_eq!(names, schema::column_names().to_vec());
        assert_eq!(record.get("ph"), Some(7.0));
        assert_eq!(record.get("Turbidity"), Some(3.0));
    }

    #[test]
    fn ph_boundaries() {
        assert!(collect_owned(&with_value("ph", "0.0")).is_ok());
        assert!(collect_owned(&with_value("ph", "14.0")).is_ok());
        let err = collect_owned(&with_value("ph", "14.1")).unwrap_err();
        assert_eq!(err.field, "ph");
        assert_eq!(err.reason, InputIssue::AboveMaximum { max: 14.0 });
    }

    #[test]
    fn unbounded_fields_accept_large_values() {
        let record = collect_owned(&with_value("Solids", "1e9")).unwrap();
        assert_eq!(record.get("Solids"), Some(1e9));
    }

    #[test]
    fn zero_is_accepted_for_non_negative_fields() {
        let record = collect_owned(&with_value("Solids", "0")).unwrap();
        assert_eq!(record.get("Solids"), Some(0.0));
    }

    #[test]
    fn negative_values_are_rejected() {
        let err = collect_owned(&with_value("Hardness", "-1")).unwrap_err();
        assert_eq!(err.field, "Hardness");
        assert_eq!(err.reason, InputIssue::BelowMinimum { min: 0.0 });
    }

    #[test]
    fn non_numeric_and_blank_values_are_rejected() {
        let err = collect_owned(&with_value("Sulfate", "abc")).unwrap_err();
        assert_eq!(err.reason, InputIssue::NotANumber("abc".into()));
        let err = collect_owned(&with_value("Sulfate", "   ")).unwrap_err();
        assert_eq!(err.reason, InputIssue::Missing);
        let err = collect_owned(&with_value("Sulfate", "NaN")).unwrap_err();
        assert_eq!(err.reason, InputIssue::NotFinite);
        let err = collect_owned(&with_value("Sulfate", "inf")).unwrap_err();
        assert_eq!(err.reason, InputIssue::NotFinite);
    }

    #[test]
    fn missing_field_is_rejected() {
        let pairs: Vec<_> = default_pairs()
            .into_iter()
            .filter(|(name, _)| name != "Conductivity")
            .collect();
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "Conductivity");
        assert_eq!(err.reason, InputIssue::Missing);
    }

    #[test]
    fn extra_and_duplicate_fields_are_rejected() {
        let mut pairs = default_pairs();
        pairs.push(("Potability".into(), "1".into()));
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "Potability");
        assert_eq!(err.reason, InputIssue::UnknownField);

        let mut pairs = default_pairs();
        pairs.push(("ph".into(), "6.0".into()));
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "ph");
        assert_eq!(err.reason, InputIssue::Duplicate);
    }

    #[test]
    fn field_failures_outrank_unknown_names() {
        let mut pairs = with_value("ph", "abc");
        pairs.push(("extra".into(), "1".into()));
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "ph");
        assert_eq!(err.reason, InputIssue::NotANumber("abc".into()));

        let mut pairs = with_value("Solids", "-3");
        pairs.push(("Solids".into(), "10".into()));
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "Solids");
        assert_eq!(err.reason, InputIssue::BelowMinimum { min: 0.0 });
    }

    #[test]
    fn first_failure_follows_schema_order() {
        let mut pairs = with_value("Turbidity", "x");
        for pair in &mut pairs {
            if pair.0 == "Hardness" {
                pair.1 = "-5".into();
            }
        }
        let err = collect_owned(&pairs).unwrap_err();
        assert_eq!(err.field, "Hardness");
    }

    #[test]
    fn from_values_enforces_bounds() {
        let mut values = schema::default_values();
        assert!(MeasurementRecord::from_values(values).is_ok());
        values[0] = 15.0;
        let err = MeasurementRecord::from_values(values).unwrap_err();
        assert_eq!(err.field, "ph");
    }

    #[test]
    fn error_message_names_field_and_reason() {
        let err = InvalidInput::new("ph", InputIssue::AboveMaximum { max: 14.0 });
        assert_eq!(err.to_string(), "Invalid input for ph: must be at most 14");
    }
}
