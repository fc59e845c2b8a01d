//! Fixed measurement schema shared by the form, validation, and model call.
//!
//! The table below is the single source of truth for column identity, column
//! order, labels, defaults, and bounds. The trained model expects exactly these
//! columns in exactly this order.

/// Number of measurements in a record.
pub const FIELD_COUNT: usize = 9;

/// Static description of one measurement column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    /// Column name as presented to the model.
    pub name: &'static str,
    /// Human-facing label for the form control.
    pub label: &'static str,
    /// Hover help for the form control.
    pub help: &'static str,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound, if the field has one.
    pub max: Option<f64>,
    /// Value pre-filled in the form.
    pub default: f64,
}

impl FieldSpec {
    /// Whether `value` lies within the declared bounds.
    pub fn accepts(&self, value: f64) -> bool {
        value >= self.min && self.max.is_none_or(|max| value <= max)
    }
}

/// Ordered measurement schema.
pub static FIELDS: [FieldSpec; FIELD_COUNT] = [
    FieldSpec {
        name: "ph",
        label: "pH",
        help: "Acidity/basicity level of water",
        min: 0.0,
        max: Some(14.0),
        default: 7.0,
    },
    FieldSpec {
        name: "Hardness",
        label: "Hardness",
        help: "Water hardness",
        min: 0.0,
        max: None,
        default: 150.0,
    },
    FieldSpec {
        name: "Solids",
        label: "Solids",
        help: "Total dissolved solids",
        min: 0.0,
        max: None,
        default: 10000.0,
    },
    FieldSpec {
        name: "Chloramines",
        label: "Chloramines",
        help: "Chloramines level",
        min: 0.0,
        max: None,
        default: 7.0,
    },
    FieldSpec {
        name: "Sulfate",
        label: "Sulfate",
        help: "Sulfate level",
        min: 0.0,
        max: None,
        default: 333.0,
    },
    FieldSpec {
        name: "Conductivity",
        label: "Conductivity",
        help: "Electrical conductivity",
        min: 0.0,
        max: None,
        default: 400.0,
    },
    FieldSpec {
        name: "Organic_carbon",
        label: "Organic carbon",
        help: "Organic carbon",
        min: 0.0,
        max: None,
        default: 10.0,
    },
    FieldSpec {
        name: "Trihalomethanes",
        label: "Trihalomethanes",
        help: "Trihalomethanes level",
        min: 0.0,
        max: None,
        default: 60.0,
    },
    FieldSpec {
        name: "Turbidity",
        label: "Turbidity",
        help: "Water turbidity",
        min: 0.0,
        max: None,
        default: 3.0,
    },
];

/// Column names in model order.
pub fn column_names() -> [&'static str; FIELD_COUNT] {
    FIELDS.map(|field| field.name)
}

/// Default values in model order.
pub fn default_values() -> [f64; FIELD_COUNT] {
    FIELDS.map(|field| field.default)
}

/// Look up a field and its position by column name.
pub fn field(name: &str) -> Option<(usize, &'static FieldSpec)> {
    FIELDS
        .iter()
        .enumerate()
        .find(|(_, field)| field.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_order_is_fixed() {
        assert_eq!(
            column_names(),
            [
                "ph",
                "Hardness",
                "Solids",
                "Chloramines",
                "Sulfate",
                "Conductivity",
                "Organic_carbon",
                "Trihalomethanes",
                "Turbidity",
            ]
        );
    }

    #[test]
    fn only_ph_has_an_upper_bound() {
        let bounded: Vec<_> = FIELDS
            .iter()
            .filter(|field| field.max.is_some())
            .map(|field| field.name)
            .collect();
        assert_eq!(bounded, vec!["ph"]);
        assert!(FIELDS.iter().all(|field| field.min == 0.0));
    }

    #[test]
    fn defaults_fall_within_bounds() {
        for spec in &FIELDS {
            assert!(spec.accepts(spec.default), "{} default out of range", spec.name);
        }
    }

    #[test]
    fn ph_bounds_are_inclusive() {
        let (index, ph) = field("ph").unwrap();
        assert_eq!(index, 0);
        assert!(ph.accepts(0.0));
        assert!(ph.accepts(14.0));
        assert!(!ph.accepts(14.1));
        assert!(!ph.accepts(-0.1));
    }

    #[test]
    fn unknown_field_lookup_is_none() {
        assert!(field("pH").is_none());
        assert!(field("Organic carbon").is_none());
    }
}
