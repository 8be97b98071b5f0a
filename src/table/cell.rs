use std::fmt::Display;

/// A value as handed over by the tabular parser, before normalization.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RawCell {
    /// Missing or null field
    #[default]
    Null,
    /// Boolean values (true/false)
    Boolean(bool),
    /// Numeric values
    Number(f64),
    /// Plain text values
    Text(String),
    /// Surplus fields of a record that had more cells than headers
    List(Vec<RawCell>),
}

impl RawCell {
    /// Returns false for null, `false`, zero, NaN and the empty string.
    /// Whitespace-only text and lists (even empty ones) are truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            RawCell::Null => false,
            RawCell::Boolean(value) => *value,
            RawCell::Number(value) => *value != 0.0 && !value.is_nan(),
            RawCell::Text(value) => !value.is_empty(),
            RawCell::List(_) => true,
        }
    }
}

impl From<&str> for RawCell {
    fn from(value: &str) -> Self {
        RawCell::Text(value.to_owned())
    }
}

impl From<String> for RawCell {
    fn from(value: String) -> Self {
        RawCell::Text(value)
    }
}

impl From<Option<&str>> for RawCell {
    fn from(value: Option<&str>) -> Self {
        value.map(RawCell::from).unwrap_or_default()
    }
}

impl From<bool> for RawCell {
    fn from(value: bool) -> Self {
        RawCell::Boolean(value)
    }
}

impl From<f64> for RawCell {
    fn from(value: f64) -> Self {
        RawCell::Number(value)
    }
}

impl From<i64> for RawCell {
    fn from(value: i64) -> Self {
        RawCell::Number(value as f64)
    }
}

impl Display for RawCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RawCell::Null => Ok(()),
            RawCell::Boolean(value) => write!(f, "{}", value),
            RawCell::Number(value) => write!(f, "{}", to_number_string(*value)),
            RawCell::Text(value) => write!(f, "{}", value),
            RawCell::List(values) => {
                for (index, value) in values.iter().enumerate() {
                    if index > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

/// Formats a number the way spreadsheet exports and browsers print it:
/// integral values without a fraction, no negative zero.
fn to_number_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_owned()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{sign}Infinity")
    } else if value == 0.0 {
        "0".to_owned()
    } else {
        value.to_string()
    }
}
