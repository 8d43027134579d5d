use crate::errors::Id3Error;

/// Create a string of all available items.
pub fn items_to_strings(items: &[&str]) -> String {
    items.join(", ")
}

// Validation
pub fn validate_non_empty_parameter(value: &str, parameter: &str) -> Result<(), Id3Error> {
    if value.trim().is_empty() {
        Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "a non-empty string".to_string(),
            format!("{:?}", value),
        ))
    } else {
        Ok(())
    }
}

pub fn validate_identifier_parameter(value: &str, parameter: &str) -> Result<(), Id3Error> {
    let mut chars = value.chars();
    let valid = match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => chars.all(|c| c.is_alphanumeric() || c == '_'),
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "an identifier made of letters, digits and underscores".to_string(),
            format!("{:?}", value),
        ))
    }
}

pub fn validate_positive_parameter(value: usize, parameter: &str) -> Result<(), Id3Error> {
    if value == 0 {
        Err(Id3Error::InvalidParameter(
            parameter.to_string(),
            "a value greater than 0".to_string(),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
