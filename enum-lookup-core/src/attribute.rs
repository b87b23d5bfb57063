//! # Attribute Module
//!
//! Turns the raw values written on one annotation occurrence into a
//! [`LookupRequest`], rejecting occurrences that omit mandatory attributes.

use crate::error::LookupError;

pub const ATTR_FIELD: &str = "field";
pub const ATTR_ORDINAL: &str = "constructor_argument_ordinal";
pub const ATTR_DEFAULT: &str = "default_value";

/// The attributes of one annotation occurrence, exactly as written.
///
/// `None` means the attribute was not written explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationValues {
    pub field: Option<String>,
    pub constructor_argument_ordinal: Option<usize>,
    pub default_value: Option<String>,
}

impl AnnotationValues {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    pub fn ordinal(mut self, ordinal: usize) -> Self {
        self.constructor_argument_ordinal = Some(ordinal);
        self
    }

    pub fn default_value(mut self, constant: impl Into<String>) -> Self {
        self.default_value = Some(constant.into());
        self
    }
}

/// Validated parameters of one generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRequest {
    pub field_name: String,
    pub argument_ordinal: usize,
    /// Empty strings are normalised to `None`.
    pub default_constant: Option<String>,
}

/// Checks that mandatory attributes were supplied and builds the request.
///
/// `field` is always mandatory. `constructor_argument_ordinal` is mandatory
/// when `require_ordinal` is set, and otherwise defaults to 0.
pub fn validate(
    values: &AnnotationValues,
    require_ordinal: bool,
) -> Result<LookupRequest, LookupError> {
    let field_name = values
        .field
        .clone()
        .ok_or(LookupError::MissingAttribute {
            attribute: ATTR_FIELD,
        })?;

    let argument_ordinal = match values.constructor_argument_ordinal {
        Some(ordinal) => ordinal,
        None if require_ordinal => {
            return Err(LookupError::MissingAttribute {
                attribute: ATTR_ORDINAL,
            });
        }
        None => 0,
    };

    let default_constant = values
        .default_value
        .clone()
        .filter(|name| !name.is_empty());

    Ok(LookupRequest {
        field_name,
        argument_ordinal,
        default_constant,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_is_always_mandatory() {
        let values = AnnotationValues::default().ordinal(0);
        for strict in [true, false] {
            assert_eq!(
                validate(&values, strict),
                Err(LookupError::MissingAttribute {
                    attribute: ATTR_FIELD
                })
            );
        }
    }

    #[test]
    fn ordinal_is_mandatory_only_when_strict() {
        let values = AnnotationValues::new("value");
        assert_eq!(
            validate(&values, true),
            Err(LookupError::MissingAttribute {
                attribute: ATTR_ORDINAL
            })
        );
        assert_eq!(validate(&values, false).unwrap().argument_ordinal, 0);
    }

    #[test]
    fn empty_default_means_none() {
        let values = AnnotationValues::new("value").ordinal(1).default_value("");
        let request = validate(&values, true).unwrap();
        assert_eq!(request.argument_ordinal, 1);
        assert_eq!(request.default_constant, None);
    }
}
