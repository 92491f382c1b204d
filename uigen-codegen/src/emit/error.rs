//! Errors raised while emitting values.

use miette::Diagnostic;
use thiserror::Error;
use uigen_core::{AccessError, Reflect, Value};

/// Result type for value emission.
pub type Result<T> = std::result::Result<T, EmitError>;

/// An emission failure.
///
/// Every variant names the type of the offending value. None of them is
/// recovered from inside the generator: they abort the current run.
#[derive(Debug, Error, Diagnostic)]
pub enum EmitError {
    #[error("an emitter is already registered for type '{type_name}'")]
    #[diagnostic(
        code(uigen::duplicate_registration),
        help("each type key can be registered once per generator")
    )]
    DuplicateRegistration { type_name: String },

    #[error("cannot emit value of type '{type_name}': {reason}")]
    #[diagnostic(code(uigen::unsupported_value))]
    UnsupportedValue { type_name: String, reason: String },

    #[error("failed to read property '{property}' of type '{type_name}'")]
    #[diagnostic(code(uigen::property_access))]
    PropertyAccess {
        type_name: String,
        property: String,
        #[source]
        source: AccessError,
    },
}

impl EmitError {
    /// Create an unsupported value error for the given value.
    pub fn unsupported(value: &Value, reason: impl Into<String>) -> Self {
        Self::UnsupportedValue {
            type_name: value.type_name(),
            reason: reason.into(),
        }
    }

    /// Create a property access error for a failed read on `obj`.
    pub fn property_access(obj: &dyn Reflect, property: &str, source: AccessError) -> Self {
        Self::PropertyAccess {
            type_name: obj.type_info().key().full_name().to_string(),
            property: property.to_string(),
            source,
        }
    }

    /// The fully qualified name of the type the error is about.
    pub fn type_name(&self) -> &str {
        match self {
            Self::DuplicateRegistration { type_name }
            | Self::UnsupportedValue { type_name, .. }
            | Self::PropertyAccess { type_name, .. } => type_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_type() {
        let err = EmitError::unsupported(&Value::Int32(1), "wrong shape");
        assert_eq!(
            err.to_string(),
            "cannot emit value of type 'System.Int32': wrong shape"
        );
        assert_eq!(err.type_name(), "System.Int32");

        let dup = EmitError::DuplicateRegistration {
            type_name: "App.Widget".into(),
        };
        assert!(dup.to_string().contains("App.Widget"));
    }

    #[test]
    fn test_diagnostic_codes() {
        let dup = EmitError::DuplicateRegistration {
            type_name: "App.Widget".into(),
        };
        let code = dup.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("uigen::duplicate_registration"));
    }
}
