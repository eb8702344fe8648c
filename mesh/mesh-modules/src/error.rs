//! Error types for module retrieval.

use thiserror::Error;

/// Result type for module operations.
pub type ModuleResult<T> = Result<T, ModuleError>;

/// Errors that can occur while reading modules out of a model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModuleError {
    /// A module index was requested from a model without modules.
    #[error("Model has no modules to index")]
    EmptyModel,

    /// An assembly vector could not be normalized.
    #[error("Malformed assembly vector at index {index}{}: {reason}", module_suffix(.module))]
    MalformedVector {
        /// Position of the module in its model, when known.
        module: Option<usize>,
        /// Position of the entry in its module's vector list.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Text could not be parsed as an assembly vector.
    #[error("Cannot parse '{input}' as an assembly vector")]
    ParseVector {
        /// The rejected input.
        input: String,
    },

    /// Text could not be parsed as a step tag.
    #[error("Cannot parse '{input}' as a step tag")]
    ParseStep {
        /// The rejected input.
        input: String,
    },

    /// Rounding precision is out of range.
    #[error("Precision {precision} exceeds the supported maximum of {max} decimals")]
    InvalidPrecision {
        /// The requested precision.
        precision: u32,
        /// The largest supported precision.
        max: u32,
    },
}

impl ModuleError {
    /// Attach the position of the module an error came from.
    #[must_use]
    pub(crate) fn in_module(self, module: usize) -> Self {
        match self {
            Self::MalformedVector { index, reason, .. } => Self::MalformedVector {
                module: Some(module),
                index,
                reason,
            },
            other => other,
        }
    }
}

fn module_suffix(module: &Option<usize>) -> String {
    module.map(|m| format!(" of module {m}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ModuleError::EmptyModel.to_string(),
            "Model has no modules to index"
        );

        let err = ModuleError::MalformedVector {
            module: None,
            index: 2,
            reason: "component y is NaN".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed assembly vector at index 2: component y is NaN"
        );

        let err = ModuleError::MalformedVector {
            module: Some(4),
            index: 0,
            reason: "component x is inf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed assembly vector at index 0 of module 4: component x is inf"
        );

        let err = ModuleError::ParseStep {
            input: "Q".to_string(),
        };
        assert!(err.to_string().contains("'Q'"));
    }
}
