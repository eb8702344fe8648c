//! Parameters for module retrieval.

use crate::error::{ModuleError, ModuleResult};
use crate::vector::MAX_PRECISION;

/// Decimal precision applied to assembly vectors during retrieval.
pub const RETRIEVAL_PRECISION: u32 = 6;

/// Parameters for [`get_modules`](crate::get_modules).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievalParams {
    /// Decimals kept in each assembly-vector component.
    /// Applies to both single and batch retrieval. Default: 6
    pub precision: u32,
}

impl Default for RetrievalParams {
    fn default() -> Self {
        Self {
            precision: RETRIEVAL_PRECISION,
        }
    }
}

impl RetrievalParams {
    /// Set the rounding precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Check that the parameters are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleError::InvalidPrecision`] if `precision` exceeds
    /// [`MAX_PRECISION`].
    pub fn validate(&self) -> ModuleResult<()> {
        if self.precision > MAX_PRECISION {
            return Err(ModuleError::InvalidPrecision {
                precision: self.precision,
                max: MAX_PRECISION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = RetrievalParams::default();
        assert_eq!(params.precision, 6);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_with_precision() {
        let params = RetrievalParams::default().with_precision(2);
        assert_eq!(params.precision, 2);
    }

    #[test]
    fn test_validate_rejects_excess_precision() {
        let params = RetrievalParams::default().with_precision(16);
        assert_eq!(
            params.validate(),
            Err(ModuleError::InvalidPrecision {
                precision: 16,
                max: 15
            })
        );
        assert!(RetrievalParams::default().with_precision(15).validate().is_ok());
    }
}
