//! Top-level error wrapper types.

use crate::{ConfigError, DatabaseError};

/// Foundation error enum for the binary's startup path.
///
/// # Examples
///
/// ```
/// use metalfactor_error::{ConfigError, MetalFactorError};
///
/// let err: MetalFactorError = ConfigError::new("bad prefix").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum MetalFactorErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Database error
    #[from(DatabaseError)]
    Database(DatabaseError),
}

/// Metal Factor error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Metal Factor Error: {}", _0)]
pub struct MetalFactorError(Box<MetalFactorErrorKind>);

impl MetalFactorError {
    /// Create a new error from a kind.
    pub fn new(kind: MetalFactorErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MetalFactorErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to MetalFactorErrorKind
impl<T> From<T> for MetalFactorError
where
    T: Into<MetalFactorErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Metal Factor startup operations.
pub type MetalFactorResult<T> = std::result::Result<T, MetalFactorError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseErrorKind;

    #[test]
    fn config_error_converts_into_kind() {
        let err: MetalFactorError = ConfigError::new("missing token").into();
        assert!(matches!(err.kind(), MetalFactorErrorKind::Config(_)));
    }

    #[test]
    fn database_error_keeps_location() {
        let err = DatabaseError::new(DatabaseErrorKind::Query("locked".into()));
        assert!(err.file.ends_with("error.rs"));
        let wrapped: MetalFactorError = err.into();
        assert!(format!("{}", wrapped).contains("locked"));
    }
}
