//! Pool store error types.

use crate::PoolSide;
use metalfactor_error::DatabaseError;

/// Result type for pool store operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Pool store error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PoolErrorKind {
    /// The backing store failed to run a statement.
    #[display("Storage failure: {}", _0)]
    Storage(String),

    /// The write would leave a pool negative and the policy forbids it.
    #[display("The {} pool would drop to {}", side, value)]
    NegativePool {
        /// Pool that would go negative
        side: PoolSide,
        /// Value it would hold
        value: i64,
    },

    /// The transfer does not fit in the pool's integer range.
    #[display("Pool arithmetic overflow")]
    Overflow,
}

/// Pool store error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pool Error: {} at line {} in {}", kind, line, file)]
pub struct PoolError {
    /// The kind of error that occurred
    pub kind: PoolErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PoolError {
    /// Create a new PoolError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PoolErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<DatabaseError> for PoolError {
    #[track_caller]
    fn from(err: DatabaseError) -> Self {
        PoolError::new(PoolErrorKind::Storage(err.kind.to_string()))
    }
}

// Transactions surface begin/commit failures as raw diesel errors.
#[cfg(feature = "database")]
impl From<diesel::result::Error> for PoolError {
    #[track_caller]
    fn from(err: diesel::result::Error) -> Self {
        PoolError::from(DatabaseError::from(err))
    }
}
