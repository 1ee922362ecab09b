use thiserror::Error;

/// Errors reported by table construction and insertion.
///
/// None of these leave the table in an inconsistent state; a failed insert
/// releases whatever it had allocated for the new entry before returning.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("Table full: all {capacity} slots are occupied")]
    TableFull { capacity: usize },

    #[error("Allocation failed while storing a word or its lines")]
    AllocationFailure,
}

impl From<std::collections::TryReserveError> for TableError {
    fn from(_: std::collections::TryReserveError) -> Self {
        TableError::AllocationFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TableError::TableFull { capacity: 7 };
        assert_eq!(err.to_string(), "Table full: all 7 slots are occupied");

        let err = TableError::InvalidArgument("capacity must be positive");
        assert!(err.to_string().contains("capacity must be positive"));
    }

    #[test]
    fn test_from_try_reserve() {
        let mut v: Vec<u64> = Vec::new();
        let err = v.try_reserve(usize::MAX).unwrap_err();
        assert_eq!(TableError::from(err), TableError::AllocationFailure);
    }
}
