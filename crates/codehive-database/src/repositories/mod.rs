//! Repository implementations, one module per aggregate.

pub mod branch;
pub mod file_node;
pub mod project;
pub mod team;
pub mod user;

use codehive_core::error::{AppError, ErrorKind};

/// Translate a sqlx error into the application taxonomy, mapping
/// unique-constraint violations to [`ErrorKind::Conflict`] with the given
/// message and everything else to [`ErrorKind::Database`].
pub(crate) fn map_unique(err: sqlx::Error, conflict_message: &str, context: &str) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            AppError::conflict(conflict_message)
        }
        _ => AppError::with_source(ErrorKind::Database, context.to_string(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_map_to_database_kind() {
        let err = map_unique(sqlx::Error::RowNotFound, "duplicate", "fetching row");
        assert_eq!(err.kind, ErrorKind::Database);
        assert_eq!(err.message, "fetching row");
    }

    #[test]
    fn pool_errors_keep_their_source() {
        let err = map_unique(sqlx::Error::PoolClosed, "duplicate", "inserting user");
        assert_eq!(err.kind, ErrorKind::Database);
        assert!(std::error::Error::source(&err).is_some());
    }
}
