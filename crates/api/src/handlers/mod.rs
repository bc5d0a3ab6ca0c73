pub mod artists;
pub mod drinks;
pub mod shows;
pub mod trivia;
pub mod venues;

use fsnd_db::StorageErrorKind;

use crate::error::AppError;

/// Log a failed listing mutation and turn it into the user-facing message.
///
/// The storage error kind is logged but not surfaced; every persistence
/// failure reads the same to the user.
pub(crate) fn mutation_failed(err: sqlx::Error, message: String) -> AppError {
    let kind = StorageErrorKind::classify(&err);
    tracing::error!(error = %err, ?kind, "Listing mutation failed");
    AppError::MutationFailed(message)
}
