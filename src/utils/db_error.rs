//! Classification of database errors the allocator must distinguish.

/// Returns whether `e` is a unique-constraint violation on `links.code`.
///
/// The allocator treats exactly this error as a code collision to retry;
/// every other database error is surfaced as an internal failure.
pub fn is_unique_violation_on_code(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some("links_code_key"))
}
