//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a lecture holding a single free-text unit at position 0.
///
/// # Returns
/// - `Ok((lecture, unit))` - The created lecture and its unit
/// - `Err(DbErr)` - Database error during creation
pub async fn create_lecture_with_unit(
    db: &DatabaseConnection,
) -> Result<(entity::lecture::Model, entity::unit::Model), DbErr> {
    let lecture = crate::factory::lecture::create_lecture(db).await?;
    let unit = crate::factory::unit::create_unit(db, lecture.course_id).await?;
    crate::factory::unit::attach_unit(db, lecture.id, unit.id, 0).await?;

    Ok((lecture, unit))
}
