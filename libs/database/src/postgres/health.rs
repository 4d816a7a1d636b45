use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, Statement};

/// Check database connectivity with a trivial query.
///
/// Suitable for readiness probes.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DbErr> {
    db.execute_raw(Statement::from_string(
        db.get_database_backend(),
        "SELECT 1".to_string(),
    ))
    .await?;
    Ok(())
}
