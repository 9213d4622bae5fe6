use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, record_exists};
use crate::errors::{AppError, AppResult};
use crate::models::record::EmployeeYearRecord;

/// Seeding of year-records. The HTTP API has no create endpoint; records
/// enter the store through the admin CLI.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(pool: &mut DbPool, record: &EmployeeYearRecord) -> AppResult<()> {
        if record.employee_name.trim().is_empty() {
            return Err(AppError::BadRequest("Employee name must not be empty.".into()));
        }

        let tx = pool.write_tx()?;

        if record_exists(&tx, record.employee_id, record.year)? {
            return Err(AppError::BadRequest(format!(
                "Record for EmployeeId {} and Year {} already exists.",
                record.employee_id, record.year
            )));
        }

        insert_record(&tx, record)?;
        tx.commit()?;

        tracing::info!(
            employee_id = record.employee_id,
            year = record.year,
            "year-record added"
        );
        Ok(())
    }
}
