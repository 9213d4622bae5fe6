use crate::db::pool::DbPool;
use crate::db::queries::{delete_employee_records, employee_has_records};
use crate::errors::{AppError, AppResult};
use serde::Serialize;

/// Result of a delete-by-employee, also the HTTP response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub message: String,
    pub count: usize,
}

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove every year-record of `employee_id`.
    ///
    /// Check and delete run in one immediate transaction; the affected-row
    /// count is still the success signal. On any error the transaction is
    /// dropped uncommitted and rolls back.
    pub fn apply(pool: &mut DbPool, employee_id: i64) -> AppResult<DeleteOutcome> {
        let tx = pool.write_tx()?;

        if !employee_has_records(&tx, employee_id)? {
            return Err(AppError::NotFound(format!(
                "No records found for EmployeeId {employee_id} to delete."
            )));
        }

        let count = delete_employee_records(&tx, employee_id)?;
        if count == 0 {
            return Err(AppError::NotFound(format!(
                "No records were deleted for EmployeeId {employee_id} (they might have been deleted by another process)."
            )));
        }

        tx.commit()?;
        tracing::info!(employee_id, count, "employee records deleted");

        Ok(DeleteOutcome {
            message: format!("Successfully deleted {count} record(s) for EmployeeId {employee_id}"),
            count,
        })
    }
}
