use crate::db::pool::DbPool;
use crate::db::queries::{load_record, record_exists, update_record};
use crate::errors::{AppError, AppResult};
use crate::models::record::{EmployeeYearRecord, RecordUpdate};

pub struct UpdateLogic;

impl UpdateLogic {
    /// Partially update the `(employee_id, year)` record and return it as
    /// stored afterwards.
    ///
    /// An empty update is rejected before the store is touched. Never
    /// inserts: a missing key is `NotFound`.
    pub fn apply(
        pool: &mut DbPool,
        employee_id: i64,
        year: i32,
        update: &RecordUpdate,
    ) -> AppResult<EmployeeYearRecord> {
        Self::validate(update)?;

        let tx = pool.write_tx()?;

        if !record_exists(&tx, employee_id, year)? {
            return Err(AppError::NotFound(format!(
                "Record for EmployeeId {employee_id} and Year {year} not found."
            )));
        }

        if update_record(&tx, employee_id, year, update)? == 0 {
            return Err(AppError::NotFound(format!(
                "Record for EmployeeId {employee_id} and Year {year} found but not updated (it might have been removed by another process)."
            )));
        }

        let record = load_record(&tx, employee_id, year)?
            .ok_or_else(|| AppError::Internal("Failed to retrieve the updated record.".into()))?;

        tx.commit()?;
        tracing::info!(employee_id, year, "year-record updated");

        Ok(record)
    }

    pub fn validate(update: &RecordUpdate) -> AppResult<()> {
        if update.is_empty() {
            return Err(AppError::BadRequest(
                "No update fields provided in the payload.".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::{insert_record, load_records_by_employee};
    use crate::models::record::FieldUpdate;
    use rusqlite::Connection;

    fn pool() -> DbPool {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        insert_record(&conn, &EmployeeYearRecord::new(7, 2022, "Ada", 5, 1)).unwrap();
        insert_record(&conn, &EmployeeYearRecord::new(7, 2023, "Ada", 8, 3)).unwrap();
        DbPool::from_connection(conn)
    }

    fn leave(n: u32) -> RecordUpdate {
        RecordUpdate {
            leave_taken: FieldUpdate::SetTo(n),
            ..Default::default()
        }
    }

    #[test]
    fn leave_only_update_keeps_other_fields() {
        let mut pool = pool();
        let rec = UpdateLogic::apply(&mut pool, 7, 2023, &leave(10)).unwrap();
        assert_eq!(rec, EmployeeYearRecord::new(7, 2023, "Ada", 10, 3));

        let all = load_records_by_employee(&pool.conn, 7).unwrap();
        assert_eq!(all[0].year, 2023);
        assert_eq!(all[0].leave_taken, 10);
        assert_eq!(all[1].leave_taken, 5);
    }

    #[test]
    fn empty_update_is_bad_request() {
        let mut pool = pool();
        let err = UpdateLogic::apply(&mut pool, 7, 2023, &RecordUpdate::default()).unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[test]
    fn missing_key_is_not_found_and_nothing_is_created() {
        let mut pool = pool();
        let err = UpdateLogic::apply(&mut pool, 7, 1990, &leave(1)).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(load_records_by_employee(&pool.conn, 7).unwrap().len(), 2);
    }

    #[test]
    fn identical_values_still_succeed() {
        let mut pool = pool();
        let rec = UpdateLogic::apply(&mut pool, 7, 2022, &leave(5)).unwrap();
        assert_eq!(rec.leave_taken, 5);
    }

    #[test]
    fn empty_name_is_written_as_given() {
        let mut pool = pool();
        let upd = RecordUpdate {
            employee_name: FieldUpdate::SetTo(String::new()),
            ..Default::default()
        };
        let rec = UpdateLogic::apply(&mut pool, 7, 2023, &upd).unwrap();
        assert_eq!(rec, EmployeeYearRecord::new(7, 2023, "", 8, 3));
    }
}
