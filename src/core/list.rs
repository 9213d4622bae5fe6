use crate::db::pool::DbPool;
use crate::db::queries::{list_employee_ids, load_records_by_employee};
use crate::errors::AppResult;
use crate::models::record::EmployeeYearRecord;

pub struct ListLogic;

impl ListLogic {
    pub fn employee_ids(pool: &DbPool) -> AppResult<Vec<i64>> {
        list_employee_ids(&pool.conn)
    }

    /// An employee without rows yields an empty list, not an error.
    pub fn records(pool: &DbPool, employee_id: i64) -> AppResult<Vec<EmployeeYearRecord>> {
        load_records_by_employee(&pool.conn, employee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::initialize::init_db;
    use crate::db::queries::insert_record;
    use rusqlite::Connection;

    #[test]
    fn unknown_employee_lists_empty() {
        let conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        insert_record(&conn, &EmployeeYearRecord::new(1, 2020, "A", 0, 0)).unwrap();
        let pool = DbPool::from_connection(conn);

        assert!(ListLogic::records(&pool, 999).unwrap().is_empty());
        assert_eq!(ListLogic::employee_ids(&pool).unwrap(), vec![1]);
    }

    #[test]
    fn missing_table_is_a_query_error() {
        let pool = DbPool::from_connection(Connection::open_in_memory().unwrap());
        assert!(matches!(
            ListLogic::employee_ids(&pool),
            Err(crate::errors::AppError::Db(_))
        ));
    }
}
