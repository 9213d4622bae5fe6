use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{GREY, RESET, field, success};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { check, info } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        //
        // 1) INFO
        //
        if *info {
            let s = stats::collect(&pool.conn)?;
            let file_size = fs::metadata(&cfg.database).map(|m| m.len()).unwrap_or(0);
            let year = |y: Option<i32>| y.map_or(format!("{GREY}--{RESET}"), |y| y.to_string());

            println!();
            field("File", &cfg.database);
            field("Size", format!("{:.2} KB", file_size as f64 / 1024.0));
            field("Year-records", s.records);
            field("Employees", s.employees);
            field("Years", format!("{} .. {}", year(s.first_year), year(s.last_year)));
            field("Leave taken (total)", s.total_leave);
            field("Courses completed (total)", s.total_courses);
            println!();
        }

        //
        // 2) CHECK
        //
        if *check {
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            check_integrity(&integrity)?;
            success("Integrity check passed.");
        }
    }

    Ok(())
}

/// `PRAGMA integrity_check` answers a single `ok` row on a healthy file.
fn check_integrity(report: &str) -> AppResult<()> {
    if report == "ok" {
        Ok(())
    } else {
        Err(AppError::Internal(format!("Integrity check failed: {report}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_report_passes() {
        assert!(check_integrity("ok").is_ok());
    }

    #[test]
    fn damaged_report_is_an_error() {
        let err = check_integrity("row 3 missing from index idx_employee_details_id").unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
        assert!(err.to_string().contains("row 3 missing"));
    }
}
