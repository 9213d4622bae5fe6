use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::EmployeeYearRecord;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { employee_id } = cmd {
        let pool = DbPool::open(&cfg.database)?;

        match employee_id {
            None => {
                let ids = ListLogic::employee_ids(&pool)?;
                if ids.is_empty() {
                    info("No employees in the database.");
                    return Ok(());
                }
                println!("EMPLOYEE IDS:");
                for id in ids {
                    println!("{id}");
                }
            }
            Some(id) => {
                let records = ListLogic::records(&pool, *id)?;
                if records.is_empty() {
                    info(format!("No records for EmployeeId {id}."));
                    return Ok(());
                }
                print!("{}", records_table(&records).render());
            }
        }
    }
    Ok(())
}

fn records_table(records: &[EmployeeYearRecord]) -> Table {
    let name_width = records
        .iter()
        .map(|r| r.employee_name.chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    let mut table = Table::new(vec![
        Column::new("YEAR", 6),
        Column::new("ID", 8),
        Column::new("NAME", name_width),
        Column::new("LEAVE", 6),
        Column::new("COURSES", 7),
    ]);

    for r in records {
        table.add_row(vec![
            r.year.to_string(),
            r.employee_id.to_string(),
            r.employee_name.clone(),
            r.leave_taken.to_string(),
            r.courses_completed.to_string(),
        ]);
    }
    table
}
