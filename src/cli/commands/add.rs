use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::EmployeeYearRecord;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        employee_id,
        year,
        name,
        leave,
        courses,
    } = cmd
    {
        let record = EmployeeYearRecord::new(*employee_id, *year, name.trim(), *leave, *courses);

        let mut pool = DbPool::open(&cfg.database)?;
        AddLogic::apply(&mut pool, &record)?;

        success(format!(
            "Added {} for EmployeeId {} ({}): leave {}, courses {}",
            record.year,
            record.employee_id,
            record.employee_name,
            record.leave_taken,
            record.courses_completed
        ));
    }
    Ok(())
}
