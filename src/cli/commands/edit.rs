use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::update::UpdateLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::record::RecordUpdate;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        employee_id,
        year,
        name,
        leave,
        courses,
    } = cmd
    {
        let update = RecordUpdate {
            employee_name: name.clone().into(),
            leave_taken: (*leave).into(),
            courses_completed: (*courses).into(),
        };
        // Fail on an empty edit before opening the database.
        UpdateLogic::validate(&update)?;

        let mut pool = DbPool::open(&cfg.database)?;
        let rec = UpdateLogic::apply(&mut pool, *employee_id, *year, &update)?;

        success(format!(
            "Updated {} for EmployeeId {} ({}): leave {}, courses {}",
            rec.year, rec.employee_id, rec.employee_name, rec.leave_taken, rec.courses_completed
        ));
    }
    Ok(())
}
