use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::{init_db, records_table_exists};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database and the `employee_details` table
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let pool = DbPool::create(&cfg.database)?;
    if records_table_exists(&pool.conn)? {
        info("Record table already present, nothing to create.");
    }
    init_db(&pool.conn)?;

    tracing::debug!(database = %cfg.database, "store initialized");
    success(format!("Database initialized at {}", cfg.database));
    Ok(())
}
