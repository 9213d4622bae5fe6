use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {} (defaults in use). Run `init` to create it.",
                    path.display()
                ));
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let missing = Config::missing_fields(&content)?;
            if missing.is_empty() {
                success(format!("{} is complete.", path.display()));
            } else {
                for field in missing {
                    info(format!("Missing field '{field}' (default value is used)"));
                }
            }
        }
    }

    Ok(())
}
