use clap::{Parser, Subcommand};

/// Command-line interface definition for rStaffRecords
#[derive(Parser)]
#[command(
    name = "rstaffrecords",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee leave and training records: HTTP API and admin CLI over SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Run the HTTP API
    Serve {
        #[arg(long, help = "Address to bind (overrides config)")]
        host: Option<String>,

        #[arg(long, help = "Port to bind (overrides config)")]
        port: Option<u16>,
    },

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Add a year-record for an employee
    Add {
        employee_id: i64,

        year: i32,

        #[arg(long = "name", help = "Employee name")]
        name: String,

        #[arg(long = "leave", default_value_t = 0, help = "Leave days taken")]
        leave: u32,

        #[arg(long = "courses", default_value_t = 0, help = "Courses completed")]
        courses: u32,
    },

    /// List employee ids, or the year-records of one employee
    List { employee_id: Option<i64> },

    /// Delete every year-record of an employee
    Del {
        employee_id: i64,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Change some fields of one year-record
    Edit {
        employee_id: i64,

        year: i32,

        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "leave")]
        leave: Option<u32>,

        #[arg(long = "courses")]
        courses: Option<u32>,
    },
}
