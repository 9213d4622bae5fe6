#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rstaffrecords::core::add::AddLogic;
use rstaffrecords::db::initialize::init_db;
use rstaffrecords::db::pool::DbPool;
use rstaffrecords::models::record::EmployeeYearRecord;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rsr() -> Command {
    cargo_bin_cmd!("rstaffrecords")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rstaffrecords.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the schema and insert the given records through the library.
pub fn seed(db_path: &str, records: &[EmployeeYearRecord]) {
    let mut pool = DbPool::create(db_path).expect("create db");
    init_db(&pool.conn).expect("init db");
    for rec in records {
        AddLogic::apply(&mut pool, rec).expect("add record");
    }
}

/// Employee 7 with two years, employee 3 with one.
pub fn sample_records() -> Vec<EmployeeYearRecord> {
    vec![
        EmployeeYearRecord::new(7, 2022, "Ada Lovelace", 5, 1),
        EmployeeYearRecord::new(7, 2023, "Ada Lovelace", 8, 3),
        EmployeeYearRecord::new(3, 2023, "Alan Turing", 2, 4),
    ]
}
