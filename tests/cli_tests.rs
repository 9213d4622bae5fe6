use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{rsr, setup_test_db};

fn init(db_path: &str) {
    rsr()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

fn add(db_path: &str, id: &str, year: &str, name: &str, leave: &str, courses: &str) {
    rsr()
        .args([
            "--db", db_path, "--test", "add", id, year, "--name", name, "--leave", leave,
            "--courses", courses,
        ])
        .assert()
        .success();
}

#[test]
fn test_add_and_list_records() {
    let db_path = setup_test_db("cli_add_list");
    init(&db_path);
    add(&db_path, "7", "2022", "Ada", "5", "1");
    add(&db_path, "7", "2023", "Ada", "8", "3");
    add(&db_path, "2", "2023", "Bob", "1", "0");

    rsr()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("EMPLOYEE IDS:").and(contains("2\n7\n")));

    let output = rsr()
        .args(["--db", &db_path, "--test", "list", "7"])
        .output()
        .expect("failed to list records");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let years: Vec<&str> = stdout
        .lines()
        .filter(|l| l.starts_with("20"))
        .map(|l| &l[..4])
        .collect();
    assert_eq!(years, vec!["2023", "2022"]);
}

#[test]
fn test_add_duplicate_fails() {
    let db_path = setup_test_db("cli_add_dup");
    init(&db_path);
    add(&db_path, "7", "2023", "Ada", "8", "3");

    rsr()
        .args(["--db", &db_path, "--test", "add", "7", "2023", "--name", "Ada"])
        .assert()
        .failure()
        .stderr(contains("already exists"));
}

#[test]
fn test_edit_changes_only_given_fields() {
    let db_path = setup_test_db("cli_edit");
    init(&db_path);
    add(&db_path, "7", "2023", "Ada", "8", "3");

    rsr()
        .args(["--db", &db_path, "--test", "edit", "7", "2023", "--leave", "10"])
        .assert()
        .success()
        .stdout(contains("leave 10, courses 3"));
}

#[test]
fn test_edit_without_fields_fails() {
    let db_path = setup_test_db("cli_edit_empty");
    init(&db_path);

    rsr()
        .args(["--db", &db_path, "--test", "edit", "7", "2023"])
        .assert()
        .failure()
        .stderr(contains("No update fields provided"));
}

#[test]
fn test_del_with_yes_removes_records() {
    let db_path = setup_test_db("cli_del");
    init(&db_path);
    add(&db_path, "7", "2022", "Ada", "5", "1");
    add(&db_path, "7", "2023", "Ada", "8", "3");

    rsr()
        .args(["--db", &db_path, "--test", "del", "7", "--yes"])
        .assert()
        .success()
        .stdout(contains("Successfully deleted 2 record(s) for EmployeeId 7"));

    rsr()
        .args(["--db", &db_path, "--test", "list", "7"])
        .assert()
        .success()
        .stdout(contains("No records for EmployeeId 7."));
}

#[test]
fn test_del_unknown_employee_fails() {
    let db_path = setup_test_db("cli_del_unknown");
    init(&db_path);

    rsr()
        .args(["--db", &db_path, "--test", "del", "42", "-y"])
        .assert()
        .failure()
        .stderr(contains("No records found for EmployeeId 42"));
}

#[test]
fn test_del_cancelled_keeps_records() {
    let db_path = setup_test_db("cli_del_cancel");
    init(&db_path);
    add(&db_path, "7", "2023", "Ada", "8", "3");

    rsr()
        .args(["--db", &db_path, "--test", "del", "7"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rsr()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .success()
        .stdout(contains("7"));
}

#[test]
fn test_list_without_init_fails_cleanly() {
    let db_path = setup_test_db("cli_no_init");

    rsr()
        .args(["--db", &db_path, "--test", "list"])
        .assert()
        .failure()
        .stderr(contains("Database connection unavailable"));
}

#[test]
fn test_db_info_and_check() {
    let db_path = setup_test_db("cli_db_info");
    init(&db_path);
    add(&db_path, "7", "2021", "Ada", "5", "1");
    add(&db_path, "3", "2024", "Alan", "2", "4");

    rsr()
        .args(["--db", &db_path, "--test", "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(
            contains("Employees:")
                .and(contains("2021 .. 2024"))
                .and(contains("Integrity check passed.")),
        );
}
