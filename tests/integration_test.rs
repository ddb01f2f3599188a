use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taskstore(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskstore").unwrap();
    cmd.current_dir(dir).env_remove("TASKSTORE_DB");
    cmd
}

#[test]
fn test_full_hierarchy() {
    let temp_dir = TempDir::new().unwrap();

    taskstore(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized store"));
    assert!(temp_dir.path().join("taskstore.db").exists());

    taskstore(&temp_dir)
        .args(["add-user", "Blazej"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user #1"));

    taskstore(&temp_dir)
        .args(["add-user", "Kamilla"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user #2"));

    taskstore(&temp_dir)
        .args([
            "add-project",
            "ProjectName",
            "--desc",
            "ProjectDescription",
            "--user",
            "1",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created project #1"));

    taskstore(&temp_dir)
        .args([
            "add-task", "Write tests", "--desc", "Cover the gateway", "--due", "2024-06-30",
            "--project", "1", "--field1", "2", "--field2", "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created task #1"));
}

#[test]
fn test_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("custom.db");
    let db = db.to_str().unwrap();

    taskstore(&temp_dir).args(["--db", db, "init"]).assert().success();

    taskstore(&temp_dir)
        .args(["--db", db, "--json", "add-user", "Blazej"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"{"id":1}"#));
}

#[test]
fn test_init_twice_is_harmless() {
    let temp_dir = TempDir::new().unwrap();

    taskstore(&temp_dir).arg("init").assert().success();
    taskstore(&temp_dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn test_add_before_init_fails() {
    let temp_dir = TempDir::new().unwrap();

    taskstore(&temp_dir)
        .args(["add-user", "Blazej"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not initialized"));
}

#[test]
fn test_project_for_missing_user_fails() {
    let temp_dir = TempDir::new().unwrap();
    taskstore(&temp_dir).arg("init").assert().success();

    taskstore(&temp_dir)
        .args(["add-project", "Orphan", "--user", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("FOREIGN KEY"));
}

#[test]
fn test_blank_user_name_fails() {
    let temp_dir = TempDir::new().unwrap();
    taskstore(&temp_dir).arg("init").assert().success();

    taskstore(&temp_dir)
        .args(["add-user", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("user name is required"));
}

#[test]
fn test_invalid_due_date_rejected() {
    let temp_dir = TempDir::new().unwrap();
    taskstore(&temp_dir).arg("init").assert().success();

    taskstore(&temp_dir)
        .args(["add-task", "t", "--due", "30/06/2024", "--project", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--due"));
}

#[test]
fn test_store_location_from_env() {
    let temp_dir = TempDir::new().unwrap();
    let db = temp_dir.path().join("env.db");

    taskstore(&temp_dir)
        .env("TASKSTORE_DB", &db)
        .arg("init")
        .assert()
        .success();
    assert!(db.exists());
    assert!(!temp_dir.path().join("taskstore.db").exists());

    taskstore(&temp_dir)
        .env("TASKSTORE_DB", &db)
        .args(["add-user", "Zoë"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user #1"));
}

#[test]
fn test_busy_timeout_flag() {
    let temp_dir = TempDir::new().unwrap();
    taskstore(&temp_dir).arg("init").assert().success();

    taskstore(&temp_dir)
        .args(["--busy-timeout", "250", "add-user", "Blazej"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user #1"));

    taskstore(&temp_dir)
        .args(["--busy-timeout", "soon", "add-user", "Blazej"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--busy-timeout"));
}
