//! Integration tests for the etlforge binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn etlforge() -> Command {
    Command::cargo_bin("etlforge").unwrap()
}

#[test]
fn help_flag() {
    etlforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("etlforge"))
        .stdout(predicate::str::contains("new"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag() {
    etlforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn new_command_help_lists_answer_flags() {
    etlforge()
        .args(["new", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--category"))
        .stdout(predicate::str::contains("--subcategory"))
        .stdout(predicate::str::contains("--extractor"))
        .stdout(predicate::str::contains("--loader"));
}

#[test]
fn new_scaffolds_expected_tree() {
    let temp = TempDir::new().unwrap();

    etlforge()
        .args([
            "new",
            "sales_etl",
            "--category",
            "analytics",
            "--subcategory",
            "sales",
            "--extractor",
            "--loader",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::contains("scaffolded"));

    let project = temp.path().join("analytics/sales/sales_etl");
    assert!(project.join("workflows/etl_tools/extractor.py").is_file());
    assert!(project.join("workflows/etl_tools/loader.py").is_file());
    assert!(!project.join("workflows/etl_tools/transform.py").exists());
    assert!(project.join("workflows/etl.py").is_file());
    assert!(project.join("routes/sales_etl_routes.py").is_file());

    let etl = std::fs::read_to_string(project.join("workflows/etl.py")).unwrap();
    assert!(etl.contains("class SalesEtlETL:"));

    let routes = std::fs::read_to_string(project.join("routes/sales_etl_routes.py")).unwrap();
    assert!(routes.contains("sales_etl"));
}

#[test]
fn new_twice_fails_with_already_exists() {
    let temp = TempDir::new().unwrap();
    let args = |temp: &TempDir| {
        let mut cmd = etlforge();
        cmd.args([
            "new",
            "daily_load",
            "--category",
            "operations",
            "--subcategory",
            "reporting",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes");
        cmd
    };

    args(&temp).assert().success();
    args(&temp)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn invalid_project_name_is_rejected() {
    let temp = TempDir::new().unwrap();

    etlforge()
        .args([
            "new",
            "bad-name",
            "--category",
            "analytics",
            "--subcategory",
            "sales",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid project name"));

    assert!(!temp.path().join("analytics").exists());
}

#[test]
fn unknown_category_lists_configured_ones() {
    let temp = TempDir::new().unwrap();

    etlforge()
        .args([
            "new",
            "sales_etl",
            "--category",
            "nope",
            "--subcategory",
            "sales",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown category"))
        .stderr(predicate::str::contains("analytics"));
}

#[test]
fn missing_answers_fail_without_a_terminal() {
    // stdin is not a TTY under the test harness, so prompting is impossible.
    etlforge()
        .args(["new", "--category", "analytics"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("missing answer"));
}

#[test]
fn quiet_new_prints_nothing_on_stdout() {
    let temp = TempDir::new().unwrap();

    etlforge()
        .args([
            "-q",
            "new",
            "silent_run",
            "--category",
            "engineering",
            "--subcategory",
            "ingestion",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(
        temp.path()
            .join("engineering/ingestion/silent_run/routes")
            .is_dir()
    );
}

#[test]
fn json_output_format_emits_summary() {
    let temp = TempDir::new().unwrap();

    let output = etlforge()
        .args([
            "--output-format",
            "json",
            "new",
            "json_run",
            "--category",
            "analytics",
            "--subcategory",
            "finance",
            "--transform",
            "--root",
        ])
        .arg(temp.path())
        .arg("--yes")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["project_name"], "json_run");
    assert_eq!(summary["category"], "analytics");
    assert_eq!(summary["has_transform"], true);
    assert_eq!(summary["has_extractor"], false);
}

#[test]
fn custom_template_directory_is_used() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    for id in ["extractor", "transform", "loader"] {
        std::fs::write(
            templates.join(format!("{id}.py.template")),
            format!("# custom {id}"),
        )
        .unwrap();
    }
    std::fs::write(
        templates.join("routes.py.template"),
        "# custom routes for {{PROJECT_NAME}}",
    )
    .unwrap();
    std::fs::write(
        templates.join("etl.py.template"),
        "# custom etl {{CLASS_NAME}}",
    )
    .unwrap();

    let root = temp.path().join("projects");
    etlforge()
        .env("ETLFORGE_TEMPLATES_DIR", &templates)
        .args([
            "new",
            "custom_run",
            "--category",
            "analytics",
            "--subcategory",
            "sales",
            "--extractor",
            "--root",
        ])
        .arg(&root)
        .arg("--yes")
        .assert()
        .success();

    let extractor = std::fs::read_to_string(
        root.join("analytics/sales/custom_run/workflows/etl_tools/extractor.py"),
    )
    .unwrap();
    assert_eq!(extractor, "# custom extractor");

    let etl =
        std::fs::read_to_string(root.join("analytics/sales/custom_run/workflows/etl.py")).unwrap();
    assert_eq!(etl, "# custom etl CustomRun");
}

#[test]
fn incomplete_template_directory_fails_with_not_found() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    std::fs::create_dir_all(&templates).unwrap();
    // routes/etl templates are missing.
    std::fs::write(templates.join("extractor.py.template"), "# x").unwrap();

    let root = temp.path().join("projects");
    etlforge()
        .env("ETLFORGE_TEMPLATES_DIR", &templates)
        .args([
            "new",
            "broken_run",
            "--category",
            "analytics",
            "--subcategory",
            "sales",
            "--root",
        ])
        .arg(&root)
        .arg("--yes")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("not found"));

    // Nothing was written.
    assert!(!root.exists());
}

#[test]
fn list_shows_categories_and_templates() {
    etlforge()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("analytics"))
        .stdout(predicate::str::contains("extractor"))
        .stdout(predicate::str::contains("etl"));
}

#[test]
fn list_json_is_parseable() {
    let output = etlforge()
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let payload: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(payload["categories"].is_array());
    assert_eq!(payload["templates"].as_array().unwrap().len(), 5);
}

#[test]
fn init_local_writes_config_file() {
    let temp = TempDir::new().unwrap();

    etlforge()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success();

    let config = std::fs::read_to_string(temp.path().join(".etlforge.toml")).unwrap();
    assert!(config.contains("project_root"));
    assert!(config.contains("analytics"));

    // Second run without --force leaves the file alone.
    etlforge()
        .current_dir(temp.path())
        .args(["init", "--local"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn shell_completions_generate() {
    etlforge()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("etlforge"));
}
