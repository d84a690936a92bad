use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Runs in an empty temp dir so no config is discovered and the built-in
/// sample data is used.
fn fieldbook_cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("fieldbook"));
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("FIELDBOOK_TODAY");
    cmd
}

fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

fn ids(value: &Value) -> Vec<u64> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["Id"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("crop planning"));
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fieldbook"));
}

// =============================================================================
// Initialization and configuration
// =============================================================================

#[test]
fn test_init_creates_config() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized"));

    assert!(dir.path().join(".fieldbook.yml").exists());
}

#[test]
fn test_init_twice_fails_without_force() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir).arg("init").assert().success();
    fieldbook_cmd(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
    fieldbook_cmd(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_seed_writes_data_files() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir).args(["init", "--seed"]).assert().success();

    assert!(dir.path().join("data/cropCycles.json").exists());
    assert!(dir.path().join("data/reminders.json").exists());
    let config = std::fs::read_to_string(dir.path().join(".fieldbook.yml")).unwrap();
    assert!(config.contains("data_dir: data"));

    let cycles = json_output(fieldbook_cmd(&dir).args(["crops", "list", "--json"]));
    assert_eq!(cycles.as_array().unwrap().len(), 6);
}

#[test]
fn test_config_crop_type_override() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".fieldbook.yml"),
        "planning:\n  crop_types:\n    Garlic: 240\n",
    )
    .unwrap();

    fieldbook_cmd(&dir)
        .args(["harvest-date", "Garlic", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-08-28"));
}

#[test]
fn test_data_dir_flag() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("empty")).unwrap();
    std::fs::write(dir.path().join("empty/cropCycles.json"), "[]").unwrap();

    fieldbook_cmd(&dir)
        .args(["--data-dir", "empty", "crops", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No crop cycles found."));
}

// =============================================================================
// Harvest projection
// =============================================================================

#[test]
fn test_harvest_date_known_crop() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["harvest-date", "Corn", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-29"));
}

#[test]
fn test_harvest_date_unknown_crop_falls_back() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["harvest-date", "Dragonfruit", "2024-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-05-30"))
        .stderr(predicate::str::contains("unknown crop type"));
}

#[test]
fn test_crop_types_table() {
    let dir = TempDir::new().unwrap();
    let table = json_output(fieldbook_cmd(&dir).args(["crop-types", "--json"]));
    assert_eq!(table["cropTypes"]["Cotton"], 180);
    assert_eq!(table["cropTypes"]["Lettuce"], 45);
    assert_eq!(table["defaultGrowingPeriod"], 90);
}

// =============================================================================
// Crop cycles
// =============================================================================

#[test]
fn test_crops_range_overlap() {
    let dir = TempDir::new().unwrap();
    let cycles = json_output(fieldbook_cmd(&dir).args([
        "crops",
        "range",
        "2024-04-01",
        "2024-04-30",
        "--json",
    ]));
    let mut found = ids(&cycles);
    found.sort();
    assert_eq!(found, vec![1, 4, 6]);
}

#[test]
fn test_crops_create_projects_harvest() {
    let dir = TempDir::new().unwrap();
    let cycle = json_output(fieldbook_cmd(&dir).args([
        "crops",
        "create",
        "Corn",
        "--field",
        "North Field A",
        "--planted",
        "2024-03-01",
        "--json",
    ]));
    assert_eq!(cycle["Id"], 7);
    assert_eq!(cycle["harvestDate"], "2024-06-29");
    assert_eq!(cycle["plannedHarvestDate"], "2024-06-29");
    assert_eq!(cycle["status"], "Planned");
}

#[test]
fn test_crops_create_reports_missing_fields() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["crops", "create", "Corn"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "(missing planting date and field location)",
        ));
}

#[test]
fn test_crops_create_rejects_unknown_field() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args([
            "crops",
            "create",
            "Corn",
            "--field",
            "Back Forty",
            "--planted",
            "2024-03-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown field location"));
}

#[test]
fn test_crops_update_reprojects_harvest() {
    let dir = TempDir::new().unwrap();
    let cycle = json_output(fieldbook_cmd(&dir).args([
        "crops",
        "update",
        "1",
        "--planted",
        "2024-04-01",
        "--json",
    ]));
    assert_eq!(cycle["harvestDate"], "2024-07-30");
}

#[test]
fn test_crops_delete_cascades() {
    let dir = TempDir::new().unwrap();
    let result = json_output(fieldbook_cmd(&dir).args(["crops", "delete", "5", "--json"]));
    assert_eq!(result["action"], "deleted");
    assert_eq!(result["remindersRemoved"], 2);
}

#[test]
fn test_crops_show_missing() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["crops", "show", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Crop cycle with ID 42 not found"));
}

#[test]
fn test_crops_status_filter() {
    let dir = TempDir::new().unwrap();
    let cycles = json_output(fieldbook_cmd(&dir).args([
        "crops", "list", "--status", "harvested", "--json",
    ]));
    let mut found = ids(&cycles);
    found.sort();
    assert_eq!(found, vec![3, 4]);
}

// =============================================================================
// Calendar
// =============================================================================

#[test]
fn test_calendar_grid_shape() {
    let dir = TempDir::new().unwrap();
    let calendar = json_output(fieldbook_cmd(&dir).args([
        "calendar", "--month", "2024-08", "--json",
    ]));
    let days = calendar["days"].as_array().unwrap();
    assert_eq!(days.len(), 42);
    assert_eq!(days[0]["date"], "2024-07-28");
    assert_eq!(calendar["monthStart"], "2024-08-01");

    let aug13 = days.iter().find(|d| d["date"] == "2024-08-13").unwrap();
    assert_eq!(aug13["entries"].as_array().unwrap().len(), 2);
    assert_eq!(aug13["entries"][0]["kind"], "harvest");
}

#[test]
fn test_calendar_marks_today() {
    let dir = TempDir::new().unwrap();
    let calendar = json_output(
        fieldbook_cmd(&dir)
            .env("FIELDBOOK_TODAY", "2024-05-20")
            .args(["calendar", "--json"]),
    );
    let days = calendar["days"].as_array().unwrap();
    let today: Vec<&Value> = days.iter().filter(|d| d["isToday"] == true).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0]["date"], "2024-05-20");
    assert_eq!(today[0]["entries"][0]["kind"], "planting");
}

#[test]
fn test_calendar_rejects_bad_month() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["calendar", "--month", "August"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid month"));
}

// =============================================================================
// Reminders
// =============================================================================

#[test]
fn test_reminders_upcoming_window() {
    let dir = TempDir::new().unwrap();
    let due = json_output(
        fieldbook_cmd(&dir)
            .env("FIELDBOOK_TODAY", "2024-05-10")
            .args(["reminders", "upcoming", "--days", "14", "--json"]),
    );
    assert_eq!(ids(&due), vec![5, 3]);

    let due = json_output(
        fieldbook_cmd(&dir)
            .env("FIELDBOOK_TODAY", "2024-05-10")
            .args(["reminders", "upcoming", "--days", "4", "--json"]),
    );
    assert_eq!(ids(&due), vec![5]);
}

#[test]
fn test_reminders_upcoming_skips_completed() {
    let dir = TempDir::new().unwrap();
    let due = json_output(
        fieldbook_cmd(&dir)
            .env("FIELDBOOK_TODAY", "2024-04-15")
            .args(["reminders", "upcoming", "--json"]),
    );
    assert!(ids(&due).is_empty());
}

#[test]
fn test_reminders_create_requires_date() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["reminders", "create", "Check fences"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("(missing reminder date)"));
}

#[test]
fn test_reminders_create_defaults() {
    let dir = TempDir::new().unwrap();
    let reminder = json_output(fieldbook_cmd(&dir).args([
        "reminders",
        "create",
        "Check fences",
        "--date",
        "2024-06-03",
        "--json",
    ]));
    assert_eq!(reminder["Id"], 9);
    assert_eq!(reminder["reminderType"], "Task");
    assert_eq!(reminder["priority"], "Medium");
    assert_eq!(reminder["completed"], false);
}

#[test]
fn test_reminders_for_crop() {
    let dir = TempDir::new().unwrap();
    let reminders = json_output(fieldbook_cmd(&dir).args([
        "reminders", "list", "--crop", "5", "--json",
    ]));
    let mut found = ids(&reminders);
    found.sort();
    assert_eq!(found, vec![3, 4]);
}

// =============================================================================
// CRM records
// =============================================================================

#[test]
fn test_customers_search() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["customers", "search", "prairie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dana Whitfield"));
}

#[test]
fn test_customers_show_missing() {
    let dir = TempDir::new().unwrap();
    fieldbook_cmd(&dir)
        .args(["customers", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Customer with ID 99 not found"));
}

#[test]
fn test_customer_summary() {
    let dir = TempDir::new().unwrap();
    let detail = json_output(fieldbook_cmd(&dir).args(["customers", "show", "1", "--json"]));
    assert_eq!(detail["customer"]["name"], "Dana Whitfield");
    assert_eq!(detail["summary"]["orderCount"], 2);
    assert_eq!(detail["summary"]["totalPaidValue"], 39600.0);
}

#[test]
fn test_orders_for_customer() {
    let dir = TempDir::new().unwrap();
    let orders = json_output(fieldbook_cmd(&dir).args([
        "orders", "list", "--customer", "1", "--json",
    ]));
    assert_eq!(ids(&orders), vec![1, 4]);
}

#[test]
fn test_activities_recent_limit() {
    let dir = TempDir::new().unwrap();
    let activities = json_output(fieldbook_cmd(&dir).args([
        "activities", "list", "--limit", "2", "--json",
    ]));
    assert_eq!(ids(&activities), vec![6, 2]);
}

#[test]
fn test_dashboard_metrics() {
    let dir = TempDir::new().unwrap();
    let dashboard = json_output(
        fieldbook_cmd(&dir)
            .env("FIELDBOOK_TODAY", "2024-07-20")
            .args(["dashboard", "--json"]),
    );
    assert_eq!(dashboard["crm"]["totalCustomers"], 5);
    assert_eq!(dashboard["crm"]["pendingOrders"], 2);
    assert_eq!(dashboard["crm"]["totalRevenue"], 39600.0);
    assert_eq!(dashboard["planning"]["activeCycles"], 4);
    assert_eq!(dashboard["planning"]["upcomingHarvests"], 4);
}
