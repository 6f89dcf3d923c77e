use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::{tempdir, NamedTempFile, TempDir};

fn script(home: &TempDir, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("pocket_core_cli")
        .unwrap()
        .env("POCKET_CORE_CLI_SCRIPT", "1")
        .env("POCKET_CORE_HOME", home.path())
        .env("NO_COLOR", "1")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn feed_renders_sample_groups() {
    let home = tempdir().unwrap();
    script(&home, "feed\nexit\n").success().stdout(
        contains("== February 2025 ==")
            .and(contains("Friday, February 21"))
            .and(contains("Monday, February 17"))
            .and(contains("Starbucks Coffee")),
    );
}

#[test]
fn filter_narrows_the_feed() {
    let home = tempdir().unwrap();
    script(&home, "filter income\nfeed\nexit\n").success().stdout(
        contains("Filter set to `income` (1 transaction).")
            .and(contains("Salary"))
            .and(contains("Starbucks Coffee").not()),
    );
}

#[test]
fn unknown_filter_is_reported_and_shell_continues() {
    let home = tempdir().unwrap();
    script(&home, "filter lottery\nfilter\nexit\n").success().stdout(
        contains("Unknown category `lottery`").and(contains("Current filter: all")),
    );
}

#[test]
fn unmatched_filter_shows_empty_state() {
    let home = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"[{"id": 1, "title": "Salary", "category": "income", "amount": 2400, "timestamp": "2025-02-20T09:00:00"}]"#,
    )
    .unwrap();
    let input = format!("load {}\nfilter transport\nfeed\nexit\n", file.path().display());
    script(&home, &input)
        .success()
        .stdout(contains("Loaded 1 transaction from").and(contains("No transactions found.")));
}

#[test]
fn load_rejects_malformed_timestamps() {
    let home = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"[
            {"id": 1, "title": "Lunch", "category": "food", "amount": -12.5, "timestamp": "2025-02-20 12:00"},
            {"id": 2, "title": "Mystery", "category": "food", "amount": -3, "timestamp": "someday"}
        ]"#,
    )
    .unwrap();
    let input = format!("load {}\nfeed\nexit\n", file.path().display());
    script(&home, &input).success().stdout(
        contains("Record #1 (id 2) rejected: Invalid timestamp `someday`")
            // The sample stays loaded after a failed load.
            .and(contains("Starbucks Coffee")),
    );
}

#[test]
fn unknown_command_suggests_nearest() {
    let home = tempdir().unwrap();
    script(&home, "fed\nexit\n")
        .success()
        .stdout(contains("Unknown command `fed`").and(contains("Suggestion: `feed`?")));
}

#[test]
fn totals_and_goal_progress() {
    let home = tempdir().unwrap();
    script(&home, "totals\ngoal 350 1000\nexit\n").success().stdout(
        contains("Net")
            .and(contains("+$908.98"))
            .and(contains("Spending split: housing 80%"))
            .and(contains("[#######-------------] 35%")),
    );
}

#[test]
fn config_changes_persist_between_sessions() {
    let home = tempdir().unwrap();
    script(&home, "config set feed_order newest-first\nexit\n")
        .success()
        .stdout(contains("Set `feed_order` to `newest-first`."));

    script(&home, "order\nconfig show\nexit\n").success().stdout(
        contains("Current order: newest-first")
            .and(contains("=== Configuration ==="))
            .and(contains("config.json")),
    );
}

#[test]
fn order_rejects_unknown_policy() {
    let home = tempdir().unwrap();
    script(&home, "order sideways\norder oldest-first\nexit\n").success().stdout(
        contains("Unknown feed order `sideways`").and(contains("Feed order set to `oldest-first`.")),
    );
}

#[test]
fn export_writes_grouped_json() {
    let home = tempdir().unwrap();
    let target = home.path().join("feed.json");
    let input = format!("filter food\nexport {}\nexit\n", target.display());
    script(&home, &input)
        .success()
        .stdout(contains("Exported 2 transactions in 2 day groups to"));

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&target).unwrap()).unwrap();
    let months = document.as_array().unwrap();
    assert_eq!(months.len(), 1);
    assert_eq!(months[0]["key"], "February 2025");
    assert_eq!(months[0]["days"][0]["key"], "Friday, February 21");
    assert_eq!(months[0]["days"][0]["records"][0]["title"], "Starbucks Coffee");
}

#[test]
fn extreme_goal_amounts_do_not_abort_the_session() {
    let home = tempdir().unwrap();
    script(
        &home,
        "goal 1 0.0000000000000000000000000001\ngoal -79228162514264337593543950335 79228162514264337593543950335\ncategories\nexit\n",
    )
    .success()
    .stdout(
        contains(format!("[{}] 100%", "#".repeat(20)))
            .and(contains("Goal reached!"))
            .and(contains(format!("[{}] 0%", "-".repeat(20))))
            .and(contains("=== Categories ===")),
    );
}

#[test]
fn overflowing_totals_are_reported() {
    let home = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"[
            {"id": 1, "title": "Huge", "category": "food", "amount": "-79228162514264337593543950335", "timestamp": "2025-02-20 12:00"},
            {"id": 2, "title": "Huger", "category": "food", "amount": "-79228162514264337593543950335", "timestamp": "2025-02-20 13:00"}
        ]"#,
    )
    .unwrap();
    let input = format!("load {}\ntotals\nfeed\nexit\n", file.path().display());
    script(&home, &input).success().stdout(
        contains("Loaded 2 transactions from")
            .and(contains("Amount overflow while summing food total"))
            .and(contains("Huger")),
    );
}

#[test]
fn categories_show_icons_and_labels() {
    let home = tempdir().unwrap();
    script(&home, "filter income\ncategories\nexit\n").success().stdout(
        contains("💰 Income")
            .and(contains("🍽 Food & Dining"))
            .and(contains("* income")),
    );
}

#[test]
fn feed_header_names_the_record_source() {
    let home = tempdir().unwrap();
    let file = NamedTempFile::new().unwrap();
    std::fs::write(
        file.path(),
        r#"[{"id": 1, "title": "Salary", "category": "income", "amount": 2400, "timestamp": "2025-02-20T09:00:00"}]"#,
    )
    .unwrap();
    let input = format!("feed\nload {}\nfeed\nexit\n", file.path().display());
    script(&home, &input).success().stdout(
        contains("=== Transactions (all, as-supplied) from sample data ===").and(contains(
            format!("from {} ===", file.path().display()),
        )),
    );
}

#[test]
fn locale_setting_changes_amount_separators() {
    let home = tempdir().unwrap();
    script(
        &home,
        "config set locale de-DE\nconfig set currency eur\ntotals\nexit\n",
    )
    .success()
    .stdout(contains("+€2.400,00").and(contains("+€908,98")));
}

#[test]
fn unknown_setting_suggests_nearest_key() {
    let home = tempdir().unwrap();
    script(&home, "config set curency EUR\nexit\n").success().stdout(
        contains("Unknown setting `curency`").and(contains("Suggestion: `currency`?")),
    );
}
