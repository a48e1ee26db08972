// Contract tests for `lcsharp new`

use std::fs;
use tempfile::TempDir;
use assert_cmd::Command;
use predicates::prelude::*;

fn lcsharp() -> Command {
    let mut cmd = Command::cargo_bin("lcsharp").unwrap();
    cmd.env_remove("LCSHARP_ROOT")
        .env_remove("LCSHARP_CONFIG")
        .env_remove("VISUAL")
        .env_remove("EDITOR");
    cmd
}

#[test]
fn test_new_creates_solution_file() {
    let temp_dir = TempDir::new().unwrap();

    lcsharp()
        .args(["new", "TwoSum0001", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("namespace Problem0001"))
        .stderr(predicate::str::contains("Created/opened: TwoSum0001.cs"));

    let path = temp_dir.path().join("solutions").join("TwoSum0001.cs");
    let content = fs::read_to_string(path).unwrap();
    assert!(content.starts_with("namespace Problem0001\n{\n"));
    assert!(content.contains("public class Solution"));
}

#[test]
fn test_new_does_not_overwrite_existing_file() {
    let temp_dir = TempDir::new().unwrap();
    let solutions = temp_dir.path().join("solutions");
    fs::create_dir_all(&solutions).unwrap();
    fs::write(solutions.join("Climb70.cs"), "// in progress").unwrap();

    lcsharp()
        .args(["new", "Climb70", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Opened existing"));

    assert_eq!(fs::read_to_string(solutions.join("Climb70.cs")).unwrap(), "// in progress");
}

#[test]
fn test_new_force_overwrites() {
    let temp_dir = TempDir::new().unwrap();
    let solutions = temp_dir.path().join("solutions");
    fs::create_dir_all(&solutions).unwrap();
    fs::write(solutions.join("Climb70.cs"), "// in progress").unwrap();

    lcsharp()
        .args(["new", "Climb70", "--force", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let content = fs::read_to_string(solutions.join("Climb70.cs")).unwrap();
    assert!(content.starts_with("namespace Problem70\n"));
}

#[test]
fn test_new_rejects_name_starting_with_digit() {
    let temp_dir = TempDir::new().unwrap();

    lcsharp()
        .args(["new", "70Climb", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid solution name '70Climb'"));
}

#[test]
fn test_new_prompts_for_name() {
    let temp_dir = TempDir::new().unwrap();

    lcsharp()
        .args(["new", "--no-open", "--root"])
        .arg(temp_dir.path())
        .write_stdin("bad-name\nLc_12_and_345\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("valid C# identifier"));

    let content =
        fs::read_to_string(temp_dir.path().join("solutions").join("Lc_12_and_345.cs")).unwrap();
    assert!(content.starts_with("namespace Problem345\n"));
}

#[test]
fn test_new_cancelled_prompt_json() {
    let temp_dir = TempDir::new().unwrap();

    let output = lcsharp()
        .args(["new", "--json", "--root"])
        .arg(temp_dir.path())
        .write_stdin("\n")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "cancelled");
}

#[test]
fn test_new_json_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = lcsharp()
        .args(["new", "Scratch", "--json", "--root"])
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["name"], "Scratch");
    assert_eq!(json["namespace"], "Problem");
    assert_eq!(json["created"], true);
    assert!(json["path"].as_str().unwrap().ends_with("Scratch.cs"));
}

#[test]
fn test_new_uses_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("lcsharp.toml"),
        r#"
solutions_dir = "problems"
namespace_prefix = "Leet"
template = "// {{NAME}}\nnamespace {{NAMESPACE}};\n"
"#,
    )
    .unwrap();

    lcsharp()
        .args(["new", "Search704", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let content =
        fs::read_to_string(temp_dir.path().join("problems").join("Search704.cs")).unwrap();
    assert_eq!(content, "// Search704\nnamespace Leet704;\n");
}

/// Editor under a folder with a space that records the paths it is asked to open
#[cfg(unix)]
fn recording_editor(dir: &std::path::Path) -> (String, std::path::PathBuf) {
    let editor_dir = dir.join("My Editor");
    fs::create_dir_all(&editor_dir).unwrap();
    std::os::unix::fs::symlink("/bin/sh", editor_dir.join("editor")).unwrap();
    fs::write(
        editor_dir.join("record.sh"),
        "printf '%s\\n' \"$@\" > \"$(dirname \"$0\")/opened.txt\"\n",
    )
    .unwrap();

    let command = format!(
        "\"{}\" \"{}\"",
        editor_dir.join("editor").display(),
        editor_dir.join("record.sh").display()
    );
    (command, editor_dir.join("opened.txt"))
}

#[cfg(unix)]
#[test]
fn test_new_opens_solution_in_configured_editor() {
    let temp_dir = TempDir::new().unwrap();
    let tools_dir = TempDir::new().unwrap();
    let (editor, marker) = recording_editor(tools_dir.path());
    fs::write(
        temp_dir.path().join("lcsharp.toml"),
        format!("editor = '{editor}'\n"),
    )
    .unwrap();

    lcsharp()
        .args(["new", "Merge56", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success();

    let opened = fs::read_to_string(marker).unwrap();
    let expected = temp_dir.path().join("solutions").join("Merge56.cs");
    assert_eq!(opened, format!("{}\n", expected.display()));
    assert!(opened.trim_end().ends_with("solutions/Merge56.cs"));
}

#[cfg(unix)]
#[test]
fn test_new_no_open_skips_editor() {
    let temp_dir = TempDir::new().unwrap();
    let tools_dir = TempDir::new().unwrap();
    let (editor, marker) = recording_editor(tools_dir.path());
    fs::write(
        temp_dir.path().join("lcsharp.toml"),
        format!("editor = '{editor}'\n"),
    )
    .unwrap();

    lcsharp()
        .args(["new", "Merge56", "--no-open", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(!marker.exists());
}

#[test]
fn test_new_without_editor_prints_path_hint() {
    let temp_dir = TempDir::new().unwrap();

    lcsharp()
        .args(["new", "Merge56", "--root"])
        .arg(temp_dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Merge56.cs in your editor"));
}

#[test]
fn test_new_unparsable_editor_is_config_error() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("lcsharp.toml"), "editor = '\"unterminated'\n").unwrap();

    lcsharp()
        .args(["new", "Merge56", "--root"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Cannot parse editor command"));
}

#[cfg(unix)]
#[test]
fn test_new_failing_editor_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("lcsharp.toml"), "editor = \"false\"\n").unwrap();

    lcsharp()
        .args(["new", "Merge56", "--root"])
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'false' exited with"));

    // The file is written before the editor is launched
    assert!(temp_dir.path().join("solutions").join("Merge56.cs").exists());
}
