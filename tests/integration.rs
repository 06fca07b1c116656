use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("console-guard").unwrap()
}

fn init_repo(dir: &Path) {
    std::process::Command::new("git")
        .args(["init"])
        .current_dir(dir)
        .output()
        .unwrap();
}

mod pass_through {
    use super::*;

    #[test]
    fn test_non_repo_echoes_input_exactly() {
        let temp_dir = TempDir::new().unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("hello")
            .assert()
            .success()
            .stdout("hello")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_empty_input() {
        let temp_dir = TempDir::new().unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("")
            .assert()
            .success()
            .stdout("");
    }

    #[test]
    fn test_binary_input_survives_byte_for_byte() {
        let temp_dir = TempDir::new().unwrap();
        let payload: Vec<u8> = vec![0x00, 0xff, 0x9f, b'\n', 0x01];

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin(payload.clone())
            .assert()
            .success()
            .stdout(payload);
    }

    #[test]
    fn test_input_echoed_even_when_warnings_fire() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(temp_dir.path().join("app.ts"), "console.log('x');").unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("{\"session\":\"abc\"}")
            .assert()
            .success()
            .stdout("{\"session\":\"abc\"}");
    }
}

mod warnings {
    use super::*;

    #[test]
    fn test_warns_about_modified_source_file() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::create_dir(temp_dir.path().join("src")).unwrap();
        fs::write(
            temp_dir.path().join("src/app.ts"),
            "export function f() {\n  console.log('debug');\n}\n",
        )
        .unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("console.log found in src/app.ts"))
            .stderr(predicate::str::contains(
                "Remove console.log statements before committing",
            ));
    }

    #[test]
    fn test_test_files_do_not_warn() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(
            temp_dir.path().join("app.test.ts"),
            "console.log('expected in tests');",
        )
        .unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_scripts_directory_does_not_warn() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::create_dir(temp_dir.path().join("scripts")).unwrap();
        fs::write(
            temp_dir.path().join("scripts/build.js"),
            "console.log('build output');",
        )
        .unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_clean_files_do_not_warn() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(temp_dir.path().join("a.ts"), "export const a = 1;").unwrap();
        fs::write(temp_dir.path().join("b.ts"), "export const b = 2;").unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_non_source_extensions_are_ignored() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(
            temp_dir.path().join("notes.md"),
            "console.log is mentioned here",
        )
        .unwrap();

        cmd()
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_quiet_suppresses_warnings() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(temp_dir.path().join("app.ts"), "console.log('x');").unwrap();

        cmd()
            .arg("--quiet")
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("[Hook]").not());
    }

    #[test]
    fn test_custom_marker_and_extensions() {
        let temp_dir = TempDir::new().unwrap();
        init_repo(temp_dir.path());
        fs::write(temp_dir.path().join("job.py"), "print('debug')\n").unwrap();

        cmd()
            .args(["--marker", "print(", "--ext", r"\.py$"])
            .current_dir(temp_dir.path())
            .write_stdin("payload")
            .assert()
            .success()
            .stdout("payload")
            .stderr(predicate::str::contains("print( found in job.py"));
    }
}
