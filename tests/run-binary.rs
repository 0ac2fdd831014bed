use assert_cmd::Command;
use predicates::prelude::*;

fn binary() -> Command {
    let mut cmd = Command::cargo_bin("parking-solver").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn run_builtin_spaced() {
    binary()
        .arg("--builtin")
        .arg("1")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            r"Solving built-in puzzle 1...
| | | | | | | |
| G G . . . Y |
| P . . B . Y |
| P * * B . Y @
",
        ))
        .stdout(predicate::str::contains("Visited new depth: 0\n"))
        .stdout(predicate::str::contains("States created total: "))
        .stdout(predicate::str::contains("Found solution:\n"))
        .stdout(predicate::str::ends_with(
            r"| P . . . . * *
| P . . B . Y |
| O A A B . Y |
| O . . B . Y |
| | | | | | | |

A-3 B+16 Y+24 *+4
Actions: 4
",
        ))
        .stderr("");
}

#[test]
fn run_file_compact_quiet() {
    binary()
        .arg("--compact")
        .arg("--quiet")
        .arg("puzzles/small.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Solving puzzles/small.txt...\n"))
        .stdout(predicate::str::contains("Visited new depth").not())
        .stdout(predicate::str::ends_with(
            r"||||||
|....|
|...**
|..B.|
|AAB.|
||||||

A-1 B+12 *+3
Actions: 3
",
        ))
        .stderr("");
}

#[test]
fn run_without_solution() {
    binary()
        .arg("--quiet")
        .arg("puzzles/blocked.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("States visited total: 1\n"))
        .stdout(predicate::str::ends_with("No solution\n"))
        .stdout(predicate::str::contains("Found solution").not());
}

#[test]
fn run_state_limit() {
    binary()
        .arg("--builtin")
        .arg("1")
        .arg("--max-states")
        .arg("1")
        .assert()
        .failure()
        .stdout(predicate::str::contains(
            "Gave up after visiting 1 states without a solution",
        ));
}

#[test]
fn run_missing_file() {
    binary()
        .arg("puzzles/does-not-exist.txt")
        .assert()
        .failure()
        .stdout(predicate::str::starts_with(
            "Can't load puzzles/does-not-exist.txt:",
        ));
}

#[test]
fn run_version() {
    binary()
        .arg("--version")
        .assert()
        .success()
        .stdout(format!("parking-solver {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn run_bad_builtin() {
    binary()
        .arg("--builtin")
        .arg("4")
        .assert()
        .failure()
        .stdout("");
}

#[test]
fn run_bad_formatting_args() {
    // doesn't check stderr, clap may complain about either flag first
    binary()
        .arg("--compact")
        .arg("--spaced")
        .arg("puzzles/1.txt")
        .assert()
        .failure()
        .stdout("");
}
