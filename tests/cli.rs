use assert_cmd::Command;
use predicates::prelude::*;

fn tally() -> Command {
    Command::cargo_bin("tally").unwrap()
}

#[test]
fn evaluates_argument() {
    tally().arg("10 - 2 * 3").assert().success().stdout("24\n");
}

#[test]
fn reports_failure_on_stderr() {
    tally().arg("5 / 0")
           .assert()
           .failure()
           .stdout("")
           .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn check_mode_prints_valid() {
    tally().args(["--check", "1 / 0"]).assert().success().stdout("Valid\n");
    tally().args(["--check", "1 /"]).assert()
                                    .failure()
                                    .stderr(predicate::str::contains("Unexpected end of input"));
}

#[test]
fn tokens_mode_prints_stream() {
    tally().args(["--tokens", "6/2"])
           .assert()
           .success()
           .stdout("Token(INTEGER, 6) Token(DIV, '/') Token(INTEGER, 2) Token(EOF, None)\n");
}

#[test]
fn file_mode_continues_after_failed_line() {
    tally().args(["--file", "tests/data/session.txt"])
           .assert()
           .failure()
           .stdout("2\n6\n")
           .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn missing_file_is_reported() {
    tally().args(["--file", "tests/data/does-not-exist.txt"])
           .assert()
           .failure()
           .stderr(predicate::str::contains("Failed to read the input file"));
}

#[test]
fn interactive_loop_survives_errors() {
    tally().write_stdin("1+1\n\n2 & 3\n3*3\n")
           .assert()
           .success()
           .stdout(predicate::str::contains("2\n").and(predicate::str::contains("9\n")))
           .stderr(predicate::str::contains("Invalid character '&'"));
}

#[test]
fn interactive_loop_stops_on_exit() {
    tally().write_stdin("exit\n4*4\n")
           .assert()
           .success()
           .stdout(predicate::str::contains("16").not());
}
