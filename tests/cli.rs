use assert_cmd::Command;
use predicates::prelude::*;

const SUCCESS: &str = "'end' found, program executed successfully.\n";

fn minilang() -> Command {
    Command::cargo_bin("minilang").expect("binary is built")
}

#[test]
fn runs_inline_program() {
    minilang().arg("program int a; begin a = 2 + 3 * 4; print a; end")
              .assert()
              .success()
              .stdout(format!("14\n{SUCCESS}"))
              .stderr("");
}

#[test]
fn runs_program_from_file() {
    minilang().args(["--file", "demos/precedence.mini"])
              .assert()
              .success()
              .stdout(predicate::str::starts_with("14\n20\n512\n"))
              .stdout(predicate::str::ends_with(SUCCESS));
}

#[test]
fn missing_file_fails() {
    minilang().args(["--file", "demos/does-not-exist.mini"])
              .assert()
              .failure()
              .stdout("")
              .stderr(predicate::str::contains("Failed to read the input file"));
}

#[test]
fn syntax_error_fails_with_single_diagnostic() {
    minilang().arg("program int a begin a = 1; end")
              .assert()
              .failure()
              .stdout("")
              .stderr(predicate::str::contains("';'").and(predicate::str::contains("line 1")));
}

#[test]
fn undeclared_variable_fails_naming_it() {
    minilang().arg("program begin print x; end")
              .assert()
              .failure()
              .stdout("")
              .stderr("Error on line 1: Undeclared variable 'x'.\n");
}

#[test]
fn runtime_error_keeps_earlier_output() {
    minilang().arg("program begin print 1; print 1 / 0; print 2; end")
              .assert()
              .failure()
              .stdout("1\n")
              .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn overflow_policy_is_selectable() {
    let program = "program begin print 2 ^ 63; end";

    minilang().arg(program)
              .assert()
              .success()
              .stdout(format!("{}\n{SUCCESS}", i64::MIN));

    minilang().args(["--overflow", "saturate", program])
              .assert()
              .success()
              .stdout(format!("{}\n{SUCCESS}", i64::MAX));

    minilang().args(["--overflow", "error", program])
              .assert()
              .failure()
              .stderr(predicate::str::contains("overflow"));
}

#[test]
fn check_mode_does_not_execute() {
    minilang().args(["--check", "program int a; begin print a; a = 1; end"])
              .assert()
              .success()
              .stdout("Syntax OK: 1 declaration(s), 2 statement(s).\n");

    minilang().args(["--check", "program begin print x; end"])
              .assert()
              .success();

    minilang().args(["--check", "program begin print 1 end"])
              .assert()
              .failure()
              .stderr(predicate::str::contains("';' expected after print statement"));
}

#[test]
fn deep_nesting_fails_with_diagnostic() {
    let depth = 30_000;
    let src = format!("program int a; begin a = {}1{}; print a; end",
                      "(".repeat(depth),
                      ")".repeat(depth));
    minilang().arg(src)
              .assert()
              .failure()
              .stdout("")
              .stderr(predicate::str::contains("Error on line 1: Expression nested too deeply"));
}
