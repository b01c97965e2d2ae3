use std::process::{Command, Output};

const P2PKH_LOCKING: &str = "OP_DUP OP_HASH160 PUBKEYHASH_ABC OP_EQUALVERIFY OP_CHECKSIG";

fn bc_script(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bc-script"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bc-script")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn json_output_stays_parseable_when_validation_fails() {
    let output = bc_script(&["--json", "--unlocking", "", "--locking", "OP_DUP"]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["valid"], serde_json::Value::Bool(false));
    assert_eq!(report["locking"], "OP_DUP");
    assert_eq!(
        report["failure"],
        "stack underflow: attempted to read from an empty stack"
    );

    // The diagnostic goes to the error channel only
    let err = stderr(&output);
    assert!(err.contains("StackUnderflow"), "stderr was: {}", err);
    assert!(!stdout(&output).contains("WARN"));
}

#[test]
fn equalverify_diagnostic_names_both_values() {
    let locking = "OP_DUP OP_HASH160 WRONG_HASH OP_EQUALVERIFY OP_CHECKSIG";
    let output = bc_script(&["--json", "--unlocking", "SIG_OK PUBKEY_ABC", "--locking", locking]);

    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["valid"], serde_json::Value::Bool(false));

    let err = stderr(&output);
    assert_eq!(err.lines().filter(|l| l.contains("VerificationFailure")).count(), 1);
    assert!(err.contains("PUBKEYHASH_ABC") && err.contains("WRONG_HASH"), "stderr was: {}", err);
}

#[test]
fn empty_stack_diagnostic_on_stderr() {
    let output = bc_script(&["--json", "--unlocking", "", "--locking", ""]);
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(report["failure"], "stack is empty after execution");
    assert!(stderr(&output).contains("stack is empty after execution"));
}

#[test]
fn valid_demo_prints_result_without_diagnostics() {
    let output = bc_script(&[]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("scriptSig:    SIG_OK PUBKEY_ABC"));
    assert!(out.contains(&format!("scriptPubKey: {}", P2PKH_LOCKING)));
    assert!(out.contains("Result: ") && out.contains("VALID") && !out.contains("INVALID"));
    assert!(stderr(&output).is_empty());
}

#[test]
fn failing_traced_run_still_shows_final_state() {
    let output = bc_script(&["--trace", "--unlocking", "A", "--locking", "OP_DROP OP_DROP"]);
    assert!(stdout(&output).contains("INVALID"));

    let err = stderr(&output);
    assert!(err.contains("[TRACE] token=A  stack=[A]"), "stderr was: {}", err);
    assert!(err.contains("[TRACE] token=OP_DROP  stack=[]"), "stderr was: {}", err);
    assert!(err.contains("Final state"), "stderr was: {}", err);
    assert!(err.contains("StackUnderflow"));
}

#[test]
fn opcodes_flag_lists_registered_names() {
    let output = bc_script(&["--opcodes"]);
    assert!(output.status.success());
    let names: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(names.len(), 24);
    assert!(names.contains(&String::from("OP_FALSE")));
    assert!(names.contains(&String::from("OP_CHECKSIG")));

    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}
