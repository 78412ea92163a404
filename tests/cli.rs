//! Runs the demo binary end to end.

use serde_json::Value;
use std::process::{Command, Output};

fn demo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_state-pattern-demo"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run state-pattern-demo")
}

#[test]
fn default_sequence_prints_every_callback() {
    let output = demo(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Execute EntryNull Process...",
            "Execute ExitNull Process...",
            "Execute EntryIdle Process...",
            "Execute ExitIdle Process...",
            "Execute EntryReady Process...",
            "Execute ConnectProcess Process...",
            "Execute ExitReady Process...",
            "Execute EntryIdle Process...",
            "Execute DisconnectProcess Process...",
            "Execute ExitIdle Process...",
            "Execute EntryNull Process...",
            "Final state: Null",
        ]
    );
}

#[test]
fn unhandled_event_exits_with_error() {
    let output = demo(&["--events", "connect"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("event #1 rejected"));
    assert!(stderr.contains("Event 'Connect' was not handled in state 'Null'"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("Final state"));
}

#[test]
fn unknown_event_name_is_rejected_by_parser() {
    let output = demo(&["--events", "create,reboot"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("reboot"));
}

#[test]
fn json_report_lists_calls_and_history() {
    let output = demo(&["--json", "--events", "Create, connect"]);

    assert!(output.status.success());
    let report: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(report["final_state"], "Ready");
    assert_eq!(
        report["calls"],
        serde_json::json!([
            "entry_null",
            "exit_null",
            "entry_idle",
            "exit_idle",
            "entry_ready",
            "action_connect_process",
        ])
    );

    let transitions = report["history"]["transitions"].as_array().unwrap();
    assert_eq!(transitions.len(), 2);
    assert_eq!(transitions[0]["event"], "Create");
    assert_eq!(transitions[1]["from"], "Idle");
    assert_eq!(transitions[1]["to"], "Ready");
}
