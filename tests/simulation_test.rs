use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_shop(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_car_service"))
        .args(args)
        .env("RUST_LOG", "warn,car_service=info")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start shop");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write operator input");

    child.wait_with_output().expect("Failed to wait for shop")
}

/// Test that the shop runs in headless mode without crashing
#[test]
fn test_headless_shop_runs() {
    let output = run_shop(&["--headless", "--seed", "11"], "");

    assert!(
        output.status.success(),
        "Shop failed to run in headless mode. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("SHOP CLOSED"),
        "Shop did not close properly. stderr: {}",
        stderr
    );
    assert!(stderr.contains("Vehicles served: 4"), "stderr: {}", stderr);
}

/// Test that every queued vehicle shows up in the headless log
#[test]
fn test_headless_shop_lists_every_vehicle() {
    let output = run_shop(&["--headless", "--seed", "5"], "");
    assert!(output.status.success(), "Shop failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for model in ["Audi:", "Lada:", "Mercedes:", "Mustang:"] {
        assert!(stdout.contains(model), "Missing {} in output: {}", model, stdout);
    }
    assert!(stdout.contains("=== Final State ==="));
}

/// Test an interactive session that turns every vehicle away
#[test]
fn test_console_session_skipping_everything() {
    let output = run_shop(&["--billed", "--seed", "1"], "2\n2\n2\n2\n");
    assert!(output.status.success(), "Shop failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("Repair the vehicle? 1 - yes, 2 - no: ").count(), 4);
    assert!(stdout.contains("Balance: 8000.00"), "stdout: {}", stdout);
}

/// Test that the session ends cleanly when input runs out
#[test]
fn test_console_session_ends_at_end_of_input() {
    let output = run_shop(&["--seed", "9", "--cash", "250"], "abc\n");
    assert!(output.status.success(), "Shop failed to run");

    let stdout = String::from_utf8_lossy(&output.stdout);
    // The unrecognised answer shows the same vehicle again before input closes
    assert_eq!(stdout.matches("Audi has arrived for repair.").count(), 2);
    assert!(stdout.contains("Balance: 250.00"));
}
