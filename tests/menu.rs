use std::time::Duration;

use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn scripted_menu_session() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // One full session: add, search, update the phone, delete, view the
    // now-empty book, hit an invalid choice, then quit.
    let script = "1\nAlice\n1234567890\nalice@example.com\n1 Main St\n\
                  3\naLiCe\n\
                  5\n1\n2\n0912345678\n\
                  4\n1\n\
                  2\n\
                  9\n\
                  6\n";

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book])
        .write_stdin(script)
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(contains("--- Contact Manager Menu ---"))
        .stdout(contains("Contact 'Alice' added with ID 1"))
        .stdout(contains("Contact found:"))
        .stdout(contains("Phone: 091-234-5678"))
        .stdout(contains("Contact 'Alice' deleted successfully"))
        .stdout(contains("No contacts found! Start by adding one."))
        .stdout(contains("Unrecognized choice: '9'"))
        .stdout(contains("Thank you for using the Contact Manager!"));

    Ok(())
}

#[test]
fn menu_reports_recoverable_errors_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // A rejected add and a missing-id delete both return to the menu.
    let script = "1\nJohn123\n1234567890\njohn@example.com\n1 Main St\n\
                  4\n999\n\
                  6\n";

    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book])
        .write_stdin(script)
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(contains("Invalid name: must contain only letters"))
        .stdout(contains("Contact with ID 999 not found"))
        .stdout(contains("Thank you for using the Contact Manager!"));

    Ok(())
}

#[test]
fn menu_quits_on_end_of_input() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // Closed stdin: the menu must end instead of re-prompting forever.
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book])
        .write_stdin("")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(contains("Bye!"));

    Ok(())
}

#[test]
fn menu_quits_on_end_of_input_mid_prompt() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // Input runs out in the middle of the add flow.
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book])
        .write_stdin("1\nAlice\n")
        .timeout(Duration::from_secs(10))
        .assert()
        .success()
        .stdout(contains("Bye!"));

    Ok(())
}
