use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn add_contact() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // Add a contact
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args([
            "--file",
            book,
            "add",
            "--name",
            "Alice",
            "--phone",
            "1234567890",
            "--email",
            "alice@example.com",
            "--address",
            "1 Main St",
        ])
        .assert()
        .success()
        .stdout(contains("Contact 'Alice' added with ID 1"));

    // Confirm the newly added contact exists, phone stored formatted
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("123-456-7890"));

    Ok(())
}

#[test]
fn rejected_add_appends_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let book = dir.path().join("book.txt");
    let book = book.to_str().unwrap();

    // Name with digits
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args([
            "--file",
            book,
            "add",
            "--name",
            "John123",
            "--phone",
            "1234567890",
            "--email",
            "john@example.com",
            "--address",
            "1 Main St",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid name"));

    // Short phone number
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args([
            "--file",
            book,
            "add",
            "--name",
            "John",
            "--phone",
            "12345",
            "--email",
            "john@example.com",
            "--address",
            "1 Main St",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid phone"));

    // Email without '@' or '.'
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args([
            "--file",
            book,
            "add",
            "--name",
            "John",
            "--phone",
            "1234567890",
            "--email",
            "not-an-email",
            "--address",
            "1 Main St",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid email"));

    // Nothing was appended by the rejected adds
    Command::cargo_bin(env!("CARGO_PKG_NAME"))?
        .args(["--file", book, "list"])
        .assert()
        .success()
        .stdout(contains("No contacts found! Start by adding one."));

    Ok(())
}
