use std::io::{self, Write};

use crate::cli::run::{display_contact, print_listing};
use crate::domain::contact::Field;
use crate::errors::AppError;
use crate::store::TxtStore;

enum MenuChoice {
    Add,
    View,
    Search,
    Delete,
    Update,
    Quit,
}

/// Interactive menu loop. Validation and not-found outcomes are reported
/// and the menu continues; end of input quits like choice 6, and other
/// I/O failures end the program.
pub fn run_menu(store: &TxtStore) -> Result<(), AppError> {
    println!("\nWelcome to the Contact Manager!");

    loop {
        let choice = match parse_choice() {
            Ok(choice) => choice,
            Err(e) if is_end_of_input(&e) => {
                println!("\nBye!");
                return Ok(());
            }
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        let outcome = match choice {
            MenuChoice::Add => add_flow(store),
            MenuChoice::View => view_flow(store),
            MenuChoice::Search => search_flow(store),
            MenuChoice::Delete => delete_flow(store),
            MenuChoice::Update => update_flow(store),
            MenuChoice::Quit => {
                println!("\nThank you for using the Contact Manager! Bye!");
                return Ok(());
            }
        };

        if let Err(e) = outcome {
            if is_end_of_input(&e) {
                println!("\nBye!");
                return Ok(());
            }
            match e {
                AppError::Io(_) => return Err(e),
                _ => println!("{}", e),
            }
        }
    }
}

fn is_end_of_input(err: &AppError) -> bool {
    matches!(err, AppError::Io(e) if e.kind() == io::ErrorKind::UnexpectedEof)
}

fn parse_choice() -> Result<MenuChoice, AppError> {
    println!("\n--- Contact Manager Menu ---");
    println!("1. Add Contact");
    println!("2. View Contacts");
    println!("3. Search Contact");
    println!("4. Delete Contact");
    println!("5. Update Contact");
    println!("6. Quit");
    print!("> ");
    io::stdout().flush()?;

    let choice = get_input()?;
    match choice.as_str() {
        "1" => Ok(MenuChoice::Add),
        "2" => Ok(MenuChoice::View),
        "3" => Ok(MenuChoice::Search),
        "4" => Ok(MenuChoice::Delete),
        "5" => Ok(MenuChoice::Update),
        "6" => Ok(MenuChoice::Quit),
        _ => Err(AppError::ParseCommand(choice)),
    }
}

fn add_flow(store: &TxtStore) -> Result<(), AppError> {
    let name = prompt("Enter the contact's name:")?;
    let phone = prompt("Enter phone number (e.g. 1234567890):")?;
    let email = prompt("Enter email address:")?;
    let address = prompt("Enter address:")?;

    let contact = store.add(&name, &phone, &email, &address)?;

    println!("Contact '{}' added with ID {}", contact.name, contact.id);
    Ok(())
}

fn view_flow(store: &TxtStore) -> Result<(), AppError> {
    let contacts = store.list()?;

    if contacts.is_empty() {
        println!("No contacts found! Start by adding one.");
        return Ok(());
    }

    print_listing(&contacts);
    Ok(())
}

fn search_flow(store: &TxtStore) -> Result<(), AppError> {
    let name = prompt("Enter the name to search:")?;

    match store.find_by_name(&name)? {
        Some(contact) => {
            println!("Contact found:");
            println!("{}", display_contact(&contact));
        }
        None => println!("No contact found with the name '{}'", name.trim()),
    }
    Ok(())
}

fn delete_flow(store: &TxtStore) -> Result<(), AppError> {
    let id = prompt_id("Enter the ID of the contact to delete:")?;

    let contact = store.delete_by_id(id)?;

    println!("Contact '{}' deleted successfully", contact.name);
    Ok(())
}

fn update_flow(store: &TxtStore) -> Result<(), AppError> {
    let id = prompt_id("Enter the ID of the contact to update:")?;

    println!("\nWhat would you like to update?");
    println!("1. Name");
    println!("2. Phone");
    println!("3. Email");
    println!("4. Address");
    print!("> ");
    io::stdout().flush()?;

    let choice = get_input()?;
    let field = match choice.as_str() {
        "1" => Field::Name,
        "2" => Field::Phone,
        "3" => Field::Email,
        "4" => Field::Address,
        _ => return Err(AppError::ParseCommand(choice)),
    };

    let value = prompt(&format!("Enter new {}:", field))?;
    if value.is_empty() {
        return Err(AppError::Validation {
            field,
            reason: "must not be empty".to_string(),
        });
    }

    let contact = store.update_by_id(id, field, &value)?;

    println!("Contact updated successfully");
    println!("{}", display_contact(&contact));
    Ok(())
}

fn prompt(message: &str) -> Result<String, AppError> {
    println!("\n{}", message);
    print!("> ");
    io::stdout().flush()?;

    get_input()
}

fn prompt_id(message: &str) -> Result<u32, AppError> {
    let input = prompt(message)?;

    Ok(input.parse::<u32>()?)
}

fn get_input() -> Result<String, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;

    // read_line returns 0 bytes on a closed or exhausted stdin; without
    // this the menu would re-prompt forever on empty reads.
    if bytes == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }

    Ok(input.trim().to_string())
}
