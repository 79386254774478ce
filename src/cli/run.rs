use std::path::Path;

use clap::Parser;
use dotenv::dotenv;

use crate::cli::command::{Cli, Commands};
use crate::cli::menu;
use crate::domain::contact::Contact;
use crate::errors::AppError;
use crate::store::TxtStore;

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();
    let store = TxtStore::open(Path::new(&cli.file))?;

    match cli.command {
        Some(command) => dispatch(&store, command),
        None => menu::run_menu(&store),
    }
}

pub fn dispatch(store: &TxtStore, command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            let contact = store.add(&name, &phone, &email, &address)?;

            println!("Contact '{}' added with ID {}", contact.name, contact.id);
            Ok(())
        }

        Commands::List => {
            let contacts = store.list()?;

            if contacts.is_empty() {
                println!("No contacts found! Start by adding one.");
                return Ok(());
            }

            print_listing(&contacts);
            Ok(())
        }

        Commands::Search { name } => {
            match store.find_by_name(&name)? {
                Some(contact) => {
                    println!("Contact found:");
                    println!("{}", display_contact(&contact));
                }
                // A miss is a normal outcome, not an error.
                None => println!("No contact found with the name '{}'", name.trim()),
            }
            Ok(())
        }

        Commands::Delete { id } => {
            let contact = store.delete_by_id(id)?;

            println!("Contact '{}' deleted successfully", contact.name);
            Ok(())
        }

        Commands::Update { id, field, value } => {
            if value.trim().is_empty() {
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
    }
}

pub fn print_listing(contacts: &[Contact]) {
    println!(
        "{:<5} {:<15} {:<15} {:<30} {}",
        "ID", "Name", "Phone", "Email", "Address"
    );
    println!("{}", "-".repeat(80));

    for c in contacts {
        println!(
            "{:<5} {:<15} {:<15} {:<30} {}",
            c.id, c.name, c.phone, c.email, c.address
        );
    }

    println!("{}", "-".repeat(80));
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "ID: {}\n\
        Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.id, contact.name, contact.phone, contact.email, contact.address
    )
}
