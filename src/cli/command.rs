use clap::{Parser, Subcommand};

use crate::domain::contact::Field;

/// Default location of the contact book file.
pub const DEFAULT_BOOK_PATH: &str = "./.instance/contact_book.txt";

#[derive(Parser, Debug)]
#[command(name = "contact-book", version, about = "Contact book manager")]
pub struct Cli {
    /// Path to the contact book file
    #[arg(long, env = "CONTACT_BOOK", default_value = DEFAULT_BOOK_PATH)]
    pub file: String,

    /// Command to run; starts the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands and their flags
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new contact
    Add {
        /// Contact name (letters only)
        #[arg(long)]
        name: String,

        /// Contact phone number (10 digits, e.g. 1234567890)
        #[arg(long)]
        phone: String,

        /// Contact email address
        #[arg(long)]
        email: String,

        /// Contact address
        #[arg(long)]
        address: String,
    },
    /// List all contacts
    List,
    /// Search for a contact by name (case-insensitive, whole name)
    Search {
        /// Name to search for
        #[arg(long)]
        name: String,
    },
    /// Delete a contact by its ID
    Delete {
        /// ID of the contact to delete
        #[arg(long)]
        id: u32,
    },
    /// Update one field of an existing contact
    Update {
        /// ID of the contact to update
        #[arg(long)]
        id: u32,

        /// Field to change
        #[arg(long)]
        field: Field,

        /// New value for the field
        #[arg(long)]
        value: String,
    },
}
