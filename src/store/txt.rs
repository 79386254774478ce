use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::create_file_parent;
use crate::domain::contact::{Contact, Field, HEADER};
use crate::errors::AppError;
use crate::validation::{
    format_phone, validate_address, validate_email, validate_name, validate_phone,
};

/// File-backed contact store. The text file is the sole source of truth:
/// there is no in-memory cache, every operation re-reads the file and
/// mutating operations rewrite it whole. File handles are scoped per
/// operation.
pub struct TxtStore {
    path: PathBuf,
}

impl TxtStore {
    /// Open the store, creating the backing file with only its header line
    /// if it does not exist yet. A no-op on an existing file.
    pub fn open(path: &Path) -> Result<Self, AppError> {
        create_file_parent(path)?;

        if !path.exists() {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)?;
            writeln!(file, "{}", HEADER)?;
        }

        Ok(TxtStore {
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_records(&self) -> Result<Vec<Contact>, AppError> {
        let file = OpenOptions::new().read(true).open(&self.path)?;
        let reader = BufReader::new(file);

        let mut contacts = Vec::new();
        for (i, line) in reader.lines().enumerate() {
            let line = line?;

            // First line is the header, skipped by position. Malformed
            // record lines are skipped silently, never surfaced as errors.
            if i == 0 {
                continue;
            }
            if let Some(contact) = Contact::parse_line(&line) {
                contacts.push(contact);
            }
        }

        Ok(contacts)
    }

    fn write_records(&self, contacts: &[Contact]) -> Result<(), AppError> {
        // The full new content is built in memory first, so a failed write
        // cannot leave a half-written record behind.
        let mut data = String::new();
        data.push_str(HEADER);
        data.push('\n');
        for contact in contacts {
            data.push_str(&contact.to_line());
            data.push('\n');
        }

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)?;
        file.write_all(data.as_bytes())?;

        Ok(())
    }

    /// Next id to assign: one past the highest id on file, or 1 for an
    /// empty book. Ids are never contiguousness-repaired after deletions.
    pub fn next_id(&self) -> Result<u32, AppError> {
        let contacts = self.read_records()?;

        Ok(contacts.iter().map(|c| c.id).max().map_or(1, |max| max + 1))
    }

    /// Validate all four fields, assign the next id, and append one record
    /// to the end of the file. No mutation occurs if validation fails.
    pub fn add(
        &self,
        name: &str,
        phone: &str,
        email: &str,
        address: &str,
    ) -> Result<Contact, AppError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();
        let address = address.trim();

        validate_name(name)?;
        validate_phone(phone)?;
        validate_email(email)?;
        validate_address(address)?;

        let contact = Contact {
            id: self.next_id()?,
            name: name.to_string(),
            phone: format_phone(phone),
            email: email.to_string(),
            address: address.to_string(),
        };

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        writeln!(file, "{}", contact.to_line())?;

        Ok(contact)
    }

    /// Every well-formed record in file order. Empty when the book holds
    /// only its header; a missing file is an I/O error.
    pub fn list(&self) -> Result<Vec<Contact>, AppError> {
        self.read_records()
    }

    /// First contact whose whole trimmed name matches case-insensitively,
    /// scanning in file order. None is a normal outcome, not an error.
    pub fn find_by_name(&self, name: &str) -> Result<Option<Contact>, AppError> {
        let wanted = name.trim().to_lowercase();
        let contacts = self.read_records()?;

        Ok(contacts
            .into_iter()
            .find(|c| c.name.trim().to_lowercase() == wanted))
    }

    /// Remove the first record with the given id and rewrite the file with
    /// the remaining records in their original order. On a missing id no
    /// rewrite is performed and the file is left untouched.
    pub fn delete_by_id(&self, id: u32) -> Result<Contact, AppError> {
        let mut contacts = self.read_records()?;

        let index = match contacts.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => return Err(AppError::NotFound(format!("Contact with ID {}", id))),
        };

        let removed = contacts.remove(index);
        self.write_records(&contacts)?;

        Ok(removed)
    }

    /// Set one field of the record with the given id and rewrite the file,
    /// all other records passing through unchanged. Phone and email values
    /// get the same validation as `add`; a validation failure aborts before
    /// any rewrite. Name and address are set as given (non-emptiness is
    /// enforced by the shell).
    pub fn update_by_id(&self, id: u32, field: Field, new_value: &str) -> Result<Contact, AppError> {
        let mut contacts = self.read_records()?;

        let index = match contacts.iter().position(|c| c.id == id) {
            Some(index) => index,
            None => return Err(AppError::NotFound(format!("Contact with ID {}", id))),
        };

        let new_value = new_value.trim();
        match field {
            Field::Name => contacts[index].name = new_value.to_string(),
            Field::Phone => {
                validate_phone(new_value)?;
                contacts[index].phone = format_phone(new_value);
            }
            Field::Email => {
                validate_email(new_value)?;
                contacts[index].email = new_value.to_string();
            }
            Field::Address => contacts[index].address = new_value.to_string(),
        }

        self.write_records(&contacts)?;

        Ok(contacts[index].clone())
    }
}
