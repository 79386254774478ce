use std::fmt;

use clap::ValueEnum;

/// Fixed first line of the contact book file.
pub const HEADER: &str = "ID | Name | Phone | Email | Address";

/// Exact field delimiter. There is no escaping; a field value containing
/// this substring corrupts parsing of its line.
pub const DELIMITER: &str = " | ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Contact fields that an update can target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
        };
        write!(f, "{}", name)
    }
}

impl Contact {
    /// Serialize to one record line (no trailing newline).
    pub fn to_line(&self) -> String {
        [
            self.id.to_string(),
            self.name.clone(),
            self.phone.clone(),
            self.email.clone(),
            self.address.clone(),
        ]
        .join(DELIMITER)
    }

    /// Parse one record line. Returns None for malformed lines: anything
    /// that does not split into exactly 5 fields, or whose id field is not
    /// an integer.
    pub fn parse_line(line: &str) -> Option<Contact> {
        let parts: Vec<&str> = line.trim().split(DELIMITER).collect();
        if parts.len() != 5 {
            return None;
        }

        let id = parts[0].trim().parse::<u32>().ok()?;

        Some(Contact {
            id,
            name: parts[1].to_string(),
            phone: parts[2].to_string(),
            email: parts[3].to_string(),
            address: parts[4].to_string(),
        })
    }
}
