//! Machine-code program listings.
//!
//! A listing (`.mc` file) has one instruction per line: an address and an encoding,
//! separated by whitespace, optionally followed by a comment. Only the first two tokens
//! matter; lines with fewer are ignored. The simulator reads the file itself; the listing
//! is loaded here only to show the program next to the replay.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::common::error::ProgramError;
use crate::common::literal::parse_hex;

/// One `(address, encoding)` line of a listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Address text as written (e.g. `0x4`).
    pub address: String,
    /// Encoding text as written (e.g. `0x00500513`).
    pub encoding: String,
}

impl ListingEntry {
    /// Address as a number, if it is valid hexadecimal.
    pub fn address_value(&self) -> Option<u32> {
        parse_hex(&self.address)
    }

    /// Encoding as a number, if it is valid hexadecimal.
    pub fn encoding_value(&self) -> Option<u32> {
        parse_hex(&self.encoding)
    }
}

/// Parsed program listing, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgramListing {
    entries: Vec<ListingEntry>,
}

impl ProgramListing {
    /// Parses listing text.
    pub fn parse(text: &str) -> Self {
        let entries = text
            .lines()
            .filter_map(|line| {
                let mut tokens = line.split_whitespace();
                let address = tokens.next()?;
                let encoding = tokens.next()?;
                Some(ListingEntry {
                    address: address.to_owned(),
                    encoding: encoding.to_owned(),
                })
            })
            .collect();
        Self { entries }
    }

    /// Reads and parses a listing file.
    ///
    /// # Arguments
    ///
    /// * `path` - Listing file path.
    ///
    /// # Returns
    ///
    /// The listing, or [`ProgramError::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, ProgramError> {
        let text = fs::read_to_string(path).map_err(|source| ProgramError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let listing = Self::parse(&text);
        debug!(path = %path.display(), instructions = listing.len(), "loaded program listing");
        Ok(listing)
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    /// Number of instructions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the listing has no instructions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
