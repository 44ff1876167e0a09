//! # Program Listing Tests

use std::io::Write;
use std::path::Path;

use pretty_assertions::assert_eq;
use rvviz_core::common::ProgramError;
use rvviz_core::sim::ProgramListing;
use tempfile::NamedTempFile;

use crate::common::fixtures::LISTING;

#[test]
fn short_lines_are_ignored() {
    let listing = ProgramListing::parse(LISTING);
    let pairs: Vec<(&str, &str)> = listing
        .entries()
        .iter()
        .map(|e| (e.address.as_str(), e.encoding.as_str()))
        .collect();
    assert_eq!(pairs, [("0x0", "0x00500093"), ("0x4", "0x00a00113"), ("0xc", "0x002081b3")]);
}

#[test]
fn numeric_fields() {
    let listing = ProgramListing::parse(LISTING);
    let entry = &listing.entries()[2];
    assert_eq!(entry.address_value(), Some(0xc));
    assert_eq!(entry.encoding_value(), Some(0x0020_81b3));
}

#[test]
fn load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(LISTING.as_bytes()).unwrap();
    file.flush().unwrap();

    let listing = ProgramListing::load(file.path()).unwrap();
    assert_eq!(listing.len(), 3);
}

#[test]
fn missing_file_is_an_error() {
    let err = ProgramListing::load(Path::new("/nonexistent/output.mc")).unwrap_err();
    assert!(matches!(err, ProgramError::Io { .. }));
}

#[test]
fn empty_listing() {
    assert!(ProgramListing::parse("\n\n").is_empty());
}
