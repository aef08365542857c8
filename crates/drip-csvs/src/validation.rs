/*!
# CSV Validation & I/O

Reading, writing and content validation for `allocations.csv`. This layer
owns the invariants the tree builder deliberately does not enforce:
recipient uniqueness and the exclusion of zero-amount rows.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{AllocationRow, ALLOCATIONS_CSV_HEADERS},
};
use csv::{Reader, Writer};
use drip_merkle::Allocation;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate an allocations CSV file
pub fn read_allocations_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<AllocationRow>> {
    let file = File::open(path)?;
    let mut rdr = Reader::from_reader(file);

    // Validate headers
    let headers = rdr.headers()?;
    validate_headers(headers.iter(), ALLOCATIONS_CSV_HEADERS, "allocations.csv")?;

    // Read and deserialize rows
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: AllocationRow = result?;
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(CsvError::SchemaValidation(
            "Allocations CSV file is empty".to_string(),
        ));
    }

    Ok(rows)
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write an allocations CSV with proper headers
pub fn write_allocations_csv<P: AsRef<Path>>(path: P, rows: &[AllocationRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // Data rows only; the csv crate writes the header from the struct fields
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Content Validation
// ================================================================================================

/// Validate allocation rows and convert them into tree-ready allocations.
///
/// - Duplicate recipients are an error: silently keeping one of two
///   conflicting amounts would corrupt the distribution.
/// - Zero-amount rows are filtered out; they must never reach leaf
///   generation.
pub fn validate_allocations(rows: &[AllocationRow]) -> CsvResult<Vec<Allocation>> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut allocations = Vec::with_capacity(rows.len());

    for row in rows {
        if !seen.insert(row.recipient) {
            return Err(CsvError::DuplicateRecipient(row.recipient));
        }
        if row.amount.is_zero() {
            continue;
        }
        allocations.push(Allocation::new(row.recipient, row.amount));
    }

    Ok(allocations)
}

// ================================================================================================
// Header Validation
// ================================================================================================

fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    if actual_headers.len() != expected.len() {
        return Err(CsvError::SchemaValidation(format!(
            "{}: expected {} headers, found {}",
            file_type,
            expected.len(),
            actual_headers.len()
        )));
    }

    for (i, (actual, expected)) in actual_headers.iter().zip(expected.iter()).enumerate() {
        if actual != expected {
            return Err(CsvError::SchemaValidation(format!(
                "{}: header {} should be '{}', found '{}'",
                file_type,
                i + 1,
                expected,
                actual
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
