/*!
# Drip CSV Schema Definitions

The authoritative CSV schema for allocation intake.

## Purpose

`allocations.csv` is the contract between whatever computes a distribution
(snapshot scripts, eligibility pipelines, `drip generate-fixtures`) and the
`drip compile` step that turns it into a merkle tree plus claim artifact.

## Schema

### Allocations CSV (`allocations.csv`)
- `recipient`: 20-byte address in 0x-prefixed hex
- `amount`: token amount in base units, decimal, 256-bit unsigned

## Validation

Reading validates the header row exactly. [`validate_allocations`] then
enforces the invariants the tree builder deliberately does not:
duplicate recipients are an error, zero-amount rows are filtered out before
any leaf is generated.
*/

pub mod errors;
pub mod schemas;
pub mod validation;

pub use errors::{CsvError, CsvResult};
pub use schemas::{AllocationRow, ALLOCATIONS_CSV_HEADERS};
pub use validation::{read_allocations_csv, validate_allocations, write_allocations_csv};
