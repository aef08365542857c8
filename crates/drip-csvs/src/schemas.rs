/*!
# CSV Schema Definitions

Row types and header contracts for allocation intake. Field codecs are
explicit (hex address, decimal amount) so the on-disk format never drifts
with a serde default.
*/

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Expected headers for allocations.csv in exact order
pub const ALLOCATIONS_CSV_HEADERS: &[&str] = &["recipient", "amount"];

/// Row structure for `allocations.csv`
///
/// **Producers**: snapshot/eligibility pipelines, `drip generate-fixtures`
/// **Consumer**: `drip compile`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllocationRow {
    /// Recipient address in 0x-prefixed hex
    #[serde(
        deserialize_with = "deserialize_address",
        serialize_with = "serialize_address"
    )]
    pub recipient: Address,

    /// Amount in base token units, decimal, up to 256 bits
    #[serde(
        deserialize_with = "deserialize_amount",
        serialize_with = "serialize_amount"
    )]
    pub amount: U256,
}

/// Deserialize a 0x-prefixed hex string to an Address
fn deserialize_address<'de, D>(deserializer: D) -> Result<Address, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Address::from_str(&s).map_err(serde::de::Error::custom)
}

/// Serialize an Address to checksummed 0x-prefixed hex
fn serialize_address<S>(address: &Address, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&address.to_string())
}

/// Deserialize a decimal string to a U256
fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    U256::from_str_radix(&s, 10).map_err(serde::de::Error::custom)
}

/// Serialize a U256 to a decimal string
fn serialize_amount<S>(amount: &U256, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&amount.to_string())
}
