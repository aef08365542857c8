use std::collections::HashSet;
use std::fs;
use std::path::Path;

use alloy_primitives::{Address, U256};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use drip_csvs::{write_allocations_csv, AllocationRow};

use crate::error::CliResult;

/// Generate a deterministic allocations CSV: `count` unique random
/// recipients with whole-token amounts between 1 and 10_000 at 18 decimals.
pub fn execute(out_dir: &Path, count: usize, seed: u64) -> CliResult<()> {
    println!("🎲 Generating {count} allocations (seed {seed})");

    fs::create_dir_all(out_dir)?;

    let mut rng = StdRng::seed_from_u64(seed);
    let one_token = U256::from(10u64).pow(U256::from(18u64));

    let mut seen = HashSet::with_capacity(count);
    let mut rows = Vec::with_capacity(count);
    while rows.len() < count {
        let mut bytes = [0u8; 20];
        rng.fill(&mut bytes[..]);
        let recipient = Address::from(bytes);
        if !seen.insert(recipient) {
            continue;
        }
        let whole_tokens: u64 = rng.gen_range(1..=10_000);
        rows.push(AllocationRow {
            recipient,
            amount: U256::from(whole_tokens) * one_token,
        });
    }

    let csv_path = out_dir.join("allocations.csv");
    write_allocations_csv(&csv_path, &rows)?;

    println!();
    println!("✅ Fixtures written");
    println!("   CSV: {}", csv_path.display());

    Ok(())
}
