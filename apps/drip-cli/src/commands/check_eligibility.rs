use std::path::Path;
use std::str::FromStr;

use alloy_primitives::Address;
use drip_sdk::read_artifact;

use crate::error::{CliError, CliResult};

pub fn execute(artifact_path: &Path, recipient: &str) -> CliResult<()> {
    let recipient = Address::from_str(recipient).map_err(|e| CliError::InvalidAddress {
        input: recipient.to_string(),
        reason: e.to_string(),
    })?;

    println!("🔍 Checking eligibility for {recipient}");

    let artifact = read_artifact(artifact_path)?;

    let Some(entry) = artifact.claim_for(&recipient) else {
        println!();
        println!("❌ {recipient} is not part of this distribution");
        return Ok(());
    };

    // Re-verify against the artifact's root so a corrupted or hand-edited
    // artifact is caught here rather than at claim time.
    let proof_ok = entry.proof.verify(artifact.root, entry.leaf);

    println!();
    println!("✅ Eligible");
    println!("   Amount: {}", entry.amount);
    println!("   Leaf:   {}", entry.leaf);
    println!("   Proof ({} siblings):", entry.proof.len());
    for sibling in entry.proof.as_slice() {
        println!("     {sibling}");
    }
    println!(
        "   Verification: {}",
        if proof_ok { "passed" } else { "FAILED — artifact is corrupt" }
    );

    Ok(())
}
