use std::path::Path;

use drip_sdk::{compile_from_csv, write_artifact};

use crate::error::CliResult;

pub fn execute(allocations_csv: &Path, artifact_out: &Path) -> CliResult<()> {
    println!("🔨 Compiling distribution from {}", allocations_csv.display());

    let artifact = compile_from_csv(allocations_csv)?;
    write_artifact(&artifact, artifact_out)?;

    println!();
    println!("✅ Distribution compiled");
    println!("   Root:       {}", artifact.root);
    println!("   Recipients: {}", artifact.claim_count);
    println!("   Total:      {}", artifact.total_amount);
    println!("   Artifact:   {}", artifact_out.display());

    Ok(())
}
