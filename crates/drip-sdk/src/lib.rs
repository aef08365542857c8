/*!
# Drip SDK

Compiles a validated allocation set into a distribution artifact: the merkle
root to deploy plus one pre-generated proof per recipient, serialized as
JSON for claim front-ends to serve.

Compilation is deterministic (same allocations in, byte-identical artifact
out) and self-checking: every generated proof is verified against the root
before the artifact is emitted.
*/

pub mod compiler;
pub mod error;

pub use compiler::{
    compile_distribution, compile_from_csv, read_artifact, write_artifact, ClaimEntry,
    DistributionArtifact,
};
pub use error::{CompileError, CompileResult};
