// oradb-core/src/application/mod.rs

pub mod datapump;
pub mod sqlplus;

mod resolve;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Lets the CLI do:
// `use oradb_core::application::{run_sqlplus, run_expdp, run_impdp};`
// without knowing the internal file structure.

pub use datapump::{run_expdp, run_impdp};
pub use sqlplus::run_sqlplus;
