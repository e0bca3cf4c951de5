/// Wipe module - pass sequence, overwrite engine, and per-file worker
pub mod overwrite;
pub mod passes;
pub mod worker;

pub use worker::{wipe_file, FileTask, WipeOutcome};
