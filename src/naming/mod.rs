/// Naming module - fingerprint computation and in-place renaming
pub mod fingerprint;
pub mod rename;

pub use fingerprint::fingerprint_file;
pub use rename::rename_to_fingerprint;
