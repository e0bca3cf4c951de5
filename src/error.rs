/// Error taxonomy for the wipe pipeline
///
/// Every variant maps to one stage of processing. Errors never terminate
/// the process: they are caught at the worker or walker boundary and
/// converted into a reported outcome for the affected file or subtree.
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WipeError {
    /// A directory could not be opened for listing. The subtree is
    /// skipped; sibling subtrees continue.
    #[error("cannot list directory '{}': {source}", .path.display())]
    DirectoryAccess { path: PathBuf, source: io::Error },

    /// The file could not be opened, fully read, or written back during
    /// the overwrite stage. The file is abandoned in whatever state the
    /// failure left it (possibly partially overwritten).
    #[error("overwrite failed for '{}': {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    /// The wiped file could not be reopened or read for fingerprinting.
    #[error("cannot fingerprint '{}': {source}", .path.display())]
    Hash { path: PathBuf, source: io::Error },

    /// The fingerprint filename already exists in the parent directory.
    /// fs::rename would silently replace it on Unix, so this is checked
    /// up front and rejected.
    #[error("fingerprint target '{}' already exists", .target.display())]
    RenameCollision { target: PathBuf },

    /// The filesystem rejected the rename itself.
    #[error("rename '{}' -> '{}' failed: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        source: io::Error,
    },
}

impl WipeError {
    /// Name of the pipeline stage this error belongs to, for reporting.
    pub fn stage(&self) -> &'static str {
        match self {
            WipeError::DirectoryAccess { .. } => "walk",
            WipeError::Io { .. } => "overwrite",
            WipeError::Hash { .. } => "fingerprint",
            WipeError::RenameCollision { .. } | WipeError::Rename { .. } => "rename",
        }
    }
}
