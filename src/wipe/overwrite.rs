/// Overwrite engine - destroys one file's contents in place
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use rand::rngs::StdRng;

use crate::error::WipeError;
use crate::wipe::passes::apply_sequence;

/// Overwrite the file at `path` with the full 33-pass sequence
///
/// Reads the entire content into memory, applies every pass, then writes
/// the buffer back at offset zero. File length is unchanged. Any I/O
/// failure abandons the file in its current state - the content may
/// already be partially destroyed, which is the intended direction anyway.
///
/// # Arguments
/// * `path` - File to destroy
/// * `rng` - The calling worker's own generator
pub fn overwrite_file(path: &Path, rng: &mut StdRng) -> Result<(), WipeError> {
    let io_err = |source| WipeError::Io {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(io_err)?;

    let file_size = file.metadata().map_err(io_err)?.len() as usize;

    // Buffer sized exactly to the current length; a short read means the
    // file changed under us and the operation is abandoned
    let mut buffer = vec![0u8; file_size];
    file.read_exact(&mut buffer).map_err(io_err)?;

    apply_sequence(&mut buffer, rng);

    file.seek(SeekFrom::Start(0)).map_err(io_err)?;
    file.write_all(&buffer).map_err(io_err)?;
    file.flush().map_err(io_err)?;

    Ok(())
}
