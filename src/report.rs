/// Synchronized outcome reporting
///
/// All workers share one Reporter. A full outcome block is formatted first
/// and written under a single lock acquisition, so blocks from concurrent
/// workers never interleave at the character level.
use std::io::{self, Write};
use std::sync::Mutex;

use crate::error::WipeError;
use crate::wipe::WipeOutcome;

pub struct Reporter {
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Reporter {
    /// Reporter writing to the process stdout
    pub fn stdout() -> Self {
        Reporter::new(Box::new(io::stdout()))
    }

    /// Reporter writing to an arbitrary sink (tests capture output here)
    pub fn new(sink: Box<dyn Write + Send>) -> Self {
        Reporter {
            sink: Mutex::new(sink),
        }
    }

    /// Report one file's terminal state
    pub fn outcome(&self, outcome: &WipeOutcome) {
        let block = match (&outcome.renamed, &outcome.error) {
            (Some(new_path), _) => {
                let new_name = new_path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| new_path.display().to_string());
                format!(
                    "No{} wipe success: {}\n  new name: {}\n",
                    outcome.index,
                    outcome.original.display(),
                    new_name
                )
            }
            (None, Some(error)) => format!(
                "No{} wipe FAILED at {}: {}\n  {}\n",
                outcome.index,
                error.stage(),
                outcome.original.display(),
                error
            ),
            // A worker never produces this, but don't silently drop it
            (None, None) => format!(
                "No{} wipe finished with no result: {}\n",
                outcome.index,
                outcome.original.display()
            ),
        };
        self.write_block(&block);
    }

    /// Report a subtree that could not be enumerated
    pub fn skipped_dir(&self, error: &WipeError) {
        self.write_block(&format!("⚠️  skipping subtree: {}\n", error));
    }

    fn write_block(&self, block: &str) {
        if let Ok(mut sink) = self.sink.lock() {
            // A console write failing leaves nothing useful to do
            let _ = sink.write_all(block.as_bytes());
            let _ = sink.flush();
        }
    }
}

/// Write adapter that lets tests keep a handle on the captured bytes
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct SharedBuffer(std::sync::Arc<Mutex<Vec<u8>>>);

#[cfg(test)]
impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
impl SharedBuffer {
    pub(crate) fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}
