/// Wipe worker - drives one file from discovery to its terminal state
///
/// Stages: overwrite, then fingerprint, then rename. The first failure at
/// any stage is terminal for that file (no retries), and every task
/// produces exactly one WipeOutcome either way.
use std::path::PathBuf;

use rand::rngs::StdRng;

use crate::error::WipeError;
use crate::naming::{fingerprint_file, rename_to_fingerprint};
use crate::wipe::overwrite::overwrite_file;

/// One discovered file, consumed exactly once by a worker
#[derive(Debug, Clone)]
pub struct FileTask {
    pub path: PathBuf,
    /// 1-based order of discovery, used only for reporting
    pub index: u64,
}

/// Terminal result for one file
#[derive(Debug)]
pub struct WipeOutcome {
    pub index: u64,
    pub original: PathBuf,
    /// Fingerprint-derived path on success, None on failure
    pub renamed: Option<PathBuf>,
    pub error: Option<WipeError>,
}

impl WipeOutcome {
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    fn success(task: &FileTask, renamed: PathBuf) -> Self {
        WipeOutcome {
            index: task.index,
            original: task.path.clone(),
            renamed: Some(renamed),
            error: None,
        }
    }

    fn failure(task: &FileTask, error: WipeError) -> Self {
        WipeOutcome {
            index: task.index,
            original: task.path.clone(),
            renamed: None,
            error: Some(error),
        }
    }
}

/// Run one task through the full pipeline
///
/// Overwrite strictly completes before fingerprinting begins. A failure
/// after the overwrite stage leaves a wiped-but-not-renamed file at the
/// original path; that state is reported, not masked.
pub fn wipe_file(task: &FileTask, rng: &mut StdRng) -> WipeOutcome {
    if let Err(e) = overwrite_file(&task.path, rng) {
        return WipeOutcome::failure(task, e);
    }

    let fingerprint = match fingerprint_file(&task.path) {
        Ok(fp) => fp,
        Err(e) => return WipeOutcome::failure(task, e),
    };

    match rename_to_fingerprint(&task.path, &fingerprint) {
        Ok(new_path) => WipeOutcome::success(task, new_path),
        Err(e) => WipeOutcome::failure(task, e),
    }
}
