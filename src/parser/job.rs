//! JSON job files.

use crate::config::PackConfig;
use crate::error::{PlanError, Result};
use crate::model::{Job, PieceRequest};
use serde::Deserialize;
use std::path::Path;

/// Board section of a job file.
#[derive(Debug, Deserialize)]
struct BoardEntry {
    width: f64,
    height: f64,
}

/// One line of the piece list in a job file.
#[derive(Debug, Deserialize)]
struct PieceEntry {
    width: f64,
    height: f64,
    #[serde(default = "default_quantity")]
    quantity: u32,
    #[serde(default)]
    request_index: Option<usize>,
    #[serde(default)]
    label: Option<String>,
}

fn default_quantity() -> u32 {
    1
}

/// On-disk layout of a job file.
#[derive(Debug, Deserialize)]
struct JobFile {
    board: BoardEntry,
    pieces: Vec<PieceEntry>,
    #[serde(default)]
    config: PackConfig,
}

impl JobFile {
    /// Convert to a job, numbering pieces by position where no index is given.
    fn into_job(self) -> Job {
        let requests = self
            .pieces
            .into_iter()
            .enumerate()
            .map(|(idx, entry)| PieceRequest {
                width: entry.width,
                height: entry.height,
                quantity: entry.quantity,
                request_index: entry.request_index.unwrap_or(idx),
                label: entry.label,
            })
            .collect();

        Job {
            board_width: self.board.width,
            board_height: self.board.height,
            requests,
            config: self.config,
        }
    }
}

/// Parse a job from JSON text.
///
/// Pieces without an explicit `request_index` are numbered by their position
/// in the list.
pub fn parse_job_str(content: &str) -> Result<Job> {
    let file: JobFile = serde_json::from_str(content)?;
    Ok(file.into_job())
}

/// Parse a job file.
pub fn parse_job_file(path: &Path) -> Result<Job> {
    if !path.exists() {
        return Err(PlanError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(PlanError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let job = parse_job_str(&content)?;
    tracing::debug!(
        "Loaded {} piece type(s) from {}",
        job.requests.len(),
        path.display()
    );
    Ok(job)
}
