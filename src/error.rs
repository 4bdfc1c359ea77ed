use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("timeline document must be a JSON object keyed by match id")]
    NotAnObject,

    #[error("timeline document must hold exactly one match, found {0} top-level keys")]
    MatchCount(usize),

    #[error("match {match_id} has no `info` section")]
    MissingInfo { match_id: String },

    #[error("match {match_id} has no `info.frames` list")]
    MissingFrames { match_id: String },

    #[error("participant frame key {key:?} at frame {frame_index} is not an integer")]
    ParticipantKey { key: String, frame_index: usize },

    #[error("{relation} row did not serialize to a JSON object")]
    RowShape { relation: &'static str },

    #[error("failed to create output directory {}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write relation {relation} to {}", .path.display())]
    Write {
        relation: String,
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
