use thiserror::Error;

/// Failures of the file/stream wrapper around the engine.
///
/// The engine itself never fails; these only arise while reading envelopes
/// or preparing a run.
#[derive(Debug, Error)]
pub enum PhasingError {
    #[error("invalid request envelope: {0}")]
    InvalidEnvelope(#[source] serde_json::Error),

    #[error("invalid request envelope on line {line}: {source}")]
    InvalidBatchLine {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("no request envelope found in {0}")]
    EmptyInput(String),

    #[error("input file does not exist: {0}")]
    MissingInput(String),
}
