//! Error types for the worker protocol and its channels

use thiserror::Error;

use crate::sim::ShapeType;

/// Errors raised while decoding or applying worker messages.
#[derive(Error, Debug)]
pub enum BridgeError {
    /// `addBodies` carried a different number of props and UUIDs.
    #[error("batch length mismatch: {props} props for {uuids} uuids")]
    BatchLengthMismatch {
        /// Number of body props in the batch.
        props: usize,
        /// Number of UUIDs in the batch.
        uuids: usize,
    },

    /// A shape could not be built from the supplied arguments.
    #[error("{shape:?} shape is missing required argument `{arg}`")]
    MissingShapeArg {
        /// Shape being built.
        shape: ShapeType,
        /// Argument that was absent or empty.
        arg: &'static str,
    },

    /// Normal axis index outside 0..=2.
    #[error("invalid normal index {0} (expected 0, 1 or 2)")]
    InvalidNormalIndex(u8),

    /// Message or options payload was not valid JSON for its schema.
    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    /// The other side of a worker channel hung up.
    #[error("worker channel disconnected")]
    Disconnected,

    /// The worker thread could not be started.
    #[error("failed to start worker thread: {0}")]
    Spawn(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
