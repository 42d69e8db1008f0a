//! Domain-specific errors for the status renderer

use thiserror::Error;

/// Errors surfaced by the renderer.
///
/// The renderer performs no I/O of its own beyond the terminal; a failed
/// terminal write is fatal for the session and propagates rather than being
/// swallowed.
#[derive(Error, Debug)]
pub enum RenderError {
    /// Writing to the terminal failed
    #[error("terminal write failed: {0}")]
    Io(#[from] std::io::Error),
}
