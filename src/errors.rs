//! Error types with diagnostic codes via miette.

use miette::Diagnostic;
use thiserror::Error;

/// Errors surfaced by the public API.
///
/// The geometry itself is infallible; only the configuration boundary can
/// fail (parsing an orientation string, validating an explicit surface
/// size).
#[derive(Error, Diagnostic, Debug)]
pub enum PitchError {
    #[error("unknown orientation: {value:?}")]
    #[diagnostic(
        code(bfpitch::unknown_orientation),
        help("expected \"horizontal\" or \"vertical\"")
    )]
    UnknownOrientation { value: String },

    #[error("invalid surface size: {width} x {height}")]
    #[diagnostic(
        code(bfpitch::invalid_size),
        help("both dimensions must be finite and positive")
    )]
    InvalidSize { width: f64, height: f64 },
}
