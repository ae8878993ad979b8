/*!
# Error types for the masking engine

The engine either returns a well-formed `MaskOutput` or a single
descriptive error. Degradable conditions (unknown language tags, error
nodes in the parse tree, unknown whitespace modes) never surface here;
they fall back inside the pipeline instead.
*/

use thiserror::Error;

/// Result of masking operations.
pub type MaskResult<T> = Result<T, MaskError>;

/// Errors surfaced by the masking engine.
#[derive(Error, Debug)]
pub enum MaskError {
    /// The grammar library was rejected by tree-sitter (ABI mismatch).
    #[error("failed to load tree-sitter grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// tree-sitter returned no tree. Parsing in-memory input without a
    /// timeout or cancellation flag is not expected to fail this way.
    #[error("parser produced no syntax tree")]
    ParseFailed,

    /// An edit span computed by the engine does not fit the source
    /// buffer. Indicates a bug in span collection, not a data problem.
    #[error("invalid edit span {start}..{end} for source of {len} bytes")]
    InvalidSpan { start: usize, end: usize, len: usize },

    /// Rebuilding produced a byte sequence that is not valid UTF-8.
    /// Replacement aliases are ASCII and untouched gaps are copied from
    /// valid UTF-8 input, so this also indicates a bug.
    #[error("masked output is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// File-reading convenience paths only.
    #[error("failed to read source: {0}")]
    Io(#[from] std::io::Error),
}
