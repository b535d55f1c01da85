use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum OverlayError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [serde_json] failed to parse layout input
    Json(#[from] serde_json::Error),

    #[error("font has no glyph for {ch:?}")]
    /// The font cannot measure or encode a character
    MissingGlyph { ch: char },

    #[error("value at `{path}` must be a string or an object, found {found}")]
    /// Untyped layout input contained a value that is neither a paragraph nor a group
    InvalidNode { path: String, found: &'static str },
}
