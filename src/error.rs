use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum ReportError {
    #[error(transparent)]
    /// An I/O error occurred while writing the finished document
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse one of the supplied fonts
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error("{0} requires the document to be initialized first")]
    /// An operation was attempted before [crate::Document::initialize] was called
    InvalidOperation(&'static str),

    #[error("invalid document options: {0}")]
    /// The supplied options cannot produce a usable page
    InvalidArgument(String),
}
