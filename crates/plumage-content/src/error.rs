use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ContentError {
    #[error("truncation length {value} is out of range")]
    #[diagnostic(
        code(plumage_content::settings::truncation_length),
        help("Article truncation length must be between {min} and {max} characters.")
    )]
    TruncationLengthOutOfRange { value: u32, min: u32, max: u32 },

    #[error("invalid highlight query {query:?}: {message}")]
    #[diagnostic(
        code(plumage_content::highlight::query),
        help("The highlight query could not be compiled into a matcher.")
    )]
    InvalidHighlight { query: String, message: String },
}
