//! Error types for llap-meta

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid size '{value}': expected a byte count with an optional k/m/g/t/p suffix")]
    InvalidSize { value: String },

    #[error("Size '{value}' does not fit in a signed 64-bit byte count")]
    SizeOverflow { value: String },
}
