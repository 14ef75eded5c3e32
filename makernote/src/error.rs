use makernote_common::math::MathError;
use makernote_common::{Tag, ValueKind};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Tag {tag} holds a {actual} value that cannot be read as {expected}")]
    WrongType {
        tag: Tag,
        expected: &'static str,
        actual: ValueKind,
    },
    #[error("Math: {0}")]
    Math(#[from] MathError),
    #[cfg(feature = "chrono")]
    #[error("Tag {tag} value '{value}' is not a known date format")]
    InvalidDateTime { tag: Tag, value: String },
}

pub(crate) trait ResultExt<T> {
    fn e(self, err: impl FnOnce() -> Error) -> Result<T>;
}

impl<T> ResultExt<T> for Option<T> {
    fn e(self, err: impl FnOnce() -> Error) -> Result<T> {
        match self {
            Some(v) => Ok(v),
            None => Err(err()),
        }
    }
}
