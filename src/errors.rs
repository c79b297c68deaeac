use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum GeometryError {
    #[error("Malformed WKT, {message} at {remainder:?}")]
    Parse { message: String, remainder: String },

    #[error("Cannot construct geometry: {0}")]
    Construction(String),

    #[error("Index {index} out of range for {len} elements")]
    Index { index: isize, len: usize },

    #[error("Degenerate input: zero-length direction vector")]
    DegenerateInput,
}

impl GeometryError {
    pub(crate) fn parse(message: impl Into<String>, remainder: &str) -> Self {
        GeometryError::Parse {
            message: message.into(),
            remainder: remainder.to_string(),
        }
    }

    pub(crate) fn construction(message: impl Into<String>) -> Self {
        GeometryError::Construction(message.into())
    }
}
