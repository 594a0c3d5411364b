use thiserror::Error;

pub type OResult<T> = Result<T, OptionalError>;

#[derive(Error, Debug)]
pub enum OptionalError {
    #[error("could not decode optional payload: {0}")]
    Decode(#[source] serde_json::Error),
    #[error("could not encode optional payload: {0}")]
    Encode(#[source] serde_json::Error),
}

impl OptionalError {
    /// Line and column reported by the JSON decoder, if it tracked one.
    pub fn position(&self) -> Option<(usize, usize)> {
        let err = match self {
            OptionalError::Decode(e) | OptionalError::Encode(e) => e,
        };
        if err.line() == 0 {
            None
        } else {
            Some((err.line(), err.column()))
        }
    }
}
