use crate::alphabet::Symbol;
use crate::encoder::EncodeError;
use crate::model::ModelError;

/// Any failure of the model-then-encode pipeline.
#[derive(thiserror::Error, Debug)]
pub enum Error<S: Symbol> {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Encode(#[from] EncodeError<S>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, S> = std::result::Result<T, Error<S>>;
