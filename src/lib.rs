pub mod alphabet;
pub mod code;
pub mod decimal;
pub mod encoder;
pub mod error;
pub mod model;
pub mod precision;
pub mod report;
pub mod segment;

pub use alphabet::{Alphabet, Symbol};
pub use code::Code;
pub use encoder::{EncodeError, Encoder, Encoding, Interval, NarrowingStep};
pub use error::Error;
pub use model::{ModelError, ProbabilityModel, SymbolStat};
pub use precision::Precision;
pub use segment::{Segment, Segments};

/// Count the symbols of a non-empty sequence and derive their probabilities.
pub fn build_model<S, I>(input: I) -> Result<ProbabilityModel<S>, ModelError>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    ProbabilityModel::build(input)
}

/// Partition `[0, 1)` among the symbols of a model, in model order.
pub fn build_segments<S: Symbol>(model: &ProbabilityModel<S>) -> Segments<S> {
    Segments::build(model)
}

/// Encode a sequence against a segment mapping, returning the code and the
/// narrowing trace.
pub fn encode<S, I>(
    segments: &Segments<S>,
    input: I,
) -> Result<(Code, Vec<NarrowingStep<S>>), EncodeError<S>>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let encoding = Encoder::new(segments.clone()).encode(input)?;
    Ok((encoding.code, encoding.trace))
}

/// Build a model from `input` and encode `input` with it.
pub fn encode_sequence<S: Symbol>(
    input: &[S],
) -> error::Result<(ProbabilityModel<S>, Encoding<S>), S> {
    let model = build_model(input.iter().copied())?;
    let encoding = Encoder::from_alphabet(&model).encode(input.iter().copied())?;
    Ok((model, encoding))
}
