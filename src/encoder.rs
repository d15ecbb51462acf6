use crate::alphabet::{Alphabet, Symbol};
use crate::code::Code;
use crate::segment::{Bounds, Segments};
use num::{BigInt, BigRational, One, Zero};
use std::cmp::Ordering;
use std::iter::Enumerate;

/// Compare by cross-multiplication, without `Ratio`'s continued-fraction
/// walk. Denominators must be positive.
fn cmp_exact(a: &BigRational, b: &BigRational) -> Ordering {
    if a.denom() == b.denom() {
        return a.numer().cmp(b.numer());
    }
    (a.numer() * b.denom()).cmp(&(b.numer() * a.denom()))
}

/// A half-open interval `[left, right)` with exact bounds. Bounds produced
/// by narrowing are not reduced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval {
    pub left: BigRational,
    pub right: BigRational,
}

impl Interval {
    /// `[0, 1)`
    pub fn unit() -> Self {
        Interval {
            left: BigRational::zero(),
            right: BigRational::one(),
        }
    }

    pub fn width(&self) -> BigRational {
        &self.right - &self.left
    }

    pub fn contains(&self, point: &BigRational) -> bool {
        cmp_exact(&self.left, point).is_le() && cmp_exact(point, &self.right).is_lt()
    }

    /// Whether this interval lies within `outer`.
    pub fn is_within(&self, outer: &Interval) -> bool {
        cmp_exact(&outer.left, &self.left).is_le()
            && cmp_exact(&self.right, &outer.right).is_le()
    }

    /// The part of this interval that segment `[c, d)` of `[0, R)` occupies
    /// when `[0, R)` is scaled onto it. Both bounds must share one
    /// denominator D; the result shares D * R and is left unreduced.
    fn narrow(&self, bounds: &Bounds, total: &BigInt) -> Interval {
        debug_assert_eq!(self.left.denom(), self.right.denom());
        let width = self.right.numer() - self.left.numer();
        let base = self.left.numer() * total;
        let denom = self.left.denom() * total;
        Interval {
            left: BigRational::new_raw(&base + &width * &bounds.lower, denom.clone()),
            right: BigRational::new_raw(base + width * &bounds.upper, denom),
        }
    }
}

/// The working interval after one input symbol was incorporated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NarrowingStep<S: Symbol> {
    pub symbol: S,
    pub left: BigRational,
    pub right: BigRational,
}

impl<S: Symbol> NarrowingStep<S> {
    pub fn interval(&self) -> Interval {
        Interval {
            left: self.left.clone(),
            right: self.right.clone(),
        }
    }
}

/// Errors that can occur while encoding
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum EncodeError<S: Symbol> {
    #[error("symbol {symbol:?} at position {position} has no segment")]
    UnknownSymbol { symbol: S, position: usize },
}

/// The result of encoding a whole sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoding<S: Symbol> {
    pub code: Code,
    /// One step per input symbol, in input order.
    pub trace: Vec<NarrowingStep<S>>,
    /// The working interval after the last symbol.
    pub interval: Interval,
}

impl<S: Symbol> Encoding<S> {
    /// Fewest fractional digits that render the code unambiguously.
    pub fn min_code_digits(&self) -> Option<usize> {
        self.code.min_digits(&self.interval)
    }
}

#[derive(Debug, Clone)]
pub struct Encoder<S: Symbol> {
    segments: Segments<S>,
}

/// Lazily narrows the working interval, one input symbol per item. Ends
/// after the input is exhausted or after the first error.
pub struct Narrowing<'e, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    input: Enumerate<I>,
    encoder: &'e Encoder<S>,
    interval: Interval,
    failed: bool,
}

impl<S: Symbol, I: Iterator<Item = S>> Narrowing<'_, S, I> {
    /// The working interval after the symbols consumed so far.
    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn into_interval(self) -> Interval {
        self.interval
    }
}

// Narrowing recurrence
//
// Input Stream: x_1, ..., x_k
// [l_s, r_s): segment of symbol s
//
// a = 0, b = 1
// for i = 1, ..., k
//     if x_i has no segment: fail with (x_i, i - 1)
//     w = b - a
//     b = a + w * r_x_i
//     a = a + w * l_x_i
//     record (x_i, a, b)
// code = (a + b) / 2
//
// With l_s = c_s / R and r_s = d_s / R, a and b after step i are integers
// over R^i, so each step is integer multiply-adds.
impl<S: Symbol, I: Iterator<Item = S>> Iterator for Narrowing<'_, S, I> {
    type Item = Result<NarrowingStep<S>, EncodeError<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let (position, symbol) = self.input.next()?;

        let encoder = self.encoder;
        let segments = &encoder.segments;
        let Some(bounds) = segments.bounds(&symbol) else {
            self.failed = true;
            return Some(Err(EncodeError::UnknownSymbol { symbol, position }));
        };

        self.interval = self.interval.narrow(bounds, segments.total());
        log::trace!(
            "step {position}: {symbol:?} -> [{}, {})",
            self.interval.left,
            self.interval.right
        );

        Some(Ok(NarrowingStep {
            symbol,
            left: self.interval.left.clone(),
            right: self.interval.right.clone(),
        }))
    }
}

impl<S: Symbol, I: Iterator<Item = S>> std::iter::FusedIterator for Narrowing<'_, S, I> where
    Enumerate<I>: std::iter::FusedIterator
{
}

impl<S: Symbol> Encoder<S> {
    /// Create an encoder over the given segment mapping.
    pub fn new(segments: Segments<S>) -> Self {
        Self { segments }
    }

    /// Create an encoder over the partition of the given alphabet.
    pub fn from_alphabet<A>(alphabet: &A) -> Self
    where
        A: Alphabet<S = S>,
    {
        Self::new(Segments::build(alphabet))
    }

    pub fn segments(&self) -> &Segments<S> {
        &self.segments
    }

    /// Narrow `[0, 1)` by each symbol of the input in turn.
    pub fn narrow<I>(&self, input: I) -> Narrowing<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        Narrowing {
            input: input.into_iter().enumerate(),
            encoder: self,
            interval: Interval::unit(),
            failed: false,
        }
    }

    /// Encode a whole sequence. Every symbol must have a segment; the first
    /// one that does not aborts the run and no code is produced.
    pub fn encode<I>(&self, input: I) -> Result<Encoding<S>, EncodeError<S>>
    where
        I: IntoIterator<Item = S>,
    {
        let mut narrowing = self.narrow(input);
        let trace = narrowing.by_ref().collect::<Result<Vec<_>, _>>()?;
        let interval = narrowing.into_interval();
        let code = Code::midpoint(&interval);

        log::debug!("encoded {} symbols as {code}", trace.len());
        Ok(Encoding {
            code,
            trace,
            interval,
        })
    }
}
