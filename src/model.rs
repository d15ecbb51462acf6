use crate::alphabet::{Alphabet, Symbol};
use num::BigRational;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Occurrence statistics of one distinct symbol of the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolStat<S: Symbol> {
    pub symbol: S,
    pub count: usize,
    /// Position of the first occurrence in the input.
    pub first_index: usize,
}

impl<S: Symbol> SymbolStat<S> {
    /// The canonical model order: descending by count, then ascending by
    /// first occurrence. No two stats of one input compare equal.
    pub fn canonical_cmp(&self, other: &Self) -> Ordering {
        other
            .count
            .cmp(&self.count)
            .then(self.first_index.cmp(&other.first_index))
    }
}

/// Errors that can occur while building a model
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("cannot build a model from an empty sequence")]
    EmptyInput,
}

/// Symbol probabilities derived from observed frequencies, in canonical
/// order. The probability of each symbol is `count / len` exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbabilityModel<S: Symbol> {
    stats: Vec<SymbolStat<S>>,
    index: HashMap<S, usize>,
    len: usize,
}

impl<S: Symbol> ProbabilityModel<S> {
    /// Count the symbols of a sequence and order them canonically.
    pub fn build<I>(input: I) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = S>,
    {
        let mut input = input.into_iter().peekable();
        if input.peek().is_none() {
            return Err(ModelError::EmptyInput);
        }

        let mut stats: Vec<SymbolStat<S>> = Vec::new();
        let mut index: HashMap<S, usize> = HashMap::new();
        let mut len = 0;

        for (position, symbol) in input.enumerate() {
            match index.get(&symbol) {
                Some(&i) => stats[i].count += 1,
                None => {
                    index.insert(symbol, stats.len());
                    stats.push(SymbolStat {
                        symbol,
                        count: 1,
                        first_index: position,
                    });
                }
            }
            len = position + 1;
        }

        stats.sort_by(SymbolStat::canonical_cmp);
        let index = stats
            .iter()
            .enumerate()
            .map(|(i, stat)| (stat.symbol, i))
            .collect();

        log::debug!(
            "built model over {len} symbols with {} distinct",
            stats.len()
        );
        Ok(Self { stats, index, len })
    }

    /// Per-symbol statistics in canonical order.
    pub fn stats(&self) -> &[SymbolStat<S>] {
        &self.stats
    }

    pub fn stat(&self, symbol: &S) -> Option<&SymbolStat<S>> {
        self.index.get(symbol).map(|&i| &self.stats[i])
    }

    /// Length of the sequence the model was built from.
    pub fn len(&self) -> usize {
        self.len
    }

    /// A model is never built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct symbols.
    pub fn distinct(&self) -> usize {
        self.stats.len()
    }

    /// The (symbol, probability) pairs in canonical order.
    pub fn probabilities(&self) -> impl Iterator<Item = (S, BigRational)> + '_ {
        self.stats
            .iter()
            .map(|stat| (stat.symbol, self.probability(&stat.symbol)))
    }
}

impl<S: Symbol> Alphabet for ProbabilityModel<S> {
    type S = S;

    fn symbols(&self) -> impl Iterator<Item = &S> {
        self.stats.iter().map(|stat| &stat.symbol)
    }

    fn interval_width(&self, symbol: &S) -> usize {
        self.stat(symbol).map_or(0, |stat| stat.count)
    }

    fn total_interval_width(&self) -> usize {
        self.len
    }
}
