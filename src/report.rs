//! Printable tables of a model, a narrowing trace and a code.

use crate::alphabet::{Alphabet, Symbol};
use crate::decimal::to_fixed;
use crate::encoder::{Encoding, NarrowingStep};
use crate::model::ProbabilityModel;
use crate::precision::Precision;
use std::fmt::{self, Display, Write};

pub fn write_model<S, W>(
    out: &mut W,
    model: &ProbabilityModel<S>,
    precision: &Precision,
) -> fmt::Result
where
    S: Symbol + Display,
    W: Write,
{
    writeln!(out, "Symbol frequencies and probabilities:")?;
    writeln!(out, "Symbol\tCount\tProbability")?;
    for stat in model.stats() {
        let probability = model.probability(&stat.symbol);
        writeln!(
            out,
            "{}\t{}\t{}",
            stat.symbol,
            stat.count,
            to_fixed(&probability, precision.probability_digits)
        )?;
    }
    Ok(())
}

pub fn write_trace<S, W>(
    out: &mut W,
    trace: &[NarrowingStep<S>],
    precision: &Precision,
) -> fmt::Result
where
    S: Symbol + Display,
    W: Write,
{
    writeln!(out, "Encoding steps:")?;
    writeln!(out, "Symbol\tLeft\tRight")?;
    for step in trace {
        writeln!(
            out,
            "{}\t{}\t{}",
            step.symbol,
            to_fixed(&step.left, precision.bound_digits),
            to_fixed(&step.right, precision.bound_digits)
        )?;
    }
    Ok(())
}

pub fn write_code<S, W>(
    out: &mut W,
    encoding: &Encoding<S>,
    precision: &Precision,
) -> fmt::Result
where
    S: Symbol,
    W: Write,
{
    writeln!(out, "Code: {:.*}", precision.code_digits, encoding.code)
}

/// The model table, the trace table and the code, separated by blank lines.
pub fn write_report<S, W>(
    out: &mut W,
    model: &ProbabilityModel<S>,
    encoding: &Encoding<S>,
    precision: &Precision,
) -> fmt::Result
where
    S: Symbol + Display,
    W: Write,
{
    write_model(out, model, precision)?;
    writeln!(out)?;
    write_trace(out, &encoding.trace, precision)?;
    writeln!(out)?;
    write_code(out, encoding, precision)
}

pub fn render<S>(
    model: &ProbabilityModel<S>,
    encoding: &Encoding<S>,
    precision: &Precision,
) -> String
where
    S: Symbol + Display,
{
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_report(&mut out, model, encoding, precision);
    out
}
