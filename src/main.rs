use clap::Parser;
use exact_arithmetic_coding::error::Result;
use exact_arithmetic_coding::{Precision, encode_sequence, report};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "exact-arithmetic-coding")]
#[command(about = "Arithmetic-code a line of text as an exact rational")]
struct Args {
    /// Text to encode; read from stdin when omitted.
    text: Option<String>,

    #[arg(long, default_value_t = Precision::DEFAULT_PROBABILITY_DIGITS)]
    probability_digits: usize,

    #[arg(long, default_value_t = Precision::DEFAULT_BOUND_DIGITS)]
    bound_digits: usize,

    #[arg(long, default_value_t = Precision::DEFAULT_CODE_DIGITS)]
    code_digits: usize,
}

fn read_line() -> io::Result<String> {
    eprint!("Text to encode: ");
    io::stderr().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn run(args: Args) -> Result<(), char> {
    let text = match args.text {
        Some(text) => text,
        None => read_line()?,
    };
    let symbols: Vec<char> = text.trim().chars().collect();

    let precision = Precision::default()
        .with_probability_digits(args.probability_digits)
        .with_bound_digits(args.bound_digits)
        .with_code_digits(args.code_digits);

    let (model, encoding) = encode_sequence(&symbols)?;

    match encoding.min_code_digits() {
        Some(needed) if needed > precision.code_digits => log::warn!(
            "code needs {needed} digits to identify the input, printing {}",
            precision.code_digits
        ),
        _ => {}
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(report::render(&model, &encoding, &precision).as_bytes())?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
