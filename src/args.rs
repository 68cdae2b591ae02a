//! Command line interface.

use clap::Parser;

use crate::reducer::Convention;

/// Compute the greatest common divisor of integer operands with the Euclidean algorithm.
#[derive(Debug, Parser)]
#[command(name = "serge-gcd", version)]
pub struct Args {
    /// Operands, e.g. `48 18`, `48, 18, 27` or `gcd(48, 18)`.
    #[arg(default_values = ["48", "18"], allow_negative_numbers = true)]
    pub operands: Vec<String>,

    /// Sign policy: `absolute` reduces |a| and |b|, `host` keeps Rust's signed remainder.
    #[arg(long, default_value_t = Convention::Absolute)]
    pub convention: Convention,

    /// Print every (a, b) pair the loop visits before the result.
    #[arg(long)]
    pub trace: bool,

    /// Extra log directive on top of SERGE_GCD_LOG, e.g. `debug` or `serge_gcd=trace`.
    #[arg(long)]
    pub log_level: Option<String>,
}

impl Args {
    /// Operand text handed to the front end.
    pub fn source(&self) -> String {
        self.operands.join(" ")
    }
}
