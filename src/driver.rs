use ariadne::{sources, Color, Label, Report, ReportKind};
use std::io::{self, Write};
use tracing::info;

use crate::args::Args;
use crate::frontend::operands::parse_operands;
use crate::utils::error::{get_code, get_msg, Error};

/// Source id used in diagnostics for the joined command line operands.
pub const SOURCE_ID: &str = "<operands>";

/// Run one invocation: the result (and trace) goes to `out`, diagnostics to
/// `err`. Returns the process exit status.
pub fn run<O: Write, E: Write>(args: &Args, out: &mut O, err: &mut E) -> io::Result<i32> {
    let src = args.source();
    let operands = match parse_operands(&src) {
        Ok(operands) => operands,
        Err(errs) => {
            report(&src, &errs, err)?;
            return Ok(1);
        }
    };

    let values = operands.iter().map(|(n, _)| *n).collect::<Vec<_>>();
    info!(?values, convention = %args.convention, "reducing");

    if args.trace {
        for trace in args.convention.trace(&values) {
            for step in &trace.steps {
                writeln!(out, "{}", step)?;
            }
        }
    }
    writeln!(out, "{}", args.convention.evaluate(&values))?;
    Ok(0)
}

/// Print one ariadne report per error, labelled on the offending span.
pub fn report<W: Write>(src: &str, errs: &[Error<'_>], w: &mut W) -> io::Result<()> {
    let filename = SOURCE_ID.to_string();
    for e in errs {
        let reason = e.to_string();
        Report::build(ReportKind::Error, filename.clone(), e.span().start)
            .with_code(get_code(&reason))
            .with_message(get_msg(&reason))
            .with_label(
                Label::new((filename.clone(), e.span().into_range()))
                    .with_message(get_msg(&reason))
                    .with_color(Color::Red),
            )
            .finish()
            .write(sources([(filename.clone(), src.to_string())]), &mut *w)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn invoke(argv: &[&str]) -> (i32, String, String) {
        let args = Args::try_parse_from(std::iter::once("serge-gcd").chain(argv.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = run(&args, &mut out, &mut err).unwrap();
        (
            status,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_example_result() {
        let (status, out, err) = invoke(&[]);
        assert_eq!(status, 0);
        assert_eq!(out, "6\n");
        assert!(err.is_empty());
    }

    #[test]
    fn prints_trace_before_result() {
        let (status, out, _) = invoke(&["--trace", "gcd(48,", "18)"]);
        assert_eq!(status, 0);
        assert_eq!(out, "a = 48, b = 18\na = 18, b = 12\na = 12, b = 6\na = 6, b = 0\n6\n");
    }

    #[test]
    fn host_convention_keeps_sign() {
        let (_, out, _) = invoke(&["--convention", "host", "48", "-18"]);
        assert_eq!(out, "-6\n");
        let (_, out, _) = invoke(&["48", "-18"]);
        assert_eq!(out, "6\n");
    }

    #[test]
    fn leading_zeros_keep_sign_on_literal() {
        let (status, out, _) = invoke(&["--convention", "host", "-010", "4"]);
        assert_eq!(status, 0);
        assert_eq!(out, "-2\n");

        let (status, out, err) = invoke(&["05"]);
        assert_eq!(status, 1);
        assert!(out.is_empty());
        assert!(err.contains("expected at least two operands, got 1"));
    }

    #[test]
    fn folds_many_operands() {
        let (_, out, _) = invoke(&["100", "75", "40"]);
        assert_eq!(out, "5\n");
    }

    #[test]
    fn reports_bad_operands() {
        let (status, out, err) = invoke(&["5"]);
        assert_eq!(status, 1);
        assert!(out.is_empty());
        assert!(err.contains("expected at least two operands, got 1"));

        let (status, _, err) = invoke(&["18446744073709551616", "2"]);
        assert_eq!(status, 1);
        assert!(err.contains("does not fit in a 64-bit signed integer"));
        assert!(err.contains(SOURCE_ID));

        let (status, _, err) = invoke(&["48", "x"]);
        assert_eq!(status, 1);
        assert!(!err.is_empty());
    }
}
