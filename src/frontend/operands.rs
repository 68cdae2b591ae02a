use chumsky::prelude::*;

use crate::utils::error::{
    reason, Error, ParserError, Span, Spanned, LITERAL_OUT_OF_RANGE, TOO_FEW_OPERANDS,
};

/// Operand text: `48 18`, `48, 18, 27` or `gcd(48, 18)`. Literals come back
/// unconverted so range errors can point at them exactly.
pub fn operands<'src>(
) -> impl Parser<'src, &'src str, Vec<Spanned<&'src str>>, ParserError<'src, char>> {
    // Any run of digits, leading zeros included; `str::parse` does the conversion.
    let digits = any::<&'src str, ParserError<'src, char>>()
        .filter(|c: &char| c.is_ascii_digit())
        .repeated()
        .at_least(1);

    let int = just('-')
        .or(just('+'))
        .or_not()
        .then(digits)
        .map_slice(|lit: &'src str| lit)
        .map_with_span(|lit, span| (lit, span))
        .padded();

    let list = int
        .separated_by(just(',').padded().or_not())
        .allow_trailing()
        .collect::<Vec<_>>();

    let call = text::keyword("gcd")
        .padded()
        .ignore_then(list.clone().delimited_by(just('(').padded(), just(')').padded()));

    call.or(list).then_ignore(end())
}

/// Parse operand text into `i64` values and require at least two of them.
pub fn parse_operands(src: &str) -> Result<Vec<Spanned<i64>>, Vec<Error<'_>>> {
    let (literals, errs) = operands().parse(src).into_output_errors();
    let literals = match literals {
        Some(literals) if errs.is_empty() => literals,
        _ => return Err(errs),
    };

    let mut values = Vec::with_capacity(literals.len());
    let mut errs = Vec::new();
    for (lit, span) in literals {
        match lit.parse::<i64>() {
            Ok(n) => values.push((n, span)),
            Err(_) => {
                errs.push(Rich::custom(span, reason(LITERAL_OUT_OF_RANGE, &[&lit])))
            }
        }
    }
    if !errs.is_empty() {
        return Err(errs);
    }
    if values.len() < 2 {
        let span = Span::new(0, src.len());
        return Err(vec![Rich::custom(span, reason(TOO_FEW_OPERANDS, &[&values.len()]))]);
    }
    Ok(values)
}
