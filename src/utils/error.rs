use chumsky::prelude::{extra, Rich, SimpleSpan};

pub type Span = SimpleSpan<usize>;
pub type ParserError<'a, T> = extra::Err<Rich<'a, T, Span>>;
pub type Spanned<T> = (T, Span);
pub type Error<'a> = Rich<'a, char, Span>;

/// Reason codes understood by [`get_code`] and [`get_msg`].
pub const LITERAL_OUT_OF_RANGE: &str = "00";
pub const TOO_FEW_OPERANDS: &str = "01";

/// Build a coded reason string: `code$arg$arg$`. The trailing separator keeps
/// anything the error's `Display` appends out of the last argument.
pub fn reason(code: &str, args: &[&dyn ToString]) -> String {
    let mut raw = String::from(code);
    raw.push('$');
    for arg in args {
        raw.push_str(&arg.to_string());
        raw.push('$');
    }
    raw
}

pub fn get_code(reason_str: &str) -> String {
    let mut raw = reason_str.split('$');
    match raw.next() {
        Some(code) if reason_str.contains('$') => match u8::from_str_radix(code, 16) {
            Ok(0x00..=0x01) => code.to_string(),
            Ok(_) => "XX".to_string(),
            Err(_) => 'X'.to_string(),
        },
        _ => 'X'.to_string(),
    }
}

pub fn get_msg(reason_str: &str) -> String {
    if !reason_str.contains('$') {
        return reason_str.to_string();
    }
    let mut raw = reason_str.split('$');
    let code = raw.next().unwrap_or_default();
    let default = format!("error code {} wrong: argument 1", code);
    match code {
        "00" => raw.next().map_or(default, |lit|
                format!("integer literal {} does not fit in a 64-bit signed integer", lit)),
        "01" => raw.next().map_or(default, |got|
                format!("expected at least two operands, got {}", got)),
        _ => format!("unknown error {}", reason_str),
    }
}
