use crate::format::{FormatId, FormatRegistry};

/// Everything that can go wrong when parsing a format selector token
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("zero-length symbol")]
    EmptySymbol,

    #[error("symbol `{0}` not found")]
    SymbolNotFound(String),

    #[error("only numeric value allowed")]
    NumericOnlyExpected,
}

/// Resolve a format selector, either a symbolic name or a numeric literal
///
/// Trailing text after the token is ignored; use [`parse_symbol`] to keep
/// parsing from the same input.
pub fn resolve_format(token: &str, registry: &FormatRegistry) -> Result<FormatId, ParseError> {
    let (value, _) = parse_symbol(token, Some(registry))?;

    Ok(FormatId(value))
}

/// Consume one symbol token from the front of `input`
///
/// If the token starts with a digit it is taken as a numeric literal in the
/// `strtol` base-0 convention (decimal, `0x` hex, leading-zero octal).
/// Otherwise the longest alphanumeric/underscore run is looked up in
/// `registry`; with no registry only numeric tokens are accepted.
///
/// Returns the resolved value and the unconsumed remainder of `input`.
pub fn parse_symbol<'a>(
    input: &'a str,
    registry: Option<&FormatRegistry>,
) -> Result<(u32, &'a str), ParseError> {
    let bytes = input.as_bytes();

    if bytes.first().is_some_and(u8::is_ascii_digit) {
        return parse_numeric(input);
    }

    let end = bytes
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
        .unwrap_or(bytes.len());

    if end == 0 {
        return Err(ParseError::EmptySymbol);
    }

    let (token, rest) = input.split_at(end);

    let registry = registry.ok_or(ParseError::NumericOnlyExpected)?;

    match registry.by_name(token) {
        Some(id) => Ok((id.0, rest)),
        None => Err(ParseError::SymbolNotFound(token.to_owned())),
    }
}

fn parse_numeric(input: &str) -> Result<(u32, &str), ParseError> {
    let (radix, digits) = match input.as_bytes() {
        [b'0', b'x' | b'X', rest @ ..] if rest.first().is_some_and(u8::is_ascii_hexdigit) => {
            (16, &input[2..])
        }
        [b'0', ..] => (8, input),
        _ => (10, input),
    };

    let end = digits
        .bytes()
        .position(|b| !b.is_ascii() || !(b as char).is_digit(radix))
        .unwrap_or(digits.len());

    // First char is known to be a digit, so at least "0" is consumed
    debug_assert!(end > 0);

    let value = u32::from_str_radix(&digits[..end], radix).unwrap_or(u32::MAX);

    Ok((value, &digits[end..]))
}
