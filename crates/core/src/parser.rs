//! Single-pass recursive-descent tokenizer (§4.1).
//!
//! The parser is restartable: it holds no state beyond the byte slice
//! and cursor it is handed, so the same function serves both the
//! top-level call and every nested `[ ... ]`.

use crate::error::{ParseError, excerpt};
use crate::value::Value;

const MAX_NUMBER_DIGITS: usize = 128;

const SYMBOL_PUNCT: &[u8] = b"+-*/%><=:;$";

fn is_symbol_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || SYMBOL_PUNCT.contains(&b)
}

/// Parse `source` into the top-level program list.
///
/// Returns a single [`Value::List`] holding the parsed tokens in
/// source order, or the first [`ParseError`] encountered.
pub fn parse_program(source: &str) -> Result<Value, ParseError> {
    let bytes = source.as_bytes();
    let mut pos = 0;
    let items = parse_body(bytes, &mut pos, None)?;
    Ok(Value::list(items))
}

/// What a [`parse_body`] call is waiting to see before it stops.
///
/// `offset` is the byte position of the opening `[`/`(` that started
/// this body, used to anchor the "unterminated ..." error at the
/// construct that never closed rather than at end-of-input.
struct Terminator {
    byte: u8,
    offset: usize,
}

/// Parse a run of tokens up to `terminator` (or end of input when
/// `terminator` is `None`), consuming the terminator byte if present.
fn parse_body(
    bytes: &[u8],
    pos: &mut usize,
    terminator: Option<Terminator>,
) -> Result<Vec<Value>, ParseError> {
    let mut items = Vec::new();
    loop {
        skip_whitespace(bytes, pos);

        match (bytes.get(*pos).copied(), &terminator) {
            (None, None) => return Ok(items),
            (None, Some(t)) => return Err(unterminated_error_for(t)),
            (Some(b), Some(t)) if b == t.byte => {
                *pos += 1;
                return Ok(items);
            }
            _ => {}
        }

        items.push(parse_token(bytes, pos)?);
    }
}

fn unterminated_error_for(terminator: &Terminator) -> ParseError {
    match terminator.byte {
        b']' => ParseError::UnterminatedList {
            offset: terminator.offset,
        },
        b')' => ParseError::UnterminatedVarSet {
            offset: terminator.offset,
        },
        other => unreachable!("no unterminated-construct error defined for {other:?}"),
    }
}

fn skip_whitespace(bytes: &[u8], pos: &mut usize) {
    while bytes.get(*pos).is_some_and(|b| b.is_ascii_whitespace()) {
        *pos += 1;
    }
}

fn parse_token(bytes: &[u8], pos: &mut usize) -> Result<Value, ParseError> {
    let b = bytes[*pos];
    if b.is_ascii_digit() || (b == b'-' && bytes.get(*pos + 1).is_some_and(u8::is_ascii_digit)) {
        parse_number(bytes, pos)
    } else if b == b'"' {
        parse_string(bytes, pos)
    } else if is_symbol_byte(b) {
        Ok(parse_symbol(bytes, pos))
    } else if b == b'[' {
        parse_list(bytes, pos)
    } else if b == b'(' {
        parse_var_set(bytes, pos)
    } else {
        Err(ParseError::NoMatch {
            offset: *pos,
            excerpt: excerpt(bytes, *pos),
        })
    }
}

fn parse_number(bytes: &[u8], pos: &mut usize) -> Result<Value, ParseError> {
    let start = *pos;
    let negative = bytes[*pos] == b'-';
    if negative {
        *pos += 1;
    }

    let digits_start = *pos;
    while bytes.get(*pos).is_some_and(u8::is_ascii_digit) {
        *pos += 1;
    }
    let digit_count = *pos - digits_start;
    if digit_count > MAX_NUMBER_DIGITS {
        return Err(ParseError::NumberTooLong { offset: start });
    }

    let digits = std::str::from_utf8(&bytes[digits_start..*pos]).expect("ascii digits are utf8");
    let magnitude: i64 = digits.parse().unwrap_or(if negative {
        i64::MIN
    } else {
        i64::MAX
    });
    let value = if negative {
        magnitude.checked_neg().unwrap_or(i64::MIN)
    } else {
        magnitude
    };
    Ok(Value::Int(value))
}

fn parse_string(bytes: &[u8], pos: &mut usize) -> Result<Value, ParseError> {
    let start = *pos;
    *pos += 1; // opening quote
    let content_start = *pos;
    while bytes.get(*pos).is_some_and(|&b| b != b'"') {
        *pos += 1;
    }
    if *pos >= bytes.len() {
        return Err(ParseError::UnterminatedString { offset: start });
    }
    let content =
        std::str::from_utf8(&bytes[content_start..*pos]).expect("source is valid utf8");
    let value = Value::string(content);
    *pos += 1; // closing quote
    Ok(value)
}

fn parse_symbol(bytes: &[u8], pos: &mut usize) -> Value {
    let start = *pos;
    while bytes.get(*pos).copied().is_some_and(is_symbol_byte) {
        *pos += 1;
    }
    let text = std::str::from_utf8(&bytes[start..*pos]).expect("symbol bytes are ascii");
    Value::symbol(text)
}

fn parse_list(bytes: &[u8], pos: &mut usize) -> Result<Value, ParseError> {
    let open = *pos;
    *pos += 1; // '['
    let items = parse_body(
        bytes,
        pos,
        Some(Terminator {
            byte: b']',
            offset: open,
        }),
    )?;
    Ok(Value::list(items))
}

fn parse_var_set(bytes: &[u8], pos: &mut usize) -> Result<Value, ParseError> {
    let start = *pos;
    *pos += 1; // '('
    let mut names = Vec::new();
    loop {
        skip_whitespace(bytes, pos);
        match bytes.get(*pos).copied() {
            None => return Err(ParseError::UnterminatedVarSet { offset: start }),
            Some(b')') => {
                *pos += 1;
                return Ok(Value::var_set(names));
            }
            Some(b) if b.is_ascii_alphanumeric() => {
                let name_start = *pos;
                while bytes.get(*pos).copied().is_some_and(|b| b.is_ascii_alphanumeric()) {
                    *pos += 1;
                }
                let text = std::str::from_utf8(&bytes[name_start..*pos])
                    .expect("alphanumeric bytes are ascii");
                names.push(Value::symbol(text));
            }
            Some(_) => return Err(ParseError::InvalidVarSetByte { offset: *pos }),
        }
    }
}
