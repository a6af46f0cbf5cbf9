use thiserror::Error;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Unexpected end of input, expected an integer")]
    UnexpectedEof,

    #[error("Expected an integer, but got '{got}'")]
    ExpectedInt { got: char },

    #[error("Integer literal is out of range")]
    IntOutOfRange,
}

/// Consumes the slice until a non-ascii-whitespace character is reached.
pub fn take_ws(bytes: &[u8]) -> &[u8] {
    let mut i = bytes.len();
    for (j, b) in bytes.iter().enumerate() {
        if b.is_ascii_whitespace() {
            continue;
        }

        i = j;
        break;
    }

    &bytes[i..]
}

/// Takes the next byte from the slice. If none is found, the slice is left as-is.
pub const fn take_1(bytes: &[u8]) -> (Option<u8>, &[u8]) {
    let [b, bytes @ ..] = bytes else {
        return (None, bytes);
    };

    (Some(*b), bytes)
}

/// Like `take_1`, but doesn't consume the byte.
pub const fn peek_1(bytes: &[u8]) -> Option<u8> {
    let [b, _bytes @ ..] = bytes else { return None };

    Some(*b)
}

/// Take a signed decimal integer off the front of the slice.
///
/// A lone `-`, a non-digit, or an empty slice is an error; the slice is
/// advanced past the digits on success.
pub fn take_int(bytes: &[u8]) -> ParseResult<(i64, &[u8])> {
    let (neg, mut rest) = match peek_1(bytes) {
        Some(b'-') => {
            let (_, rest) = take_1(bytes);
            (true, rest)
        }
        Some(_) => (false, bytes),
        None => return Err(ParseError::UnexpectedEof),
    };

    let mut n: i64 = 0;
    let mut digits = 0;

    while let Some(b) = peek_1(rest) {
        if !b.is_ascii_digit() {
            break;
        }

        let (_, r) = take_1(rest);
        rest = r;

        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add(i64::from(b - b'0')))
            .ok_or(ParseError::IntOutOfRange)?;
        digits += 1;
    }

    if digits == 0 {
        return Err(match peek_1(rest) {
            Some(b) => ParseError::ExpectedInt { got: b as char },
            None => ParseError::UnexpectedEof,
        });
    }

    Ok((if neg { -n } else { n }, rest))
}

#[cfg(test)]
mod tests {
    use super::ParseError;
    use super::take_int;
    use super::take_ws;

    #[test]
    fn take_ws_consumes_everything() {
        assert_eq!(take_ws(b" \t\n "), b"");
        assert_eq!(take_ws(b"  5 5"), b"5 5");
    }

    #[test]
    fn take_int_reads_signed_values() {
        assert_eq!(take_int(b"42 7").unwrap(), (42, b" 7".as_slice()));
        assert_eq!(take_int(b"-1\n").unwrap(), (-1, b"\n".as_slice()));
    }

    #[test]
    fn take_int_rejects_non_digits() {
        assert!(matches!(
            take_int(b"x 5"),
            Err(ParseError::ExpectedInt { got: 'x' })
        ));
        assert!(matches!(take_int(b"-"), Err(ParseError::UnexpectedEof)));
        assert!(matches!(take_int(b""), Err(ParseError::UnexpectedEof)));
    }
}
