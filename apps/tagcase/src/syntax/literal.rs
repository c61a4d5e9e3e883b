//! Go string literal decoding.

/// Decode a Go string literal (raw `` `...` `` or interpreted `"..."`).
///
/// Returns `None` when the literal is malformed. Raw literals drop carriage
/// returns; interpreted literals honor the Go escape set. Byte escapes that
/// do not form valid UTF-8 are replaced lossily.
pub fn unquote(lit: &str) -> Option<String> {
    let bytes = lit.as_bytes();
    if bytes.len() < 2 {
        return None;
    }
    let quote = bytes[0];
    if !matches!(quote, b'`' | b'"') || bytes[bytes.len() - 1] != quote {
        return None;
    }
    let inner = &lit[1..lit.len() - 1];
    if quote == b'"' {
        return unescape(inner);
    }
    if inner.contains('`') {
        return None;
    }
    Some(inner.replace('\r', ""))
}

fn unescape(inner: &str) -> Option<String> {
    if !inner.contains('\\') {
        if inner.contains('"') || inner.contains('\n') {
            return None;
        }
        return Some(inner.to_string());
    }
    let mut out: Vec<u8> = Vec::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\n' => return None,
            '\\' => {
                let esc = chars.next()?;
                match esc {
                    'a' => out.push(0x07),
                    'b' => out.push(0x08),
                    'f' => out.push(0x0c),
                    'n' => out.push(b'\n'),
                    'r' => out.push(b'\r'),
                    't' => out.push(b'\t'),
                    'v' => out.push(0x0b),
                    '\\' => out.push(b'\\'),
                    '"' => out.push(b'"'),
                    'x' => out.push(read_radix(&mut chars, 2, 16)? as u8),
                    '0'..='7' => {
                        let rest = read_radix(&mut chars, 2, 8)?;
                        let v = (esc as u32 - '0' as u32) * 64 + rest;
                        if v > 0xff {
                            return None;
                        }
                        out.push(v as u8);
                    }
                    'u' => push_char(&mut out, read_radix(&mut chars, 4, 16)?)?,
                    'U' => push_char(&mut out, read_radix(&mut chars, 8, 16)?)?,
                    _ => return None,
                }
            }
            _ => {
                let mut buf = [0u8; 4];
                out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            }
        }
    }
    Some(String::from_utf8_lossy(&out).into_owned())
}

fn read_radix(chars: &mut std::str::Chars<'_>, digits: usize, radix: u32) -> Option<u32> {
    let mut v: u32 = 0;
    for _ in 0..digits {
        let d = chars.next()?.to_digit(radix)?;
        v = v * radix + d;
    }
    Some(v)
}

fn push_char(out: &mut Vec<u8>, code: u32) -> Option<()> {
    let c = char::from_u32(code)?;
    let mut buf = [0u8; 4];
    out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    Some(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_literal_strips_backticks_and_cr() {
        assert_eq!(
            unquote("`json:\"id\"\r`").as_deref(),
            Some("json:\"id\"")
        );
    }

    #[test]
    fn test_interpreted_literal_escapes() {
        assert_eq!(
            unquote(r#""json:\"userName\"""#).as_deref(),
            Some(r#"json:"userName""#)
        );
        assert_eq!(unquote(r#""a\tb\x41\101é""#).as_deref(), Some("a\tbAAé"));
    }

    #[test]
    fn test_malformed_literals_are_rejected() {
        assert_eq!(unquote("\"abc"), None);
        assert_eq!(unquote(r#""bad \q escape""#), None);
        assert_eq!(unquote(r#""a"b""#), None);
        assert_eq!(unquote("x"), None);
        assert_eq!(unquote(r#""\400""#), None);
    }
}
