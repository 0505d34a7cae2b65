//! Line-oriented series loader with zero-allocation float parsing.
//!
//! Input is a stream of numbers separated by whitespace, commas or
//! semicolons, any number per line. `#` starts a comment that runs to the
//! end of the line. The tokens `nan`, `null` and `-` (any case) mark a
//! missing sample and become `f64::NAN`.

use std::io::{BufRead, BufReader, Read};

use thiserror::Error;

#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseSeriesError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid number '{0}'")]
    BadFloat(String),
    #[error("value '{0}' is not finite")]
    NotFinite(String),
}

// --- Helpers ---
#[inline]
fn is_separator(b: u8) -> bool {
    b.is_ascii_whitespace() || b == b',' || b == b';'
}

#[inline]
fn is_missing(token: &[u8]) -> bool {
    token == b"-" || token.eq_ignore_ascii_case(b"nan") || token.eq_ignore_ascii_case(b"null")
}

#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if r + 2 < buf.len() && buf[r] == 0xE2 && buf[r + 1] == 0x88 && buf[r + 2] == 0x92 {
            buf[w] = b'-';
            r += 3;
            w += 1;
        } else {
            if r != w {
                buf[w] = buf[r];
            }
            r += 1;
            w += 1;
        }
    }
    buf.truncate(w);
}

#[inline]
fn parse_sample(bytes: &[u8], line: usize) -> Result<f64, ParseSeriesError> {
    if is_missing(bytes) {
        return Ok(f64::NAN);
    }
    let text = || String::from_utf8_lossy(bytes).into_owned();
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| ParseSeriesError {
        line,
        kind: ParseErrorKind::BadFloat(text()),
    })?;
    if val.is_finite() {
        Ok(val)
    } else {
        Err(ParseSeriesError {
            line,
            kind: ParseErrorKind::NotFinite(text()),
        })
    }
}

const BUF_CAP: usize = 1 << 16; // 64 KiB

/// Read every sample from `src`, in order.
pub fn read_series<R: Read>(src: R) -> Result<Vec<f64>, ParseSeriesError> {
    let mut rdr = BufReader::with_capacity(BUF_CAP, src);
    let mut buf = Vec::<u8>::with_capacity(256);
    let mut series = Vec::<f64>::new();
    let mut line_no = 0usize;

    loop {
        buf.clear();
        let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseSeriesError {
            line: line_no,
            kind: ParseErrorKind::Io(e),
        })?;
        if n == 0 {
            break;
        }
        line_no += 1;

        if let Some(hash) = buf.iter().position(|&b| b == b'#') {
            buf.truncate(hash);
        }
        normalize_unicode_minus(&mut buf);

        for token in buf.split(|&b| is_separator(b)).filter(|t| !t.is_empty()) {
            series.push(parse_sample(token, line_no)?);
        }
    }
    Ok(series)
}

/// `-` reads stdin.
pub fn read_series_from_path(path: &str) -> Result<Vec<f64>, ParseSeriesError> {
    if path == "-" {
        read_series(std::io::stdin().lock())
    } else {
        use std::fs::File;
        read_series(File::open(path).map_err(|e| ParseSeriesError {
            line: 0,
            kind: ParseErrorKind::Io(e),
        })?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixed_separators_and_comments() {
        let src = "# header\n1, 2;3\n 4\t5 # trailing\n\n6\n";
        let s = read_series(src.as_bytes()).unwrap();
        assert_eq!(s, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn missing_tokens_become_nan() {
        let s = read_series("1 NaN null - 2".as_bytes()).unwrap();
        assert_eq!(s.len(), 5);
        assert!(s[1].is_nan() && s[2].is_nan() && s[3].is_nan());
        assert_eq!(s[4], 2.0);
    }

    #[test]
    fn unicode_minus_is_accepted() {
        let s = read_series("\u{2212}1.5 2".as_bytes()).unwrap();
        assert_eq!(s, vec![-1.5, 2.0]);
    }

    #[test]
    fn bad_token_reports_line() {
        let err = read_series("1\n2\nabc\n".as_bytes()).unwrap_err();
        assert_eq!(err.line, 3);
        assert!(matches!(err.kind, ParseErrorKind::BadFloat(ref t) if t == "abc"));
    }

    #[test]
    fn empty_input_is_empty_series() {
        assert!(read_series("".as_bytes()).unwrap().is_empty());
    }
}
