//! Token reader: whitespace-separated literals, consumed to end of stream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ut_core::{ExactRational, SampleSet};

use crate::{looks_like_url_strict, IoError, IoResult};

/// Parse every whitespace-separated token of `text`, in input order.
pub fn parse_tokens(text: &str) -> IoResult<Vec<ExactRational>> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<ExactRational>().map_err(|source| IoError::Parse {
                index: i + 1,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}

/// Read the whole stream, parse it, and sort into a `SampleSet`.
pub fn read_sample<R: Read>(mut reader: R) -> IoResult<SampleSet> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let values = parse_tokens(&text)?;
    tracing::debug!(n = values.len(), bytes = text.len(), "sample read");
    Ok(SampleSet::from_unsorted(values))
}

/// Read a sample from a local file.
pub fn load_sample_from_path(path: &Path) -> IoResult<SampleSet> {
    let shown = path.display().to_string();
    if looks_like_url_strict(&shown) {
        return Err(IoError::Path(format!("URLs are not allowed (offline only): {shown}")));
    }
    let file = File::open(path).map_err(|e| IoError::Path(format!("{shown}: {e}")))?;
    read_sample(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn q(s: &str) -> ExactRational {
        s.parse().unwrap()
    }

    #[test]
    fn splits_on_any_whitespace() {
        let v = parse_tokens("0.5\t0.25\n\n  1/3\r\n-0.1 ").unwrap();
        assert_eq!(v, vec![q("1/2"), q("1/4"), q("1/3"), q("-1/10")]);
    }

    #[test]
    fn empty_stream_is_empty_sample() {
        let s = read_sample("   \n\t".as_bytes()).unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn sorts_after_reading() {
        let s = read_sample("0.9 0.1 0.5".as_bytes()).unwrap();
        assert_eq!(s.as_slice(), &[q("0.1"), q("0.5"), q("0.9")]);
    }

    #[test]
    fn malformed_token_reports_position() {
        let err = read_sample("0.1 0.2 zero 0.4".as_bytes()).unwrap_err();
        match err {
            IoError::Parse { index, token, .. } => {
                assert_eq!(index, 3);
                assert_eq!(token, "zero");
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn non_utf8_is_read_error() {
        let bytes: &[u8] = &[0x30, 0x2e, 0x35, 0x20, 0xff, 0xfe];
        assert!(matches!(read_sample(bytes), Err(IoError::Read(_))));
    }

    #[test]
    fn loads_local_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "0.75 0.25").unwrap();
        let s = load_sample_from_path(f.path()).unwrap();
        assert_eq!(s.as_slice(), &[q("0.25"), q("0.75")]);
    }

    #[test]
    fn rejects_urls_and_missing_files() {
        assert!(matches!(
            load_sample_from_path(Path::new("https://example.org/sample.txt")),
            Err(IoError::Path(_))
        ));
        assert!(matches!(
            load_sample_from_path(Path::new("file:sample.txt")),
            Err(IoError::Path(_))
        ));
        assert!(matches!(
            load_sample_from_path(Path::new("/definitely/not/here.txt")),
            Err(IoError::Path(_))
        ));
    }
}
