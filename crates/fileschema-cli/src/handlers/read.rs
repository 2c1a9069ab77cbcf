//! Turning file bytes into candidate values

use crate::cli::ReadEncoding;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use fileschema::Value;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read a file and convert its bytes the way `encoding` describes
///
/// `binary` maps every byte to the character with the same code point, so
/// arbitrary content always yields a string.
pub async fn read_candidate(path: &Path, encoding: ReadEncoding, max_file_size: u64) -> Result<Value> {
    let metadata = match tokio::fs::metadata(path).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    if metadata.len() > max_file_size {
        return Err(Error::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit: max_file_size,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    debug!(bytes = bytes.len(), encoding = encoding.as_str(), "File read");

    let value = match encoding {
        ReadEncoding::Utf8 => {
            let text = String::from_utf8(bytes).map_err(|_| Error::InvalidEncoding {
                path: path.to_path_buf(),
                encoding: encoding.as_str().to_string(),
            })?;
            Value::String(text)
        }
        ReadEncoding::Buffer => Value::Buffer(bytes),
        ReadEncoding::Binary => Value::String(bytes.iter().map(|&b| char::from(b)).collect()),
        ReadEncoding::Base64 => Value::String(STANDARD.encode(&bytes)),
    };

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_read_encodings() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.bin", &[b'h', b'i', 0xe9]);

        let buffer = read_candidate(&path, ReadEncoding::Buffer, 1024).await.unwrap();
        assert_eq!(buffer, Value::Buffer(vec![b'h', b'i', 0xe9]));

        let binary = read_candidate(&path, ReadEncoding::Binary, 1024).await.unwrap();
        assert_eq!(binary, Value::from("hi\u{e9}"));

        let encoded = read_candidate(&path, ReadEncoding::Base64, 1024).await.unwrap();
        assert_eq!(encoded, Value::from("aGnp"));
    }

    #[tokio::test]
    async fn test_utf8_rejects_invalid_bytes() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "data.bin", &[0xff, 0xfe]);

        let error = read_candidate(&path, ReadEncoding::Utf8, 1024).await.unwrap_err();
        assert!(matches!(error, Error::InvalidEncoding { .. }));

        let path = write_file(&dir, "text.txt", "café".as_bytes());
        let text = read_candidate(&path, ReadEncoding::Utf8, 1024).await.unwrap();
        assert_eq!(text, Value::from("café"));
    }

    #[tokio::test]
    async fn test_missing_and_oversized() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.txt");
        let error = read_candidate(&missing, ReadEncoding::Utf8, 1024).await.unwrap_err();
        assert!(matches!(error, Error::FileNotFound { .. }));

        let path = write_file(&dir, "big.txt", &[b'a'; 32]);
        let error = read_candidate(&path, ReadEncoding::Utf8, 16).await.unwrap_err();
        assert!(matches!(error, Error::FileTooLarge { size: 32, limit: 16, .. }));
    }
}
