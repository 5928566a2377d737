use std::fs;
use std::path::Path;

use log::debug;
use yamlite_common::{YamlError, YamlResult};

/// Reads a whole resource into memory, ready for tokenization.
///
/// Open and read failures come back as [`YamlError::Io`]; a failed read
/// never reaches the tokenizer. The scanner treats the final byte of its
/// input as trailing slack, so files are expected to end with a newline
/// (as text files written by editors do).
pub fn read_file<P: AsRef<Path>>(path: P) -> YamlResult<Vec<u8>> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(bytes) => {
            debug!("read {} bytes from {}", bytes.len(), path.display());
            Ok(bytes)
        }
        Err(err) => Err(YamlError::Io(format!("{}: {err}", path.display()))),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let result = read_file("no/such/config.yaml");
    assert!(matches!(result, Err(YamlError::Io(_))));
}
