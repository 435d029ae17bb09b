//! Public inputs: a flat file of 32-byte field elements.

use std::{fs, path::Path};

use crate::{encode::to_hex, ExportError, Result};

/// Size in bytes of one encoded field element.
pub const FIELD_ELEMENT_SIZE: usize = 32;

/// Read a public inputs file and hex-encode each field element in file order.
pub fn read_public_inputs(path: &Path) -> Result<Vec<String>> {
    let bytes = fs::read(path).map_err(|e| ExportError::io(path, e))?;
    tracing::debug!(path = %path.display(), len = bytes.len(), "read public inputs");
    encode_public_inputs(path, &bytes)
}

/// Split `bytes` into field elements. `path` is only used for error reporting.
pub fn encode_public_inputs(path: &Path, bytes: &[u8]) -> Result<Vec<String>> {
    if bytes.len() % FIELD_ELEMENT_SIZE != 0 {
        return Err(ExportError::MalformedInput {
            path: path.to_path_buf(),
            len: bytes.len(),
        });
    }
    Ok(bytes.chunks_exact(FIELD_ELEMENT_SIZE).map(to_hex).collect())
}
