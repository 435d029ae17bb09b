//! Error types for proof export.

use std::path::PathBuf;

use crate::public_inputs::FIELD_ELEMENT_SIZE;

pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors raised while exporting a circuit's proof artifacts.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Public inputs file is not a whole number of field elements.
    #[error("public inputs file {} length {len} is not a multiple of {}", .path.display(), FIELD_ELEMENT_SIZE)]
    MalformedInput { path: PathBuf, len: usize },
    /// `proof` or `public_inputs` is absent under the circuit's target directory.
    #[error("expected proof/public_inputs in {}/target (missing: {})", .dir.display(), .missing.join(", "))]
    MissingArtifact {
        dir: PathBuf,
        missing: Vec<&'static str>,
    },
    #[error("i/o error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed encoding json: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_input_names_path_and_length() {
        let err = ExportError::MalformedInput {
            path: PathBuf::from("deposit/target/public_inputs"),
            len: 33,
        };
        assert_eq!(
            err.to_string(),
            "public inputs file deposit/target/public_inputs length 33 is not a multiple of 32"
        );
    }

    #[test]
    fn missing_artifact_lists_each_missing_file() {
        let err = ExportError::MissingArtifact {
            dir: PathBuf::from("circuits/withdraw"),
            missing: vec!["proof", "public_inputs"],
        };
        assert_eq!(
            err.to_string(),
            "expected proof/public_inputs in circuits/withdraw/target (missing: proof, public_inputs)"
        );
    }
}
