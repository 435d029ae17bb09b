//! Per-circuit export of `target/proof` and `target/public_inputs` to
//! `target/proof.json`, plus the sequential batch run over several circuits.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{encode::to_hex, public_inputs::read_public_inputs, ExportError, Result};

pub const TARGET_DIR: &str = "target";
pub const PROOF_FILE: &str = "proof";
pub const PUBLIC_INPUTS_FILE: &str = "public_inputs";
pub const OUTPUT_FILE: &str = "proof.json";

/// Circuits exported when none are named explicitly.
pub const DEFAULT_CIRCUITS: [&str; 3] = ["deposit", "transfer", "withdraw"];

/// Exported proof payload for verifier test fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CircuitExport {
    pub proof: String,
    pub public_inputs: Vec<String>,
}

/// Artifact locations under a circuit directory.
#[derive(Debug, Clone)]
pub struct CircuitArtifacts {
    pub dir: PathBuf,
    pub proof: PathBuf,
    pub public_inputs: PathBuf,
    pub output: PathBuf,
}

impl CircuitArtifacts {
    pub fn resolve(dir: &Path) -> Self {
        let target = dir.join(TARGET_DIR);
        Self {
            dir: dir.to_path_buf(),
            proof: target.join(PROOF_FILE),
            public_inputs: target.join(PUBLIC_INPUTS_FILE),
            output: target.join(OUTPUT_FILE),
        }
    }

    /// Names of the input artifacts that are not present as files.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.proof.is_file() {
            missing.push(PROOF_FILE);
        }
        if !self.public_inputs.is_file() {
            missing.push(PUBLIC_INPUTS_FILE);
        }
        missing
    }
}

/// Export one circuit directory: encode its artifacts, write `target/proof.json`
/// (overwriting any previous file) and return the record.
pub fn export_directory(dir: &Path) -> Result<CircuitExport> {
    let artifacts = CircuitArtifacts::resolve(dir);

    let missing = artifacts.missing();
    if !missing.is_empty() {
        return Err(ExportError::MissingArtifact {
            dir: artifacts.dir,
            missing,
        });
    }

    let proof = fs::read(&artifacts.proof).map_err(|e| ExportError::io(&artifacts.proof, e))?;
    tracing::debug!(path = %artifacts.proof.display(), len = proof.len(), "read proof");

    let exported = CircuitExport {
        proof: to_hex(&proof),
        public_inputs: read_public_inputs(&artifacts.public_inputs)?,
    };

    write_json(&artifacts.output, &exported)?;
    tracing::info!(
        path = %artifacts.output.display(),
        public_inputs = exported.public_inputs.len(),
        "wrote proof payload"
    );

    Ok(exported)
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let encoded = serde_json::to_vec_pretty(value)?;
    fs::write(path, encoded).map_err(|e| ExportError::io(path, e))
}

/// Which circuits to export and where their directories live.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub base_dir: PathBuf,
    pub circuits: Vec<String>,
}

impl ExportConfig {
    /// An empty `circuits` list falls back to [`DEFAULT_CIRCUITS`].
    pub fn new(base_dir: impl Into<PathBuf>, circuits: Vec<String>) -> Self {
        let circuits = if circuits.is_empty() {
            DEFAULT_CIRCUITS.iter().map(|c| c.to_string()).collect()
        } else {
            circuits
        };
        Self {
            base_dir: base_dir.into(),
            circuits,
        }
    }

    pub fn circuit_dir(&self, circuit: &str) -> PathBuf {
        self.base_dir.join(circuit)
    }
}

/// Records keyed by circuit name, serialized as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    entries: Vec<(String, CircuitExport)>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. A repeated name keeps its original position.
    pub fn insert(&mut self, circuit: impl Into<String>, exported: CircuitExport) {
        let circuit = circuit.into();
        match self.entries.iter_mut().find(|(name, _)| *name == circuit) {
            Some((_, slot)) => *slot = exported,
            None => self.entries.push((circuit, exported)),
        }
    }

    pub fn get(&self, circuit: &str) -> Option<&CircuitExport> {
        self.entries
            .iter()
            .find(|(name, _)| name == circuit)
            .map(|(_, exported)| exported)
    }

    pub fn circuits(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ExportReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, exported) in &self.entries {
            map.serialize_entry(name, exported)?;
        }
        map.end()
    }
}

/// Export every configured circuit in order, stopping at the first failure.
pub fn export_all(config: &ExportConfig) -> Result<ExportReport> {
    let mut report = ExportReport::new();
    for circuit in &config.circuits {
        let dir = config.circuit_dir(circuit);
        tracing::debug!(circuit = %circuit, dir = %dir.display(), "exporting circuit");
        let exported = export_directory(&dir)?;
        report.insert(circuit.as_str(), exported);
    }
    Ok(report)
}
