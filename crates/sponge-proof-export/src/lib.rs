//! Sponge proof exporter — turns binary proof artifacts into hex JSON payloads.
//!
//! Each circuit directory holds a raw `target/proof` blob and a
//! `target/public_inputs` file made of 32-byte field elements. This crate
//! encodes both as `0x`-prefixed hex, writes `target/proof.json` next to them,
//! and hands the records back so a caller can aggregate them into one report.

pub mod encode;
pub mod error;
pub mod export;
pub mod public_inputs;

pub use encode::to_hex;
pub use error::{ExportError, Result};
pub use export::{
    export_all, export_directory, CircuitArtifacts, CircuitExport, ExportConfig, ExportReport,
    DEFAULT_CIRCUITS, OUTPUT_FILE, PROOF_FILE, PUBLIC_INPUTS_FILE, TARGET_DIR,
};
pub use public_inputs::{encode_public_inputs, read_public_inputs, FIELD_ELEMENT_SIZE};
