//! `SearchTrace`: optional expansion log with a content digest.
//!
//! The trace is the ordered list of expansion events plus the termination
//! label. Serializing it to canonical JSON and hashing the bytes gives a
//! digest that two runs share exactly when they made the same decisions,
//! which is how determinism is checked across runs and seeds.
//!
//! # Canonical form
//!
//! `serde_json::Map` is backed by a `BTreeMap` (the `preserve_order`
//! feature is not enabled), so object keys are emitted sorted, and
//! `serde_json::to_vec` writes the compact form.

use sha2::{Digest, Sha256};

use crate::node::NodeId;
use crate::search::Termination;

/// Schema tag embedded in every serialized trace.
pub const TRACE_SCHEMA: &str = "cairn.search_trace.v1";

/// One node expansion.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandEvent {
    /// Total order of expansions within the run.
    pub order: u64,
    /// Arena index of the expanded node.
    pub node: usize,
    pub depth: u32,
    /// Evaluation of the node when it was expanded.
    pub f: f64,
    /// Arena indices of the generated successors, in action order.
    pub children: Vec<usize>,
}

/// The complete expansion log of one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchTrace {
    pub algorithm: String,
    pub events: Vec<ExpandEvent>,
    /// Termination label, set when the search finishes.
    pub termination: Option<String>,
}

impl SearchTrace {
    #[must_use]
    pub fn new(algorithm: &str) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            events: Vec::new(),
            termination: None,
        }
    }

    pub(crate) fn record(&mut self, node: NodeId, depth: u32, f: f64, children: &[NodeId]) {
        self.events.push(ExpandEvent {
            order: self.events.len() as u64,
            node: node.index(),
            depth,
            f,
            children: children.iter().map(|c| c.index()).collect(),
        });
    }

    pub(crate) fn finish(&mut self, termination: &Termination) {
        self.termination = Some(termination.label().to_string());
    }

    /// Convert to a `serde_json::Value`.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "algorithm": self.algorithm,
            "events": self.events.iter().map(event_to_json).collect::<Vec<_>>(),
            "schema": TRACE_SCHEMA,
            "termination": self.termination,
        })
    }

    /// Serialize to canonical JSON bytes (sorted keys, compact).
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(&self.to_json_value())
    }

    /// `"sha256:<hex>"` digest of the canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if serialization fails.
    pub fn digest(&self) -> Result<String, serde_json::Error> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(format!("sha256:{}", hex::encode(Sha256::digest(&bytes))))
    }
}

fn event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "children": e.children,
        "depth": e.depth,
        "f": e.f,
        "node": e.node,
        "order": e.order,
    })
}
