//! Result payload probing and Failed-job error parsing.
//!
//! Result documents are provider-shaped JSON; rather than model every
//! provider schema this module probes the few fields the engine consumes
//! and degrades to `None` when a payload lacks them.

use serde::{Deserialize, Serialize};

use crate::error::HalResult;

/// Result document returned for a `Succeeded` job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobResults(pub serde_json::Value);

impl JobResults {
    /// Wrap a raw result document.
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Cost of the first reported solution, when the payload carries one.
    pub fn first_cost(&self) -> Option<f64> {
        self.0
            .get("solutions")
            .and_then(|s| s.get(0))
            .and_then(|s| s.get("cost"))
            .and_then(serde_json::Value::as_f64)
    }

    /// Parameter set the solver actually ran with.
    ///
    /// 1QBit payloads carry it under `input_params`, Microsoft payloads
    /// under `parameters`.
    pub fn applied_params(&self) -> Option<&serde_json::Value> {
        self.0
            .get("input_params")
            .or_else(|| self.0.get("parameters"))
    }
}

/// Error payload attached to a `Failed` job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorData {
    /// Service error code.
    pub code: Option<String>,
    /// Human-readable message.
    pub message: Option<String>,
}

impl ErrorData {
    /// Parse the string-encoded error payload of a `Failed` job.
    ///
    /// The service hands the payload back as a single-quoted printed map,
    /// so every single quote is rewritten to a double quote before JSON
    /// parsing. Single quotes inside the code or message are rewritten
    /// too; payloads that still fail to parse return the JSON error.
    pub fn parse(raw: &str) -> HalResult<Self> {
        let repaired = raw.replace('\'', "\"");
        Ok(serde_json::from_str(&repaired)?)
    }
}
