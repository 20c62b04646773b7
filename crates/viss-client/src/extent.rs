//! Temporal extent decoding and timestamp enumeration.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use tracing::warn;

use crate::error::{VissError, VissResult};
use crate::json::{mandatory_field, optional_field, text_value};
use crate::time::{format_instant, parse_instant};

/// Temporal structure of a VISS dataset.
///
/// The dataset response carries either a fixed-step interval (`begin`,
/// `end` and the wire field `seperator` — the misspelling is part of the
/// API contract) or an explicit list of instants. Exactly one form is
/// present, selected by the presence of `seperator`.
#[derive(Debug, Clone, PartialEq)]
pub enum TemporalExtent {
    /// Fixed-step interval series.
    Stepped {
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
        /// Step between instants in milliseconds; always positive.
        step_millis: i64,
    },
    /// Explicit instant timestamps in array order.
    Instants(Vec<String>),
}

impl TemporalExtent {
    /// Decode a `temporalExtent` JSON node.
    ///
    /// In stepped mode `begin` and `end` are mandatory and must parse as
    /// instants. In list mode `instants` must be an array; elements
    /// without an `instant` field are logged and skipped.
    pub fn from_json(node: &Value) -> VissResult<Self> {
        if let Some(separator) = optional_field(node, "seperator") {
            let begin = mandatory_field(node, "begin")?;
            let end = mandatory_field(node, "end")?;

            let step_millis: i64 = separator.parse().map_err(|_| {
                VissError::InvalidTemporalExtent(format!(
                    "seperator is not a millisecond count: {}",
                    separator
                ))
            })?;
            if step_millis <= 0 {
                return Err(VissError::InvalidTemporalExtent(format!(
                    "seperator must be positive, got {}",
                    step_millis
                )));
            }

            Ok(TemporalExtent::Stepped {
                begin: parse_instant(&begin)?,
                end: parse_instant(&end)?,
                step_millis,
            })
        } else {
            let instants = node
                .get("instants")
                .and_then(Value::as_array)
                .ok_or_else(|| VissError::MissingField {
                    field: "instants".to_string(),
                    node: node.to_string(),
                })?;

            let mut timestamps = Vec::with_capacity(instants.len());
            for element in instants {
                match element.get("instant").and_then(text_value) {
                    Some(timestamp) => timestamps.push(timestamp),
                    None => {
                        warn!(element = %element, "instant entry without 'instant' field, skipping");
                    }
                }
            }

            Ok(TemporalExtent::Instants(timestamps))
        }
    }

    /// Enumerate the timestamps to create visualizers for.
    ///
    /// Stepped mode starts at `begin` and advances by `step_millis` while
    /// the current instant is strictly before `end`, so `end` itself is
    /// never visited and the iteration terminates even when the step does
    /// not evenly divide the interval.
    pub fn timestamps(&self) -> Vec<String> {
        match self {
            TemporalExtent::Stepped {
                begin,
                end,
                step_millis,
            } => {
                let mut timestamps = Vec::new();
                let mut current = *begin;
                while current < *end {
                    timestamps.push(format_instant(&current));
                    current = current + Duration::milliseconds(*step_millis);
                }
                timestamps
            }
            TemporalExtent::Instants(instants) => instants.clone(),
        }
    }
}
