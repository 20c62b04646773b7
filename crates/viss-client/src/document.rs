//! Time-series result document assembly.

use serde::Serialize;

use crate::error::VissResult;
use crate::time::to_epoch_millis;

/// Insertion-ordered mapping of timestamps to WMS GetMap URLs.
///
/// Duplicate timestamps overwrite in place (last write wins). Iteration
/// order is insertion order, which makes the emitted document
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    entries: Vec<(String, String)>,
}

#[derive(Serialize)]
struct TimeSeriesEntry {
    timestamp: String,
    value: String,
}

#[derive(Serialize)]
struct TimeSeriesDocument {
    values: Vec<TimeSeriesEntry>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the WMS URL for a timestamp, replacing any earlier entry.
    pub fn insert(&mut self, timestamp: String, wms_url: String) {
        if let Some(entry) = self.entries.iter_mut().find(|(t, _)| *t == timestamp) {
            entry.1 = wms_url;
        } else {
            self.entries.push((timestamp, wms_url));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize into the `{"values": [...]}` document, converting each
    /// timestamp to its epoch-millisecond decimal string.
    pub fn to_json(&self) -> VissResult<String> {
        let values = self
            .entries
            .iter()
            .map(|(timestamp, value)| {
                Ok(TimeSeriesEntry {
                    timestamp: to_epoch_millis(timestamp)?,
                    value: value.clone(),
                })
            })
            .collect::<VissResult<Vec<_>>>()?;

        Ok(serde_json::to_string(&TimeSeriesDocument { values })?)
    }
}
