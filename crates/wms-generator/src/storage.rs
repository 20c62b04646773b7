//! Storage seam for persisting the uploaded complex value.

use async_trait::async_trait;
use bytes::Bytes;

/// Store for complex result values, implemented by the host framework.
///
/// Persists `data` under `identifier` and returns the public URL of the
/// stored resource. Calls are not idempotent; the generator mints a fresh
/// identifier per invocation and identifiers are never reused.
#[async_trait]
pub trait ComplexValueStore: Send + Sync {
    async fn store(
        &self,
        identifier: &str,
        data: Bytes,
        type_tag: &str,
        mime_type: &str,
    ) -> anyhow::Result<String>;
}
