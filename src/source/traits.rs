use crate::models::PropertyRecord;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for all listing collection sources
/// This keeps the query engine independent of where records come from
/// (hosted store, local fixture, future sources)
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the full listing collection
    async fn fetch_all(&self) -> Result<Vec<PropertyRecord>>;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}
