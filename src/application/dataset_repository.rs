// Repository trait for dataset access
use crate::domain::record::Dataset;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only handle to the process-lifetime dataset. Implementations
/// must hand out the same immutable dataset for every call.
#[async_trait]
pub trait DatasetRepository: Send + Sync {
    async fn dataset(&self) -> Arc<Dataset>;
}
