use thiserror::Error;

use crate::storage::AdapterError;

/// Failures on the persistence path of a store operation.
///
/// Bootstrap read/decode failures never surface as errors; they are logged
/// and treated as "no data" for that key.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Adapter(#[from] AdapterError),
    #[error("failed to encode record for {key}: {source}")]
    Encode {
        key: String,
        source: serde_json::Error,
    },
}
