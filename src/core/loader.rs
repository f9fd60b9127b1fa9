use crate::domain::ports::FileSource;
use crate::utils::error::{DataError, Result};
use serde::de::DeserializeOwned;

/// Read a JSON document through the file source and deserialize it.
///
/// Parse failures (malformed JSON) and shape failures (missing envelope
/// key, wrong element types) are reported as distinct errors so callers
/// can tell a corrupt file from a schema drift.
pub(crate) async fn load_document<S, D>(source: &S, path: &str) -> Result<D>
where
    S: FileSource,
    D: DeserializeOwned,
{
    let raw = source.read_to_string(path).await?;

    let value: serde_json::Value =
        serde_json::from_str(&raw).map_err(|e| DataError::Parse {
            path: path.to_string(),
            source: e,
        })?;

    serde_json::from_value(value).map_err(|e| DataError::Validation {
        field: path.to_string(),
        reason: format!("Document does not match the expected schema: {e}"),
    })
}
