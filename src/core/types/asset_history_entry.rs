use cosmwasm_std::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset::AssetV1;

/// A single committed version of an asset.  One entry is appended for every successful
/// mutating operation.
///
/// # Parameters
///
/// * `commit_id` Identifies the committing transaction as `{block height}:{transaction index}`.
/// * `sequence` The 1-based position of the entry within the asset's history.
/// * `timestamp` The block time of the committing transaction.
/// * `is_delete` True when the entry records the asset's deletion.
/// * `value` The full asset snapshot.  Omitted for delete entries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AssetHistoryEntry {
    pub commit_id: String,
    pub sequence: u64,
    pub timestamp: Timestamp,
    pub is_delete: bool,
    pub value: Option<AssetV1>,
}
