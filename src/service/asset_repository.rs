use crate::core::types::asset::AssetV1;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::asset_status::AssetStatus;
use crate::core::types::transaction_context::TransactionContext;
use crate::util::aliases::AssetResult;

/// The selector used when listing assets.  Every field narrows the result.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetListFilter {
    pub status: Option<AssetStatus>,
    pub owner_fingerprint: Option<String>,
    pub start_after: Option<String>,
    pub limit: Option<u32>,
}

/// The versioned store of public asset records.
pub trait AssetRepository {
    /// Fetches the asset with the given id, or None if it was never created.
    fn try_get_asset<S: Into<String>>(&self, asset_id: S) -> AssetResult<Option<AssetV1>>;

    /// Persists the full asset value and appends exactly one history entry for it, tagged with
    /// the transaction's commit id.
    fn save_asset(
        &self,
        asset: &AssetV1,
        tx: &TransactionContext,
    ) -> AssetResult<AssetHistoryEntry>;
}
