use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::private_asset_record::PrivateAssetRecordV1;
use crate::util::aliases::AssetResult;

/// The restricted partition holding confidential asset records.  Reads are subject to the
/// partition's own membership policy, independently of any check made by the caller.
pub trait PrivateDataRepository {
    /// Writes a confidential record.  The record never enters the public store or its history.
    fn put_private(&self, record: &PrivateAssetRecordV1) -> AssetResult<()>;

    /// Reads a confidential record on behalf of the caller, failing with
    /// [AccessDenied](crate::core::error::ContractError::AccessDenied) for non-members and
    /// [PrivateDataNotFound](crate::core::error::ContractError::PrivateDataNotFound) when no record
    /// was ever written.
    fn get_private<S: Into<String>>(
        &self,
        caller: &CallerIdentity,
        asset_id: S,
    ) -> AssetResult<PrivateAssetRecordV1>;
}
