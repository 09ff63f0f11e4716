use cosmwasm_std::{to_json_binary, Binary};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::state::load_asset;
use crate::core::types::asset_operation::AssetOperation;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::contract_helpers::resolve_query_caller;

/// A query that fetches a single public [AssetV1](crate::core::types::asset::AssetV1) record.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_id` The unique identifier of the asset.
/// * `caller` The asserted address of a registered participant.
/// * `include_deleted` When true, a soft-deleted asset is returned instead of being reported as not
/// found.
pub fn query_asset<S1: Into<String>, S2: Into<String>>(
    deps: &DepsC,
    asset_id: S1,
    caller: S2,
    include_deleted: Option<bool>,
) -> AssetResult<Binary> {
    resolve_query_caller(deps, caller, AssetOperation::Read)?;
    let asset_id: String = asset_id.into();
    let asset = load_asset(deps.storage, &asset_id)?;
    if asset.is_deleted() && !include_deleted.unwrap_or(false) {
        return ContractError::AssetNotFound { asset_id }.to_err();
    }
    to_json_binary(&asset)?.to_ok()
}
