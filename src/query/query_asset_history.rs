use cosmwasm_std::{to_json_binary, Binary, Order, Storage};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::AssetHistoryResponse;
use crate::core::state::ASSET_HISTORY;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::asset_operation::AssetOperation;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::contract_helpers::resolve_query_caller;

/// A query that fetches every committed version of an asset, oldest first.  Deleted assets keep
/// their history, which ends with a delete entry.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `asset_id` The unique identifier of the asset.
/// * `caller` The asserted address of a registered participant.
pub fn query_asset_history<S1: Into<String>, S2: Into<String>>(
    deps: &DepsC,
    asset_id: S1,
    caller: S2,
) -> AssetResult<Binary> {
    resolve_query_caller(deps, caller, AssetOperation::History)?;
    let asset_id: String = asset_id.into();
    let history = load_asset_history(deps.storage, &asset_id)?;
    to_json_binary(&AssetHistoryResponse { asset_id, history })?.to_ok()
}

/// Loads the history entries of an asset in sequence order.  An asset that was never created has
/// no history and is reported as not found.
///
/// # Parameters
///
/// * `storage` A reference to the contract's internal storage.
/// * `asset_id` The unique identifier of the asset.
pub fn load_asset_history(
    storage: &dyn Storage,
    asset_id: &str,
) -> AssetResult<Vec<AssetHistoryEntry>> {
    let history = ASSET_HISTORY
        .prefix(asset_id)
        .range(storage, None, None, Order::Ascending)
        .map(|entry| entry.map(|(_, entry)| entry))
        .collect::<Result<Vec<AssetHistoryEntry>, _>>()?;
    if history.is_empty() {
        return ContractError::AssetNotFound {
            asset_id: asset_id.to_string(),
        }
        .to_err();
    }
    history.to_ok()
}
