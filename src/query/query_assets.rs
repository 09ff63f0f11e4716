use cosmwasm_std::{to_json_binary, Binary, Order, StdResult, Storage};
use cw_storage_plus::Bound;
use result_extensions::ResultExtensions;

use crate::core::msg::AssetsResponse;
use crate::core::state::assets;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::asset_status::AssetStatus;
use crate::service::asset_repository::AssetListFilter;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::contract_helpers::resolve_query_caller;
use crate::util::functions::query_limit;

/// A query that lists public asset records by selector.  See [list_assets](self::list_assets) for
/// the selection rules.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `caller` The asserted address of a registered participant.
/// * `filter` The selector and pagination values.
pub fn query_assets<S: Into<String>>(
    deps: &DepsC,
    caller: S,
    filter: AssetListFilter,
) -> AssetResult<Binary> {
    resolve_query_caller(deps, caller, AssetOperation::List)?;
    let assets = list_assets(deps.storage, &filter)?;
    to_json_binary(&AssetsResponse { assets })?.to_ok()
}

/// Lists assets in ascending id order, using the status index when a status is selected and the
/// owner index when only an owner is selected.  Deleted assets are skipped unless the filter
/// selects the deleted status.
///
/// # Parameters
///
/// * `storage` A reference to the contract's internal storage.
/// * `filter` The selector and pagination values.
pub fn list_assets(storage: &dyn Storage, filter: &AssetListFilter) -> AssetResult<Vec<AssetV1>> {
    let limit = query_limit(filter.limit);
    let include_deleted = filter.status == Some(AssetStatus::Deleted);
    let asset_map = assets();
    let records: Box<dyn Iterator<Item = StdResult<(String, AssetV1)>> + '_> =
        match (&filter.status, &filter.owner_fingerprint) {
            (Some(status), _) => asset_map.idx.status.prefix(status.to_string()).range(
                storage,
                filter.start_after.to_owned().map(Bound::exclusive),
                None,
                Order::Ascending,
            ),
            (None, Some(owner)) => asset_map.idx.owner.prefix(owner.to_owned()).range(
                storage,
                filter.start_after.to_owned().map(Bound::exclusive),
                None,
                Order::Ascending,
            ),
            (None, None) => asset_map.range(
                storage,
                filter.start_after.as_deref().map(Bound::exclusive),
                None,
                Order::Ascending,
            ),
        };
    let mut page: Vec<AssetV1> = vec![];
    for record in records {
        let (_, asset) = record?;
        if asset.is_deleted() && !include_deleted {
            continue;
        }
        if let Some(owner) = &filter.owner_fingerprint {
            if &asset.owner_fingerprint != owner {
                continue;
            }
        }
        page.push(asset);
        if page.len() >= limit {
            break;
        }
    }
    page.to_ok()
}
