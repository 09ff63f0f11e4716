use cosmwasm_std::{Addr, Storage};
use cw_storage_plus::{Index, IndexList, IndexedMap, Item, Map, MultiIndex};
use result_extensions::ResultExtensions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::participant::ParticipantV1;
use crate::core::types::private_asset_record::PrivateAssetRecordV1;
use crate::core::types::private_collection::PrivateCollectionConfig;
use crate::core::types::role_policy::RolePolicy;
use crate::util::aliases::AssetResult;

const STATE_V1_KEY: &str = "state_v1";
const PARTICIPANTS_NAMESPACE: &str = "participants";
const ASSETS_NAMESPACE: &str = "assets";
const ASSETS_STATUS_INDEX_NAMESPACE: &str = "assets__status";
const ASSETS_OWNER_INDEX_NAMESPACE: &str = "assets__owner";
const ASSET_HISTORY_NAMESPACE: &str = "asset_history";
const ASSET_HISTORY_SEQUENCE_NAMESPACE: &str = "asset_history_sequence";
const PRIVATE_ASSETS_NAMESPACE: &str = "private_assets";

/// The contract's configuration, stored once at instantiation.
///
/// # Parameters
///
/// * `admin` The address that instantiated the contract.  The only address allowed to manage the
/// participant registry.
/// * `role_policy` The injected role configuration that drives all access decisions.
/// * `private_collection` The membership configuration of the private partition.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct StateV1 {
    pub admin: Addr,
    pub role_policy: RolePolicy,
    pub private_collection: PrivateCollectionConfig,
}
impl StateV1 {
    pub fn new(msg: &InitMsg, admin: Addr) -> StateV1 {
        StateV1 {
            admin,
            role_policy: msg.role_policy.to_owned(),
            private_collection: msg.private_collection.to_owned(),
        }
    }
}

pub const STATE_V1: Item<StateV1> = Item::new(STATE_V1_KEY);

/// The participant registry.  Maps each verified sender address to the role and organization
/// label it has been granted.
pub const PARTICIPANTS: Map<&Addr, ParticipantV1> = Map::new(PARTICIPANTS_NAMESPACE);

/// Every committed version of every asset, keyed by asset id and the 1-based history sequence.
pub const ASSET_HISTORY: Map<(&str, u64), AssetHistoryEntry> = Map::new(ASSET_HISTORY_NAMESPACE);

/// The latest history sequence written for each asset id.
pub const ASSET_HISTORY_SEQUENCE: Map<&str, u64> = Map::new(ASSET_HISTORY_SEQUENCE_NAMESPACE);

/// The private partition.  Kept in its own namespace and never indexed.
pub const PRIVATE_ASSETS: Map<&str, PrivateAssetRecordV1> = Map::new(PRIVATE_ASSETS_NAMESPACE);

/// Secondary indexes over the public asset records, used for selector-based listing.
pub struct AssetIndexes<'a> {
    pub status: MultiIndex<'a, String, AssetV1, String>,
    pub owner: MultiIndex<'a, String, AssetV1, String>,
}
impl<'a> IndexList<AssetV1> for AssetIndexes<'a> {
    fn get_indexes(&'_ self) -> Box<dyn Iterator<Item = &'_ dyn Index<AssetV1>> + '_> {
        let v: Vec<&dyn Index<AssetV1>> = vec![&self.status, &self.owner];
        Box::new(v.into_iter())
    }
}

/// The public asset records, keyed by asset id.
pub fn assets<'a>() -> IndexedMap<'a, &'a str, AssetV1, AssetIndexes<'a>> {
    let indexes = AssetIndexes {
        status: MultiIndex::new(
            |_pk, asset: &AssetV1| asset.status.as_str().to_string(),
            ASSETS_NAMESPACE,
            ASSETS_STATUS_INDEX_NAMESPACE,
        ),
        owner: MultiIndex::new(
            |_pk, asset: &AssetV1| asset.owner_fingerprint.to_owned(),
            ASSETS_NAMESPACE,
            ASSETS_OWNER_INDEX_NAMESPACE,
        ),
    };
    IndexedMap::new(ASSETS_NAMESPACE, indexes)
}

/// Loads an asset by id, returning None if no record has ever been created with the id.
///
/// # Parameters
///
/// * `storage` A reference to the contract's internal storage.
/// * `asset_id` The unique identifier of the asset.
pub fn may_load_asset<S: Into<String>>(
    storage: &dyn Storage,
    asset_id: S,
) -> AssetResult<Option<AssetV1>> {
    let asset_id = asset_id.into();
    assets().may_load(storage, asset_id.as_str())?.to_ok()
}

/// Loads an asset by id, returning an [AssetNotFound](crate::core::error::ContractError::AssetNotFound)
/// error if no record exists.
///
/// # Parameters
///
/// * `storage` A reference to the contract's internal storage.
/// * `asset_id` The unique identifier of the asset.
pub fn load_asset<S: Into<String>>(storage: &dyn Storage, asset_id: S) -> AssetResult<AssetV1> {
    let asset_id = asset_id.into();
    match may_load_asset(storage, &asset_id)? {
        Some(asset) => asset.to_ok(),
        None => ContractError::AssetNotFound { asset_id }.to_err(),
    }
}

/// Writes the asset record and appends exactly one entry to its history in the same call.
/// Returns the appended entry.
///
/// # Parameters
///
/// * `storage` A mutable reference to the contract's internal storage.
/// * `asset` The full asset value to persist.
/// * `commit_id` The identifier of the committing transaction.
pub fn save_asset_with_history<S: Into<String>>(
    storage: &mut dyn Storage,
    asset: &AssetV1,
    commit_id: S,
) -> AssetResult<AssetHistoryEntry> {
    let asset_id = asset.asset_id.as_str();
    assets().save(storage, asset_id, asset)?;
    let sequence = ASSET_HISTORY_SEQUENCE
        .may_load(storage, asset_id)?
        .unwrap_or_default()
        + 1;
    let entry = AssetHistoryEntry {
        commit_id: commit_id.into(),
        sequence,
        timestamp: asset.updated_at,
        is_delete: asset.is_deleted(),
        value: if asset.is_deleted() {
            None
        } else {
            Some(asset.to_owned())
        },
    };
    ASSET_HISTORY.save(storage, (asset_id, sequence), &entry)?;
    ASSET_HISTORY_SEQUENCE.save(storage, asset_id, &sequence)?;
    entry.to_ok()
}
