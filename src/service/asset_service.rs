use std::cell::RefCell;

use cosmwasm_std::Addr;

use crate::core::state::{may_load_asset, save_asset_with_history, PRIVATE_ASSETS, STATE_V1};
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::private_asset_record::PrivateAssetRecordV1;
use crate::core::types::transaction_context::TransactionContext;
use crate::engine::private_data_partition::read_from_collection;
use crate::util::aliases::{AssetResult, DepsMutC};

use super::asset_repository::AssetRepository;
use super::deps_manager::DepsManager;
use super::identity_provider::{resolve_registered_caller, IdentityProvider};
use super::private_data_repository::PrivateDataRepository;

/// Ties the storage-backed collaborators of the engine together over a single held
/// [DepsMutC](crate::util::aliases::DepsMutC).  The deps sit in a cell so that the repository,
/// partition and identity traits can all work through a shared reference within one route.
pub struct AssetService<'a> {
    deps_cell: RefCell<DepsMutC<'a>>,
}
impl<'a> AssetService<'a> {
    pub fn new(deps: DepsMutC<'a>) -> Self {
        Self {
            deps_cell: RefCell::new(deps),
        }
    }
}
impl<'a> AssetRepository for AssetService<'a> {
    fn try_get_asset<S: Into<String>>(&self, asset_id: S) -> AssetResult<Option<AssetV1>> {
        let asset_id: String = asset_id.into();
        self.use_deps(|d| may_load_asset(d.storage, &asset_id))
    }

    fn save_asset(
        &self,
        asset: &AssetV1,
        tx: &TransactionContext,
    ) -> AssetResult<AssetHistoryEntry> {
        self.use_deps(|d| save_asset_with_history(d.storage, asset, &tx.commit_id))
    }
}
impl<'a> PrivateDataRepository for AssetService<'a> {
    fn put_private(&self, record: &PrivateAssetRecordV1) -> AssetResult<()> {
        self.use_deps(|d| {
            PRIVATE_ASSETS
                .save(d.storage, &record.asset_id, record)
                .map_err(|e| e.into())
        })
    }

    fn get_private<S: Into<String>>(
        &self,
        caller: &CallerIdentity,
        asset_id: S,
    ) -> AssetResult<PrivateAssetRecordV1> {
        let asset_id: String = asset_id.into();
        self.use_deps(|d| {
            let collection = STATE_V1.load(d.storage)?.private_collection;
            let record = PRIVATE_ASSETS.may_load(d.storage, &asset_id)?;
            read_from_collection(&collection, caller, &asset_id, record)
        })
    }
}
impl<'a> IdentityProvider for AssetService<'a> {
    fn resolve_caller(
        &self,
        sender: &Addr,
        operation: AssetOperation,
    ) -> AssetResult<CallerIdentity> {
        self.use_deps(|d| resolve_registered_caller(d.storage, sender, operation))
    }
}
impl<'a> DepsManager for AssetService<'a> {
    fn use_deps<T, F>(&self, mut deps_fn: F) -> T
    where
        F: FnMut(&mut DepsMutC) -> T,
    {
        deps_fn(&mut self.deps_cell.borrow_mut())
    }
}
