use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::activate_asset::{activate_asset, ActivateAssetV1};
use crate::execute::add_participant::{add_participant, AddParticipantV1};
use crate::execute::approve_asset::{approve_asset, ApproveAssetV1};
use crate::execute::create_asset::{create_asset, CreateAssetV1};
use crate::execute::delete_asset::{delete_asset, DeleteAssetV1};
use crate::execute::read_private_asset::{read_private_asset, ReadPrivateAssetV1};
use crate::execute::reject_asset::{reject_asset, RejectAssetV1};
use crate::execute::remove_participant::{remove_participant, RemoveParticipantV1};
use crate::execute::submit_for_approval::{submit_for_approval, SubmitForApprovalV1};
use crate::execute::update_asset::{update_asset, UpdateAssetV1};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_asset::query_asset;
use crate::query::query_asset_history::query_asset_history;
use crate::query::query_assets::query_assets;
use crate::query::query_participant::query_participant;
use crate::query::query_state::query_state;
use crate::query::query_version::query_version;
use crate::service::asset_repository::AssetListFilter;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&deps.as_ref(), &msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[entry_point]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::QueryAsset {
            asset_id,
            caller,
            include_deleted,
        } => query_asset(&deps, asset_id, caller, include_deleted),
        QueryMsg::QueryAssets {
            caller,
            status,
            owner,
            start_after,
            limit,
        } => query_assets(
            &deps,
            caller,
            AssetListFilter {
                status,
                owner_fingerprint: owner,
                start_after,
                limit,
            },
        ),
        QueryMsg::QueryAssetHistory { asset_id, caller } => {
            query_asset_history(&deps, asset_id, caller)
        }
        QueryMsg::QueryParticipant { address } => query_participant(&deps, address),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(deps: DepsMutC, env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::CreateAsset { .. } => create_asset(
            AssetService::new(deps),
            env,
            info,
            CreateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::SubmitForApproval { .. } => submit_for_approval(
            AssetService::new(deps),
            env,
            info,
            SubmitForApprovalV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::ApproveAsset { .. } => approve_asset(
            AssetService::new(deps),
            env,
            info,
            ApproveAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::RejectAsset { .. } => reject_asset(
            AssetService::new(deps),
            env,
            info,
            RejectAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::ActivateAsset { .. } => activate_asset(
            AssetService::new(deps),
            env,
            info,
            ActivateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::UpdateAsset { .. } => update_asset(
            AssetService::new(deps),
            env,
            info,
            UpdateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::DeleteAsset { .. } => delete_asset(
            AssetService::new(deps),
            env,
            info,
            DeleteAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::ReadPrivateAsset { .. } => read_private_asset(
            AssetService::new(deps),
            env,
            info,
            ReadPrivateAssetV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::AddParticipant { .. } => {
            add_participant(deps, info, AddParticipantV1::from_execute_msg(msg)?)
        }
        ExecuteMsg::RemoveParticipant { .. } => {
            remove_participant(deps, info, RemoveParticipantV1::from_execute_msg(msg)?)
        }
    }
}

#[entry_point]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
