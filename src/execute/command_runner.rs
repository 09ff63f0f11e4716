use cosmwasm_std::{to_json_binary, Env, MessageInfo, Response};
use result_extensions::ResultExtensions;

use crate::core::state::STATE_V1;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_history_entry::AssetHistoryEntry;
use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::transaction_context::TransactionContext;
use crate::engine::asset_state_machine::{apply_command, AssetCommand};
use crate::service::asset_repository::AssetRepository;
use crate::service::asset_service::AssetService;
use crate::service::deps_manager::DepsManager;
use crate::service::identity_provider::IdentityProvider;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};

/// The outcome of a committed asset command.
pub struct CommittedAsset {
    pub asset: AssetV1,
    pub caller: CallerIdentity,
    pub history_entry: AssetHistoryEntry,
}

/// Resolves the sender, applies the command to the currently stored record and persists the
/// result along with its history entry.  Nothing is written if any step fails.
///
/// # Parameters
///
/// * `service` The storage-backed service wrapping the contract's deps.
/// * `env` The environment provided by the cosmwasm framework.  Supplies the block time and the
/// commit id.
/// * `info` The message info provided by the cosmwasm framework.  Supplies the verified sender.
/// * `asset_id` The id of the targeted asset.
/// * `command` The requested change.
pub fn commit_asset_command(
    service: &AssetService,
    env: &Env,
    info: &MessageInfo,
    asset_id: &str,
    command: AssetCommand,
) -> AssetResult<CommittedAsset> {
    check_funds_are_empty(info)?;
    let caller = service.resolve_caller(&info.sender, command.operation())?;
    let policy = service.use_deps(|d| STATE_V1.load(d.storage))?.role_policy;
    let tx = TransactionContext::from_env(env);
    let current = service.try_get_asset(asset_id)?;
    let asset = apply_command(&policy, &caller, asset_id, current, command, &tx)?;
    let history_entry = service.save_asset(&asset, &tx)?;
    CommittedAsset {
        asset,
        caller,
        history_entry,
    }
    .to_ok()
}

/// Builds the standard response for a committed asset command: the event attributes describing the
/// change, and the new record as the response data.
pub fn asset_event_response(event_type: EventType, committed: &CommittedAsset) -> EntryPointResponse {
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(event_type, &committed.asset.asset_id)
                .set_status(committed.asset.status)
                .set_caller_role(&committed.caller.role)
                .set_new_value(committed.history_entry.sequence),
        )
        .set_data(to_json_binary(&committed.asset)?)
        .to_ok()
}

/// Commits the command and responds with the standard asset event.
pub fn run_asset_command(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    asset_id: &str,
    command: AssetCommand,
    event_type: EventType,
) -> EntryPointResponse {
    let committed = commit_asset_command(&service, &env, &info, asset_id, command)?;
    asset_event_response(event_type, &committed)
}
