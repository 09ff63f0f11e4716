use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::ApproveAsset](crate::core::msg::ExecuteMsg::ApproveAsset)
/// for ease of use in the underlying [approve_asset](self::approve_asset) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApproveAssetV1 {
    pub asset_id: String,
}
impl ApproveAssetV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        ApproveAssetV1 {
            asset_id: asset_id.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<ApproveAssetV1> {
        match msg {
            ExecuteMsg::ApproveAsset { asset_id } => ApproveAssetV1::new(asset_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ApproveAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::ApproveAsset](crate::core::msg::ExecuteMsg::ApproveAsset)
/// message is provided.  Records the approval of the sender's role.  The emitted status attribute
/// reads `approved` when this was the final required approval.
///
/// # Parameters
///
/// * `service` The storage-backed service wrapping the contract's deps.
/// * `env` An environment object provided by the cosmwasm framework.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the approve asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn approve_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: ApproveAssetV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::Approve,
        EventType::ApproveAsset,
    )
}
