use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::RejectAsset](crate::core::msg::ExecuteMsg::RejectAsset)
/// for ease of use in the underlying [reject_asset](self::reject_asset) function.
///
/// # Parameters
///
/// * `asset_id` The id of the asset under review.
/// * `reason` Free text explaining the rejection.  Kept in the asset's approvals until the next
/// submission, and in its history permanently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RejectAssetV1 {
    pub asset_id: String,
    pub reason: String,
}
impl RejectAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_id: S1, reason: S2) -> Self {
        RejectAssetV1 {
            asset_id: asset_id.into(),
            reason: reason.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<RejectAssetV1> {
        match msg {
            ExecuteMsg::RejectAsset { asset_id, reason } => {
                RejectAssetV1::new(asset_id, reason).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::RejectAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::RejectAsset](crate::core::msg::ExecuteMsg::RejectAsset)
/// message is provided.  A single rejection from any required role rejects the asset outright.
pub fn reject_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: RejectAssetV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::Reject { reason: msg.reason },
        EventType::RejectAsset,
    )
}
