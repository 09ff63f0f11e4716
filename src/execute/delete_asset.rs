use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// for ease of use in the underlying [delete_asset](self::delete_asset) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteAssetV1 {
    pub asset_id: String,
}
impl DeleteAssetV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        DeleteAssetV1 {
            asset_id: asset_id.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteAssetV1> {
        match msg {
            ExecuteMsg::DeleteAsset { asset_id } => DeleteAssetV1::new(asset_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::DeleteAsset](crate::core::msg::ExecuteMsg::DeleteAsset)
/// message is provided.  Marks the asset deleted.  The record and its history stay in storage, and
/// the history gains a delete entry.  Any private record is left in place.
pub fn delete_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: DeleteAssetV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::Delete,
        EventType::DeleteAsset,
    )
}
