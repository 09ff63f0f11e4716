use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::ActivateAsset](crate::core::msg::ExecuteMsg::ActivateAsset)
/// for ease of use in the underlying [activate_asset](self::activate_asset) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivateAssetV1 {
    pub asset_id: String,
}
impl ActivateAssetV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        ActivateAssetV1 {
            asset_id: asset_id.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<ActivateAssetV1> {
        match msg {
            ExecuteMsg::ActivateAsset { asset_id } => ActivateAssetV1::new(asset_id).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ActivateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::ActivateAsset](crate::core::msg::ExecuteMsg::ActivateAsset)
/// message is provided.  Only the owner of an approved asset may activate it.
pub fn activate_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: ActivateAssetV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::Activate,
        EventType::ActivateAsset,
    )
}
