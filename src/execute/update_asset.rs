use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// for ease of use in the underlying [update_asset](self::update_asset) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateAssetV1 {
    pub asset_id: String,
    pub description: String,
}
impl UpdateAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(asset_id: S1, description: S2) -> Self {
        UpdateAssetV1 {
            asset_id: asset_id.into(),
            description: description.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateAssetV1> {
        match msg {
            ExecuteMsg::UpdateAsset {
                asset_id,
                description,
            } => UpdateAssetV1::new(asset_id, description).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::UpdateAsset](crate::core::msg::ExecuteMsg::UpdateAsset)
/// message is provided.  Replaces the description of an asset that is created or rejected.  The
/// status and approvals are left untouched.
pub fn update_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: UpdateAssetV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::Update {
            description: msg.description,
        },
        EventType::UpdateAsset,
    )
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::Timestamp;

    use crate::core::error::ContractError;
    use crate::core::state::load_asset;
    use crate::core::types::asset_status::AssetStatus;
    use crate::service::asset_service::AssetService;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_AUDITOR_ADDRESS, DEFAULT_OWNER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, test_approve_default_asset_fully, test_create_default_asset,
        test_instantiate_success, test_reject_default_asset, test_submit_default_asset, InstArgs,
    };

    use super::{update_asset, UpdateAssetV1};

    #[test]
    fn test_update_rejected_asset_keeps_status() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        test_submit_default_asset(deps.as_mut());
        test_reject_default_asset(deps.as_mut(), DEFAULT_AUDITOR_ADDRESS, "missing docs");
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(env.block.time.seconds() + 60);
        update_asset(
            AssetService::new(deps.as_mut()),
            env.clone(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            UpdateAssetV1::new(DEFAULT_ASSET_ID, "fixed desc"),
        )
        .expect("updating a rejected asset should succeed");
        let asset = load_asset(deps.as_ref().storage, DEFAULT_ASSET_ID).unwrap();
        assert_eq!("fixed desc", asset.description);
        assert_eq!(AssetStatus::Rejected, asset.status);
        assert_eq!(env.block.time, asset.updated_at);
        assert_ne!(
            asset.created_at, asset.updated_at,
            "the creation time should never move"
        );
    }

    #[test]
    fn test_update_approved_asset_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_approve_default_asset_fully(&mut deps);
        let error = update_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            UpdateAssetV1::new(DEFAULT_ASSET_ID, "too late"),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            ContractError::InvalidStateTransition {
                current: AssetStatus::Approved,
                requested: AssetStatus::Approved,
                ..
            }
        ));
    }

    #[test]
    fn test_update_missing_asset_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let error = update_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            UpdateAssetV1::new("missing", "desc"),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::AssetNotFound { .. }));
    }
}
