use cosmwasm_std::{Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::service::asset_service::AssetService;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::run_asset_command;

/// A transformation of [ExecuteMsg::SubmitForApproval](crate::core::msg::ExecuteMsg::SubmitForApproval)
/// for ease of use in the underlying [submit_for_approval](self::submit_for_approval) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitForApprovalV1 {
    pub asset_id: String,
}
impl SubmitForApprovalV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        SubmitForApprovalV1 {
            asset_id: asset_id.into(),
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [SubmitForApproval](crate::core::msg::ExecuteMsg::SubmitForApproval)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<SubmitForApprovalV1> {
        match msg {
            ExecuteMsg::SubmitForApproval { asset_id } => {
                SubmitForApprovalV1::new(asset_id).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SubmitForApproval".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::SubmitForApproval](crate::core::msg::ExecuteMsg::SubmitForApproval)
/// message is provided.  Moves a created or rejected asset owned by the sender into review,
/// resetting every required approval to pending.
///
/// # Parameters
///
/// * `service` The storage-backed service wrapping the contract's deps.
/// * `env` An environment object provided by the cosmwasm framework.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the submit for approval v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn submit_for_approval(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: SubmitForApprovalV1,
) -> EntryPointResponse {
    run_asset_command(
        service,
        env,
        info,
        &msg.asset_id,
        AssetCommand::SubmitForApproval,
        EventType::SubmitForApproval,
    )
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};

    use crate::core::error::ContractError;
    use crate::core::state::load_asset;
    use crate::core::types::asset_status::AssetStatus;
    use crate::service::asset_service::AssetService;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_AUDITOR_ADDRESS, DEFAULT_OWNER_ADDRESS, SECOND_OWNER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_create_default_asset,
        test_instantiate_success, test_reject_default_asset, test_submit_default_asset, InstArgs,
    };
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, ASSET_STATUS_KEY};

    use super::{submit_for_approval, SubmitForApprovalV1};

    #[test]
    fn test_valid_submit() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let response = test_submit_default_asset(deps.as_mut());
        assert_eq!(
            "submit_for_approval",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            "pending_approval",
            single_attribute_for_key(&response, ASSET_STATUS_KEY),
        );
        let asset = load_asset(deps.as_ref().storage, DEFAULT_ASSET_ID).unwrap();
        assert_eq!(AssetStatus::PendingApproval, asset.status);
        assert!(asset.approvals.values().all(|a| a.is_pending()));
    }

    #[test]
    fn test_resubmit_after_rejection_resets_approvals() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        test_submit_default_asset(deps.as_mut());
        test_reject_default_asset(deps.as_mut(), DEFAULT_AUDITOR_ADDRESS, "incomplete");
        test_submit_default_asset(deps.as_mut());
        let asset = load_asset(deps.as_ref().storage, DEFAULT_ASSET_ID).unwrap();
        assert_eq!(AssetStatus::PendingApproval, asset.status);
        assert!(
            asset.approvals.values().all(|a| a.is_pending()),
            "the prior rejection should be discarded from the live approvals",
        );
    }

    #[test]
    fn test_submit_twice_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        test_submit_default_asset(deps.as_mut());
        let error = submit_for_approval(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            SubmitForApprovalV1::new(DEFAULT_ASSET_ID),
        )
        .unwrap_err();
        assert!(
            matches!(
                error,
                ContractError::InvalidStateTransition {
                    current: AssetStatus::PendingApproval,
                    requested: AssetStatus::PendingApproval,
                    ..
                }
            ),
            "unexpected error: {:?}",
            error,
        );
    }

    #[test]
    fn test_submit_by_other_owner_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let error = submit_for_approval(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(SECOND_OWNER_ADDRESS),
            SubmitForApprovalV1::new(DEFAULT_ASSET_ID),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::AccessDenied { .. }));
        assert_eq!(
            AssetStatus::Created,
            load_asset(deps.as_ref().storage, DEFAULT_ASSET_ID)
                .unwrap()
                .status,
        );
    }
}
