use cosmwasm_std::{MessageInfo, Response};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::PARTICIPANTS;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};

/// A transformation of [ExecuteMsg::RemoveParticipant](crate::core::msg::ExecuteMsg::RemoveParticipant)
/// for ease of use in the underlying [remove_participant](self::remove_participant) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoveParticipantV1 {
    pub address: String,
}
impl RemoveParticipantV1 {
    pub fn new<S: Into<String>>(address: S) -> Self {
        RemoveParticipantV1 {
            address: address.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<RemoveParticipantV1> {
        match msg {
            ExecuteMsg::RemoveParticipant { address } => RemoveParticipantV1::new(address).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::RemoveParticipant".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::RemoveParticipant](crate::core::msg::ExecuteMsg::RemoveParticipant)
/// message is provided.  Revokes a participant's identity.  Assets the participant already owns
/// keep its fingerprint, so they stay frozen until the same address is registered again.
pub fn remove_participant(
    deps: DepsMutC,
    info: MessageInfo,
    msg: RemoveParticipantV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let address = deps.api.addr_validate(&msg.address)?;
    if !PARTICIPANTS.has(deps.storage, &address) {
        return ContractError::ParticipantNotFound {
            address: address.to_string(),
        }
        .to_err();
    }
    PARTICIPANTS.remove(deps.storage, &address);
    Response::new()
        .add_attributes(EventAttributes::new(EventType::RemoveParticipant).set_participant(&address))
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env};
    use cosmwasm_std::Addr;

    use crate::core::error::ContractError;
    use crate::core::state::PARTICIPANTS;
    use crate::execute::submit_for_approval::{submit_for_approval, SubmitForApprovalV1};
    use crate::service::asset_service::AssetService;
    use crate::testutil::test_constants::{
        DEFAULT_ADMIN_ADDRESS, DEFAULT_ASSET_ID, DEFAULT_OWNER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_create_default_asset,
        test_instantiate_success, InstArgs,
    };
    use crate::util::constants::PARTICIPANT_ADDRESS_KEY;

    use super::{remove_participant, RemoveParticipantV1};

    #[test]
    fn test_removed_participant_loses_access() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let response = remove_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            RemoveParticipantV1::new(DEFAULT_OWNER_ADDRESS),
        )
        .expect("the admin should be able to remove a participant");
        assert_eq!(
            DEFAULT_OWNER_ADDRESS,
            single_attribute_for_key(&response, PARTICIPANT_ADDRESS_KEY),
        );
        assert!(!PARTICIPANTS.has(
            deps.as_ref().storage,
            &Addr::unchecked(DEFAULT_OWNER_ADDRESS)
        ));
        let error = submit_for_approval(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            SubmitForApprovalV1::new(DEFAULT_ASSET_ID),
        )
        .unwrap_err();
        match error {
            ContractError::AccessDenied { explanation, .. } => {
                assert_eq!("caller is not a registered participant", explanation);
            }
            _ => panic!("unexpected error: {:?}", error),
        }
    }

    #[test]
    fn test_non_admin_cannot_remove_participant() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = remove_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            RemoveParticipantV1::new(DEFAULT_OWNER_ADDRESS),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_remove_unknown_participant_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = remove_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            RemoveParticipantV1::new("nobody"),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::ParticipantNotFound { .. }));
    }
}
