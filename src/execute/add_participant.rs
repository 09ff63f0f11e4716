use cosmwasm_std::{MessageInfo, Response};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::{PARTICIPANTS, STATE_V1};
use crate::core::types::participant::{ParticipantInput, ParticipantV1};
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::validation::validate_init_msg::validate_participant;

/// A transformation of [ExecuteMsg::AddParticipant](crate::core::msg::ExecuteMsg::AddParticipant)
/// for ease of use in the underlying [add_participant](self::add_participant) function.
///
/// # Parameters
///
/// * `participant` The unvalidated participant to register.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddParticipantV1 {
    pub participant: ParticipantInput,
}
impl AddParticipantV1 {
    pub fn new(participant: ParticipantInput) -> Self {
        AddParticipantV1 { participant }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [AddParticipant](crate::core::msg::ExecuteMsg::AddParticipant)
    /// variant, then an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType)
    /// error will be returned.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<AddParticipantV1> {
        match msg {
            ExecuteMsg::AddParticipant {
                address,
                role,
                org_label,
            } => AddParticipantV1::new(ParticipantInput::new(address, role, org_label)).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::AddParticipant".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::AddParticipant](crate::core::msg::ExecuteMsg::AddParticipant)
/// message is provided.  Issues an identity to a new participant by binding its address to one of
/// the roles defined by the contract's role policy.  Only the contract admin may call this route.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the add participant v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn add_participant(
    deps: DepsMutC,
    info: MessageInfo,
    msg: AddParticipantV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let policy = STATE_V1.load(deps.storage)?.role_policy;
    let invalid_fields = validate_participant(&deps.as_ref(), &msg.participant, &policy);
    if !invalid_fields.is_empty() {
        return ContractError::InvalidMessageFields {
            message_type: "ExecuteMsg::AddParticipant".to_string(),
            invalid_fields,
        }
        .to_err();
    }
    let address = deps.api.addr_validate(&msg.participant.address)?;
    if PARTICIPANTS.has(deps.storage, &address) {
        return ContractError::ParticipantAlreadyExists {
            address: address.to_string(),
        }
        .to_err();
    }
    let participant = ParticipantV1::new(
        address,
        msg.participant.role,
        msg.participant.org_label,
    );
    PARTICIPANTS.save(deps.storage, &participant.address, &participant)?;
    Response::new()
        .add_attributes(
            EventAttributes::new(EventType::AddParticipant)
                .set_participant(&participant.address)
                .set_new_value(&participant.role),
        )
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_info};
    use cosmwasm_std::{coin, Addr};

    use crate::core::error::ContractError;
    use crate::core::state::PARTICIPANTS;
    use crate::core::types::participant::ParticipantInput;
    use crate::testutil::test_constants::{
        DEFAULT_ADMIN_ADDRESS, DEFAULT_AUDITOR_ADDRESS, DEFAULT_AUDITOR_ROLE,
        DEFAULT_OWNER_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, single_attribute_for_key, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, NEW_VALUE_KEY, PARTICIPANT_ADDRESS_KEY};

    use super::{add_participant, AddParticipantV1};

    fn new_auditor() -> AddParticipantV1 {
        AddParticipantV1::new(ParticipantInput::new(
            "auditor2",
            DEFAULT_AUDITOR_ROLE,
            "org-auditor-2",
        ))
    }

    #[test]
    fn test_valid_add_participant() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = add_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            new_auditor(),
        )
        .expect("the admin should be able to add a participant");
        assert_eq!(
            "add_participant",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            "auditor2",
            single_attribute_for_key(&response, PARTICIPANT_ADDRESS_KEY),
        );
        assert_eq!(
            DEFAULT_AUDITOR_ROLE,
            single_attribute_for_key(&response, NEW_VALUE_KEY),
        );
        let participant = PARTICIPANTS
            .load(deps.as_ref().storage, &Addr::unchecked("auditor2"))
            .expect("the participant should be stored");
        assert_eq!(DEFAULT_AUDITOR_ROLE, participant.role);
        assert_eq!("org-auditor-2", participant.org_label);
    }

    #[test]
    fn test_non_admin_cannot_add_participant() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            new_auditor(),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::Unauthorized { .. }));
    }

    #[test]
    fn test_funds_are_rejected() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_participant(
            deps.as_mut(),
            mock_info(DEFAULT_ADMIN_ADDRESS, &[coin(100, "nhash")]),
            new_auditor(),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::InvalidFunds(_)));
    }

    #[test]
    fn test_duplicate_participant_rejected() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            AddParticipantV1::new(ParticipantInput::new(
                DEFAULT_AUDITOR_ADDRESS,
                DEFAULT_AUDITOR_ROLE,
                "org-auditor",
            )),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            ContractError::ParticipantAlreadyExists { .. }
        ));
    }

    #[test]
    fn test_unknown_role_rejected() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = add_participant(
            deps.as_mut(),
            empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            AddParticipantV1::new(ParticipantInput::new("stranger", "janitor", "org-x")),
        )
        .unwrap_err();
        match error {
            ContractError::InvalidMessageFields { invalid_fields, .. } => {
                assert_eq!(
                    vec!["participant:role: role [janitor] is not defined by the role policy"
                        .to_string()],
                    invalid_fields,
                );
            }
            _ => panic!("unexpected error: {:?}", error),
        }
        assert!(
            !PARTICIPANTS.has(deps.as_ref().storage, &Addr::unchecked("stranger")),
            "nothing should be stored for an invalid participant",
        );
    }
}
