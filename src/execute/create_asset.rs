use cosmwasm_std::{Binary, Env, MessageInfo};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::engine::asset_state_machine::AssetCommand;
use crate::engine::private_data_partition::parse_private_payload;
use crate::service::asset_service::AssetService;
use crate::service::private_data_repository::PrivateDataRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::event_attributes::EventType;

use super::command_runner::{asset_event_response, commit_asset_command};

/// A transformation of [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// for ease of use in the underlying [create_asset](self::create_asset) function.
///
/// # Parameters
///
/// * `asset_id` The unique identifier of the new asset.
/// * `description` The public description of the asset.
/// * `private_payload` The optional transient payload destined for the private partition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateAssetV1 {
    pub asset_id: String,
    pub description: String,
    pub private_payload: Option<Binary>,
}
impl CreateAssetV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(
        asset_id: S1,
        description: S2,
        private_payload: Option<Binary>,
    ) -> Self {
        CreateAssetV1 {
            asset_id: asset_id.into(),
            description: description.into(),
            private_payload,
        }
    }

    /// Attempts to create an instance of this struct from a provided execute msg.  If the provided
    /// value is not of the [CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset) variant, then
    /// an [InvalidMessageType](crate::core::error::ContractError::InvalidMessageType) error will be
    /// returned.
    ///
    /// # Parameters
    ///
    /// * `msg` An execute msg provided by the contract's [execute](crate::contract::execute) function.
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<CreateAssetV1> {
        match msg {
            ExecuteMsg::CreateAsset {
                asset_id,
                description,
                private_payload,
            } => CreateAssetV1::new(asset_id, description, private_payload).to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::CreateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::CreateAsset](crate::core::msg::ExecuteMsg::CreateAsset)
/// message is provided.  Creates a new asset owned by the sender with every required approval
/// pending.  When a private payload is supplied, its decoded record is written to the private
/// partition and never to the public record.
///
/// # Parameters
///
/// * `service` The storage-backed service wrapping the contract's deps.
/// * `env` An environment object provided by the cosmwasm framework.  Supplies the block time used
/// as the creation timestamp.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the create asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn create_asset(
    service: AssetService,
    env: Env,
    info: MessageInfo,
    msg: CreateAssetV1,
) -> EntryPointResponse {
    // Decode the payload before anything is written so a malformed payload leaves no trace
    let private_input = match &msg.private_payload {
        Some(payload) => Some(parse_private_payload(payload)?),
        None => None,
    };
    let committed = commit_asset_command(
        &service,
        &env,
        &info,
        &msg.asset_id,
        AssetCommand::Create {
            description: msg.description,
        },
    )?;
    if let Some(input) = private_input {
        service.put_private(&input.into_record(&msg.asset_id))?;
    }
    asset_event_response(EventType::CreateAsset, &committed)
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coin, from_json, Binary};

    use crate::contract::execute;
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;
    use crate::core::state::{assets, PRIVATE_ASSETS};
    use crate::core::types::asset::AssetV1;
    use crate::core::types::asset_status::AssetStatus;
    use crate::service::asset_service::AssetService;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_AUDITOR_ADDRESS, DEFAULT_CONFIDENTIAL_NOTES,
        DEFAULT_DESCRIPTION, DEFAULT_INTERNAL_VALUE, DEFAULT_OWNER_ADDRESS, DEFAULT_OWNER_ORG,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, get_default_private_payload, single_attribute_for_key,
        test_create_default_asset, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{
        ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, ASSET_STATUS_KEY, CALLER_ROLE_KEY, NEW_VALUE_KEY,
    };
    use crate::util::event_attributes::EventType;

    use super::{create_asset, CreateAssetV1};

    #[test]
    fn test_valid_create_asset_via_execute() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let response = test_create_default_asset(deps.as_mut());
        assert!(
            response.messages.is_empty(),
            "creating an asset should not require messages",
        );
        assert_eq!(
            5,
            response.attributes.len(),
            "creating an asset should produce the correct number of attributes",
        );
        assert_eq!(
            EventType::CreateAsset.event_name().as_str(),
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
            "the proper event type should be emitted",
        );
        assert_eq!(
            DEFAULT_ASSET_ID,
            single_attribute_for_key(&response, ASSET_ID_KEY)
        );
        assert_eq!("created", single_attribute_for_key(&response, ASSET_STATUS_KEY));
        assert_eq!("owner", single_attribute_for_key(&response, CALLER_ROLE_KEY));
        assert_eq!(
            "1",
            single_attribute_for_key(&response, NEW_VALUE_KEY),
            "the first history sequence should be emitted",
        );
        let asset = from_json::<AssetV1>(
            &response
                .data
                .expect("the created asset should be returned as response data"),
        )
        .unwrap();
        assert_eq!(DEFAULT_DESCRIPTION, asset.description);
        assert_eq!(DEFAULT_OWNER_ADDRESS, asset.owner_fingerprint);
        assert_eq!(DEFAULT_OWNER_ORG, asset.created_by_label);
        assert_eq!(AssetStatus::Created, asset.status);
        assert_eq!(mock_env().block.time, asset.created_at);
        assert_eq!(asset.created_at, asset.updated_at);
    }

    #[test]
    fn test_private_payload_is_partitioned() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let record = PRIVATE_ASSETS
            .load(deps.as_ref().storage, DEFAULT_ASSET_ID)
            .expect("the private record should be stored");
        assert_eq!(DEFAULT_CONFIDENTIAL_NOTES, record.confidential_notes);
        assert_eq!(Some(DEFAULT_INTERNAL_VALUE), record.internal_value);
        let public = assets()
            .load(deps.as_ref().storage, DEFAULT_ASSET_ID)
            .unwrap();
        let public_json = String::from_utf8(cosmwasm_std::to_json_vec(&public).unwrap()).unwrap();
        assert!(
            !public_json.contains(DEFAULT_CONFIDENTIAL_NOTES),
            "the public record should never contain private values",
        );
    }

    #[test]
    fn test_create_without_payload_writes_no_private_record() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        create_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            CreateAssetV1::new(DEFAULT_ASSET_ID, DEFAULT_DESCRIPTION, None),
        )
        .expect("creation without a payload should succeed");
        assert!(!PRIVATE_ASSETS.has(deps.as_ref().storage, DEFAULT_ASSET_ID));
    }

    #[test]
    fn test_duplicate_create_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            ExecuteMsg::CreateAsset {
                asset_id: DEFAULT_ASSET_ID.to_string(),
                description: "other".to_string(),
                private_payload: None,
            },
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::AssetAlreadyExists { .. }),
            "unexpected error: {:?}",
            error,
        );
    }

    #[test]
    fn test_reviewer_cannot_create() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = create_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_AUDITOR_ADDRESS),
            CreateAssetV1::new(DEFAULT_ASSET_ID, DEFAULT_DESCRIPTION, None),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::AccessDenied { .. }));
        assert!(!assets().has(deps.as_ref().storage, DEFAULT_ASSET_ID));
    }

    #[test]
    fn test_malformed_payload_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = create_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            CreateAssetV1::new(
                DEFAULT_ASSET_ID,
                DEFAULT_DESCRIPTION,
                Some(Binary::from(b"{\"internal_value\":1}")),
            ),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::InvalidMessageFields { .. }));
        assert!(!assets().has(deps.as_ref().storage, DEFAULT_ASSET_ID));
    }

    #[test]
    fn test_fractional_internal_value_names_the_field() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = create_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            empty_mock_info(DEFAULT_OWNER_ADDRESS),
            CreateAssetV1::new(
                DEFAULT_ASSET_ID,
                DEFAULT_DESCRIPTION,
                Some(Binary::from(
                    b"{\"confidential_notes\":\"n\",\"internal_value\":12.5}",
                )),
            ),
        )
        .unwrap_err();
        match error {
            ContractError::InvalidMessageFields { invalid_fields, .. } => assert_eq!(
                vec!["private_payload.internal_value: must be an integer".to_string()],
                invalid_fields,
            ),
            _ => panic!("unexpected error: {:?}", error),
        }
        assert!(!assets().has(deps.as_ref().storage, DEFAULT_ASSET_ID));
    }

    #[test]
    fn test_create_with_funds_fails() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let error = create_asset(
            AssetService::new(deps.as_mut()),
            mock_env(),
            mock_info(DEFAULT_OWNER_ADDRESS, &[coin(1, "stake")]),
            CreateAssetV1::new(
                DEFAULT_ASSET_ID,
                DEFAULT_DESCRIPTION,
                Some(get_default_private_payload()),
            ),
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::InvalidFunds(_)));
    }

    #[test]
    fn test_invalid_message_type() {
        let error = CreateAssetV1::from_execute_msg(ExecuteMsg::DeleteAsset {
            asset_id: DEFAULT_ASSET_ID.to_string(),
        })
        .unwrap_err();
        assert!(matches!(error, ContractError::InvalidMessageType { .. }));
    }
}
