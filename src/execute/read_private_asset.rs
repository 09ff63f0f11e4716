use cosmwasm_std::{to_json_binary, Env, MessageInfo, Response};
use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::STATE_V1;
use crate::core::types::asset_operation::AssetOperation;
use crate::engine::private_data_partition::authorize_private_read;
use crate::service::asset_repository::AssetRepository;
use crate::service::asset_service::AssetService;
use crate::service::deps_manager::DepsManager;
use crate::service::identity_provider::IdentityProvider;
use crate::service::private_data_repository::PrivateDataRepository;
use crate::util::aliases::{AssetResult, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};

/// A transformation of [ExecuteMsg::ReadPrivateAsset](crate::core::msg::ExecuteMsg::ReadPrivateAsset)
/// for ease of use in the underlying [read_private_asset](self::read_private_asset) function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReadPrivateAssetV1 {
    pub asset_id: String,
}
impl ReadPrivateAssetV1 {
    pub fn new<S: Into<String>>(asset_id: S) -> Self {
        ReadPrivateAssetV1 {
            asset_id: asset_id.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<ReadPrivateAssetV1> {
        match msg {
            ExecuteMsg::ReadPrivateAsset { asset_id } => {
                ReadPrivateAssetV1::new(asset_id).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::ReadPrivateAsset".to_string(),
            }
            .to_err(),
        }
    }
}

/// The function used by [execute](crate::contract::execute) when an [ExecuteMsg::ReadPrivateAsset](crate::core::msg::ExecuteMsg::ReadPrivateAsset)
/// message is provided.  Returns the confidential record of an asset as the response data.
///
/// The public record must exist, and only then must the caller's role be one of the policy's
/// private access roles.  The private partition then applies its own membership check before it
/// reveals whether a record was ever written.  Nothing is written to storage and no history entry is created.
///
/// # Parameters
///
/// * `service` The storage-backed service wrapping the contract's deps.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, as well as the funds provided as an amount during the transaction.
/// * `msg` An instance of the read private asset v1 struct, provided by conversion from an
/// [ExecuteMsg](crate::core::msg::ExecuteMsg).
pub fn read_private_asset(
    service: AssetService,
    _env: Env,
    info: MessageInfo,
    msg: ReadPrivateAssetV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let caller = service.resolve_caller(&info.sender, AssetOperation::ReadPrivate)?;
    let policy = service.use_deps(|d| STATE_V1.load(d.storage))?.role_policy;
    let public_record = service.try_get_asset(&msg.asset_id)?;
    authorize_private_read(&policy, &caller, &msg.asset_id, public_record.as_ref())?;
    let record = service.get_private(&caller, &msg.asset_id)?;
    Response::new()
        .add_attributes(
            EventAttributes::for_asset_event(EventType::ReadPrivateAsset, &msg.asset_id)
                .set_caller_role(&caller.role),
        )
        .set_data(to_json_binary(&record)?)
        .to_ok()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coin, from_json, DepsMut, Response};

    use crate::contract::execute;
    use crate::core::error::ContractError;
    use crate::core::msg::{ExecuteMsg, InitMsg};
    use crate::core::types::private_asset_record::PrivateAssetRecordV1;
    use crate::core::types::private_collection::PrivateCollectionConfig;
    use crate::service::asset_service::AssetService;
    use crate::testutil::test_constants::{
        DEFAULT_ASSET_ID, DEFAULT_AUDITOR_ADDRESS, DEFAULT_AUDITOR_ROLE,
        DEFAULT_CONFIDENTIAL_NOTES, DEFAULT_DESCRIPTION, DEFAULT_INTERNAL_VALUE,
        DEFAULT_OWNER_ADDRESS, DEFAULT_REGULATOR_ADDRESS,
    };
    use crate::testutil::test_utilities::{
        empty_mock_info, get_default_init_msg, single_attribute_for_key, test_create_default_asset,
        test_execute_as, test_instantiate_success, InstArgs,
    };
    use crate::util::constants::{ASSET_EVENT_TYPE_KEY, CALLER_ROLE_KEY};

    use super::{read_private_asset, ReadPrivateAssetV1};

    fn read_as(
        deps: DepsMut,
        sender: &str,
        asset_id: &str,
    ) -> Result<Response, ContractError> {
        read_private_asset(
            AssetService::new(deps),
            mock_env(),
            empty_mock_info(sender),
            ReadPrivateAssetV1::new(asset_id),
        )
    }

    #[test]
    fn test_authorized_member_reads_record() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let response = read_as(deps.as_mut(), DEFAULT_AUDITOR_ADDRESS, DEFAULT_ASSET_ID)
            .expect("the auditor should be able to read private data");
        assert_eq!(
            "read_private_asset",
            single_attribute_for_key(&response, ASSET_EVENT_TYPE_KEY),
        );
        assert_eq!(
            DEFAULT_AUDITOR_ROLE,
            single_attribute_for_key(&response, CALLER_ROLE_KEY),
        );
        let record = from_json::<PrivateAssetRecordV1>(
            &response.data.expect("the record should be returned as data"),
        )
        .unwrap();
        assert_eq!(DEFAULT_ASSET_ID, record.asset_id);
        assert_eq!(DEFAULT_CONFIDENTIAL_NOTES, record.confidential_notes);
        assert_eq!(Some(DEFAULT_INTERNAL_VALUE), record.internal_value);
    }

    #[test]
    fn test_role_without_private_access_is_denied() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let error =
            read_as(deps.as_mut(), DEFAULT_REGULATOR_ADDRESS, DEFAULT_ASSET_ID).unwrap_err();
        match error {
            ContractError::AccessDenied {
                operation,
                allowed_roles,
                ..
            } => {
                assert_eq!("read_private_asset", operation);
                assert_eq!(
                    vec!["owner".to_string(), "auditor".to_string()],
                    allowed_roles
                );
            }
            _ => panic!("unexpected error: {:?}", error),
        }
    }

    #[test]
    fn test_existence_check_precedes_role_check() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        for sender in [DEFAULT_REGULATOR_ADDRESS, DEFAULT_AUDITOR_ADDRESS] {
            let error = read_as(deps.as_mut(), sender, "missing").unwrap_err();
            assert!(
                matches!(error, ContractError::AssetNotFound { .. }),
                "every role should see not found for an unknown asset, got: {:?}",
                error,
            );
        }
    }

    #[test]
    fn test_asset_without_payload_has_no_private_data() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_execute_as(
            deps.as_mut(),
            DEFAULT_OWNER_ADDRESS,
            ExecuteMsg::CreateAsset {
                asset_id: DEFAULT_ASSET_ID.to_string(),
                description: DEFAULT_DESCRIPTION.to_string(),
                private_payload: None,
            },
        );
        let error = read_as(deps.as_mut(), DEFAULT_OWNER_ADDRESS, DEFAULT_ASSET_ID).unwrap_err();
        assert!(matches!(error, ContractError::PrivateDataNotFound { .. }));
    }

    #[test]
    fn test_collection_membership_is_enforced_separately() {
        let mut deps = mock_dependencies();
        test_instantiate_success(
            deps.as_mut(),
            InstArgs {
                init_msg: InitMsg {
                    private_collection: PrivateCollectionConfig::new(
                        "owners_only",
                        vec!["owner"],
                    ),
                    ..get_default_init_msg()
                },
                ..InstArgs::default()
            },
        );
        test_create_default_asset(deps.as_mut());
        let error =
            read_as(deps.as_mut(), DEFAULT_AUDITOR_ADDRESS, DEFAULT_ASSET_ID).unwrap_err();
        match error {
            ContractError::AccessDenied { allowed_roles, .. } => {
                assert_eq!(vec!["owner".to_string()], allowed_roles);
            }
            _ => panic!("unexpected error: {:?}", error),
        }
        read_as(deps.as_mut(), DEFAULT_OWNER_ADDRESS, DEFAULT_ASSET_ID)
            .expect("a collection member with private access should read the record");
    }

    #[test]
    fn test_read_rejects_funds() {
        let mut deps = mock_dependencies();
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        test_create_default_asset(deps.as_mut());
        let error = execute(
            deps.as_mut(),
            mock_env(),
            mock_info(DEFAULT_AUDITOR_ADDRESS, &[coin(10, "nhash")]),
            ExecuteMsg::ReadPrivateAsset {
                asset_id: DEFAULT_ASSET_ID.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(error, ContractError::InvalidFunds(_)));
    }
}
