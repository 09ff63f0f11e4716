use cosmwasm_std::{
    testing::{mock_env, mock_info, MockApi, MockQuerier, MockStorage},
    to_json_binary, Binary, Env, MessageInfo, OwnedDeps, Response,
};

use crate::{
    contract::{execute, instantiate},
    core::{
        msg::{ExecuteMsg, InitMsg},
        types::{
            participant::ParticipantInput, private_asset_record::PrivateAssetInput,
            private_collection::PrivateCollectionConfig, role_policy::RolePolicy,
        },
    },
    util::aliases::{DepsMutC, EntryPointResponse},
};

use super::test_constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_ASSET_ID, DEFAULT_AUDITOR_ADDRESS, DEFAULT_AUDITOR_ORG,
    DEFAULT_AUDITOR_ROLE, DEFAULT_COLLECTION_NAME, DEFAULT_CONFIDENTIAL_NOTES,
    DEFAULT_DESCRIPTION, DEFAULT_INTERNAL_VALUE, DEFAULT_OWNER_ADDRESS, DEFAULT_OWNER_ORG,
    DEFAULT_OWNER_ROLE, DEFAULT_REGULATOR_ADDRESS, DEFAULT_REGULATOR_ORG, DEFAULT_REGULATOR_ROLE,
    SECOND_OWNER_ADDRESS, SECOND_OWNER_ORG,
};

pub type MockOwnedDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

/// Owner creates, auditor and regulator must both approve, owner and auditor may read private data
pub fn get_default_role_policy() -> RolePolicy {
    RolePolicy::new(
        DEFAULT_OWNER_ROLE,
        vec![DEFAULT_AUDITOR_ROLE, DEFAULT_REGULATOR_ROLE],
        vec![DEFAULT_OWNER_ROLE, DEFAULT_AUDITOR_ROLE],
    )
}

pub fn get_default_private_collection() -> PrivateCollectionConfig {
    PrivateCollectionConfig::new(
        DEFAULT_COLLECTION_NAME,
        vec![DEFAULT_OWNER_ROLE, DEFAULT_AUDITOR_ROLE],
    )
}

pub fn get_default_participants() -> Vec<ParticipantInput> {
    vec![
        ParticipantInput::new(DEFAULT_OWNER_ADDRESS, DEFAULT_OWNER_ROLE, DEFAULT_OWNER_ORG),
        ParticipantInput::new(SECOND_OWNER_ADDRESS, DEFAULT_OWNER_ROLE, SECOND_OWNER_ORG),
        ParticipantInput::new(
            DEFAULT_AUDITOR_ADDRESS,
            DEFAULT_AUDITOR_ROLE,
            DEFAULT_AUDITOR_ORG,
        ),
        ParticipantInput::new(
            DEFAULT_REGULATOR_ADDRESS,
            DEFAULT_REGULATOR_ROLE,
            DEFAULT_REGULATOR_ORG,
        ),
    ]
}

pub fn get_default_init_msg() -> InitMsg {
    InitMsg {
        role_policy: get_default_role_policy(),
        private_collection: get_default_private_collection(),
        participants: get_default_participants(),
    }
}

pub fn get_default_private_payload() -> Binary {
    to_json_binary(&PrivateAssetInput::new(
        DEFAULT_CONFIDENTIAL_NOTES,
        Some(DEFAULT_INTERNAL_VALUE),
    ))
    .expect("the default private payload should serialize")
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub init_msg: InitMsg,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: empty_mock_info(DEFAULT_ADMIN_ADDRESS),
            init_msg: get_default_init_msg(),
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(deps, args.env, args.info, args.init_msg)
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

/// Runs the message through the execute entrypoint as the given sender, panicking on failure
pub fn test_execute_as<S: Into<String>>(deps: DepsMutC, sender: S, msg: ExecuteMsg) -> Response {
    execute(deps, mock_env(), empty_mock_info(sender), msg)
        .expect("expected the execute message to succeed")
}

pub fn test_create_asset<S1: Into<String>, S2: Into<String>>(
    deps: DepsMutC,
    sender: S1,
    asset_id: S2,
) -> Response {
    test_execute_as(
        deps,
        sender,
        ExecuteMsg::CreateAsset {
            asset_id: asset_id.into(),
            description: DEFAULT_DESCRIPTION.to_string(),
            private_payload: Some(get_default_private_payload()),
        },
    )
}

pub fn test_create_default_asset(deps: DepsMutC) -> Response {
    test_create_asset(deps, DEFAULT_OWNER_ADDRESS, DEFAULT_ASSET_ID)
}

pub fn test_submit_default_asset(deps: DepsMutC) -> Response {
    test_execute_as(
        deps,
        DEFAULT_OWNER_ADDRESS,
        ExecuteMsg::SubmitForApproval {
            asset_id: DEFAULT_ASSET_ID.to_string(),
        },
    )
}

pub fn test_approve_default_asset<S: Into<String>>(deps: DepsMutC, reviewer: S) -> Response {
    test_execute_as(
        deps,
        reviewer,
        ExecuteMsg::ApproveAsset {
            asset_id: DEFAULT_ASSET_ID.to_string(),
        },
    )
}

pub fn test_reject_default_asset<S1: Into<String>, S2: Into<String>>(
    deps: DepsMutC,
    reviewer: S1,
    reason: S2,
) -> Response {
    test_execute_as(
        deps,
        reviewer,
        ExecuteMsg::RejectAsset {
            asset_id: DEFAULT_ASSET_ID.to_string(),
            reason: reason.into(),
        },
    )
}

pub fn test_delete_default_asset(deps: DepsMutC) -> Response {
    test_execute_as(
        deps,
        DEFAULT_OWNER_ADDRESS,
        ExecuteMsg::DeleteAsset {
            asset_id: DEFAULT_ASSET_ID.to_string(),
        },
    )
}

/// Creates, submits and fully approves the default asset
pub fn test_approve_default_asset_fully(deps: &mut MockOwnedDeps) {
    test_create_default_asset(deps.as_mut());
    test_submit_default_asset(deps.as_mut());
    test_approve_default_asset(deps.as_mut(), DEFAULT_AUDITOR_ADDRESS);
    test_approve_default_asset(deps.as_mut(), DEFAULT_REGULATOR_ADDRESS);
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
