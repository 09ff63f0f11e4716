use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::participant::ParticipantInput;
use crate::core::types::private_collection::PrivateCollectionConfig;
use crate::core::types::role_policy::RolePolicy;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::functions::distinct_count_by_property;
use crate::validation::field_validation::label_errors;

use result_extensions::ResultExtensions;

/// Validates the instantiation configuration: the role policy, the private collection and every
/// initial participant.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Used to validate addresses.
/// * `msg` The init msg provided to the contract's [instantiate](crate::contract::instantiate) function.
pub fn validate_init_msg(deps: &DepsC, msg: &InitMsg) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut validate_role_policy(&msg.role_policy));
    invalid_fields.append(&mut validate_private_collection(
        &msg.private_collection,
        &msg.role_policy,
    ));
    if distinct_count_by_property(&msg.participants, |p| &p.address) != msg.participants.len() {
        invalid_fields.push("participants: each participant must specify a unique address".to_string());
    }
    let mut participant_messages = msg
        .participants
        .iter()
        .flat_map(|participant| validate_participant(deps, participant, &msg.role_policy))
        .collect::<Vec<String>>();
    invalid_fields.append(&mut participant_messages);
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

fn validate_role_policy(policy: &RolePolicy) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut label_errors("role_policy:owner_role", &policy.owner_role));
    if policy.required_approvals.is_empty() {
        invalid_fields.push(
            "role_policy:required_approvals: at least one approval role must be supplied"
                .to_string(),
        );
    }
    if distinct_count_by_property(&policy.required_approvals, |r| r)
        != policy.required_approvals.len()
    {
        invalid_fields
            .push("role_policy:required_approvals: each role must be unique".to_string());
    }
    for role in policy.required_approvals.iter() {
        invalid_fields.append(&mut label_errors("role_policy:required_approvals", role));
    }
    if policy.private_access_roles.is_empty() {
        invalid_fields.push(
            "role_policy:private_access_roles: at least one private access role must be supplied"
                .to_string(),
        );
    }
    for role in policy.private_access_roles.iter() {
        invalid_fields.append(&mut label_errors("role_policy:private_access_roles", role));
    }
    invalid_fields
}

fn validate_private_collection(
    collection: &PrivateCollectionConfig,
    policy: &RolePolicy,
) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    invalid_fields.append(&mut label_errors("private_collection:name", &collection.name));
    if collection.member_roles.is_empty() {
        invalid_fields.push(
            "private_collection:member_roles: at least one member role must be supplied"
                .to_string(),
        );
    }
    for role in collection.member_roles.iter() {
        if !policy.is_known_role(role) {
            invalid_fields.push(format!(
                "private_collection:member_roles: role [{}] is not defined by the role policy",
                role
            ));
        }
    }
    invalid_fields
}

/// Validates a single participant against the role policy.  Shared with the
/// [add_participant](crate::execute::add_participant::add_participant) route.
pub fn validate_participant(
    deps: &DepsC,
    participant: &ParticipantInput,
    policy: &RolePolicy,
) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if deps.api.addr_validate(&participant.address).is_err() {
        invalid_fields.push("participant:address: must be a valid address".to_string());
    }
    if !policy.is_known_role(&participant.role) {
        invalid_fields.push(format!(
            "participant:role: role [{}] is not defined by the role policy",
            participant.role
        ));
    }
    invalid_fields.append(&mut label_errors("participant:org_label", &participant.org_label));
    invalid_fields
}
