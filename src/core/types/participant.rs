use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::caller_identity::CallerIdentity;

/// A registered participant of the contract.  The registry is the contract's identity issuance
/// record: a sender address is only ever granted a role through an entry here.
///
/// # Parameters
///
/// * `address` The verified bech32 address of the participant.  Doubles as its fingerprint.
/// * `role` The role granted to the participant.  Must be a role known to the contract's
/// [RolePolicy](super::role_policy::RolePolicy).
/// * `org_label` The organization the participant belongs to.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ParticipantV1 {
    pub address: Addr,
    pub role: String,
    pub org_label: String,
}
impl ParticipantV1 {
    pub fn new<S1: Into<String>, S2: Into<String>>(address: Addr, role: S1, org_label: S2) -> Self {
        ParticipantV1 {
            address,
            role: role.into(),
            org_label: org_label.into(),
        }
    }

    pub fn to_caller_identity(&self) -> CallerIdentity {
        CallerIdentity::new(&self.role, self.address.as_str(), &self.org_label)
    }
}

/// The unvalidated form of a [ParticipantV1](self::ParticipantV1), as provided in an
/// [InitMsg](crate::core::msg::InitMsg).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct ParticipantInput {
    pub address: String,
    pub role: String,
    pub org_label: String,
}
impl ParticipantInput {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        address: S1,
        role: S2,
        org_label: S3,
    ) -> Self {
        ParticipantInput {
            address: address.into(),
            role: role.into(),
            org_label: org_label.into(),
        }
    }
}
