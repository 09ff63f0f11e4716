use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset_operation::AssetOperation;

/// The injected role configuration that drives every access decision.  No organization or
/// participant is named here: participants are bound to these roles through the participant
/// registry, so onboarding a new participant with an existing role needs no code change.
///
/// # Parameters
///
/// * `owner_role` The role allowed to create assets and to drive the owner-scoped operations.
/// * `required_approvals` The ordered roles whose approval is needed to reach the approved status.
/// * `private_access_roles` The roles permitted to read confidential asset records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct RolePolicy {
    pub owner_role: String,
    pub required_approvals: Vec<String>,
    pub private_access_roles: Vec<String>,
}
impl RolePolicy {
    pub fn new<S: Into<String>>(
        owner_role: S,
        required_approvals: Vec<S>,
        private_access_roles: Vec<S>,
    ) -> Self {
        RolePolicy {
            owner_role: owner_role.into(),
            required_approvals: required_approvals.into_iter().map(|r| r.into()).collect(),
            private_access_roles: private_access_roles
                .into_iter()
                .map(|r| r.into())
                .collect(),
        }
    }

    /// Every distinct role named by the policy, in declaration order.
    pub fn all_roles(&self) -> Vec<String> {
        let mut roles: Vec<String> = vec![];
        for role in std::iter::once(&self.owner_role)
            .chain(self.required_approvals.iter())
            .chain(self.private_access_roles.iter())
        {
            if !roles.contains(role) {
                roles.push(role.to_owned());
            }
        }
        roles
    }

    pub fn is_known_role(&self, role: &str) -> bool {
        self.all_roles().iter().any(|r| r == role)
    }

    /// The operation to allowed-role table.
    pub fn allowed_roles(&self, operation: AssetOperation) -> Vec<String> {
        match operation {
            AssetOperation::Create
            | AssetOperation::SubmitForApproval
            | AssetOperation::Activate
            | AssetOperation::Update
            | AssetOperation::Delete => vec![self.owner_role.to_owned()],
            AssetOperation::Approve | AssetOperation::Reject => self.required_approvals.to_owned(),
            AssetOperation::Read | AssetOperation::List | AssetOperation::History => {
                self.all_roles()
            }
            AssetOperation::ReadPrivate => self.private_access_roles.to_owned(),
        }
    }
}
