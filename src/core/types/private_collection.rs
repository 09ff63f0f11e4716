use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Describes the restricted storage partition that holds confidential asset records.  The
/// partition enforces its own membership on read, in addition to the engine's private access
/// check.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PrivateCollectionConfig {
    pub name: String,
    pub member_roles: Vec<String>,
}
impl PrivateCollectionConfig {
    pub fn new<S: Into<String>>(name: S, member_roles: Vec<S>) -> Self {
        PrivateCollectionConfig {
            name: name.into(),
            member_roles: member_roles.into_iter().map(|r| r.into()).collect(),
        }
    }

    pub fn is_member(&self, role: &str) -> bool {
        self.member_roles.iter().any(|r| r == role)
    }
}
