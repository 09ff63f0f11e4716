use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The verified claims describing the participant that sent a message.  Supplied by an
/// [IdentityProvider](crate::service::identity_provider::IdentityProvider) and trusted as given:
/// the engine never attempts to re-derive any of these values.
///
/// # Parameters
///
/// * `role` The role the participant acts under.  The unit of authorization.
/// * `fingerprint` A stable identifier unique to the participant.  Used for ownership checks
/// independently of role.
/// * `org_label` The participant's organization label.  Audit only.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct CallerIdentity {
    pub role: String,
    pub fingerprint: String,
    pub org_label: String,
}
impl CallerIdentity {
    pub fn new<S1: Into<String>, S2: Into<String>, S3: Into<String>>(
        role: S1,
        fingerprint: S2,
        org_label: S3,
    ) -> Self {
        CallerIdentity {
            role: role.into(),
            fingerprint: fingerprint.into(),
            org_label: org_label.into(),
        }
    }
}
