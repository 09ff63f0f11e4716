use result_extensions::ResultExtensions;

use crate::core::error::ContractError;
use crate::core::types::asset::AssetV1;
use crate::core::types::asset_operation::AssetOperation;
use crate::core::types::caller_identity::CallerIdentity;
use crate::core::types::role_policy::RolePolicy;
use crate::util::aliases::AssetResult;

/// Evaluates the role and ownership rules of a [RolePolicy](crate::core::types::role_policy::RolePolicy)
/// against a caller.  Holds no state of its own beyond the borrowed policy, so every decision is a
/// pure function of the policy, the operation and the caller.
pub struct AccessPolicyEvaluator<'a> {
    policy: &'a RolePolicy,
}
impl<'a> AccessPolicyEvaluator<'a> {
    pub fn new(policy: &'a RolePolicy) -> Self {
        AccessPolicyEvaluator { policy }
    }

    /// Verifies that the caller's role is in the allowed role set for the operation.
    ///
    /// # Parameters
    ///
    /// * `operation` The operation being attempted.
    /// * `caller` The verified identity of the sender.
    pub fn check_role(&self, operation: AssetOperation, caller: &CallerIdentity) -> AssetResult<()> {
        let allowed_roles = self.policy.allowed_roles(operation);
        if allowed_roles.iter().any(|role| role == &caller.role) {
            Ok(())
        } else {
            ContractError::AccessDenied {
                operation: operation.name().to_string(),
                explanation: format!("caller role [{}] is not permitted", caller.role),
                allowed_roles,
            }
            .to_err()
        }
    }

    /// Verifies that the caller owns the asset for owner-scoped operations.  Role membership alone
    /// never satisfies this check.  Operations that are not owner-scoped pass unconditionally.
    ///
    /// # Parameters
    ///
    /// * `operation` The operation being attempted.
    /// * `caller` The verified identity of the sender.
    /// * `asset` The asset targeted by the operation.
    pub fn check_ownership(
        &self,
        operation: AssetOperation,
        caller: &CallerIdentity,
        asset: &AssetV1,
    ) -> AssetResult<()> {
        if !operation.is_owner_scoped() || caller.fingerprint == asset.owner_fingerprint {
            Ok(())
        } else {
            ContractError::AccessDenied {
                operation: operation.name().to_string(),
                allowed_roles: self.policy.allowed_roles(operation),
                explanation: "caller is not the owner of the asset".to_string(),
            }
            .to_err()
        }
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Timestamp;

    use crate::core::error::ContractError;
    use crate::core::types::asset::AssetV1;
    use crate::core::types::asset_operation::AssetOperation;
    use crate::core::types::caller_identity::CallerIdentity;
    use crate::testutil::test_utilities::get_default_role_policy;

    use super::AccessPolicyEvaluator;

    fn asset_owned_by(fingerprint: &str) -> AssetV1 {
        AssetV1::new(
            "A1",
            "desc",
            fingerprint,
            "org1",
            &get_default_role_policy().required_approvals,
            Timestamp::from_seconds(1),
        )
    }

    #[test]
    fn test_owner_role_may_create() {
        let policy = get_default_role_policy();
        AccessPolicyEvaluator::new(&policy)
            .check_role(
                AssetOperation::Create,
                &CallerIdentity::new("owner", "f1", "org1"),
            )
            .expect("the owner role should be allowed to create");
    }

    #[test]
    fn test_reviewer_role_denied_create_with_allowed_roles_named() {
        let policy = get_default_role_policy();
        let err = AccessPolicyEvaluator::new(&policy)
            .check_role(
                AssetOperation::Create,
                &CallerIdentity::new("auditor", "f2", "org2"),
            )
            .unwrap_err();
        match err {
            ContractError::AccessDenied {
                operation,
                allowed_roles,
                explanation,
            } => {
                assert_eq!("create_asset", operation);
                assert_eq!(vec!["owner".to_string()], allowed_roles);
                assert_eq!("caller role [auditor] is not permitted", explanation);
            }
            _ => panic!("unexpected error type: {:?}", err),
        }
    }

    #[test]
    fn test_same_role_different_fingerprint_fails_ownership() {
        let policy = get_default_role_policy();
        let evaluator = AccessPolicyEvaluator::new(&policy);
        let intruder = CallerIdentity::new("owner", "f9", "org1");
        let asset = asset_owned_by("f1");
        for operation in [
            AssetOperation::SubmitForApproval,
            AssetOperation::Activate,
            AssetOperation::Update,
            AssetOperation::Delete,
        ] {
            evaluator
                .check_role(operation, &intruder)
                .expect("the role check alone should pass for the owner role");
            let err = evaluator
                .check_ownership(operation, &intruder, &asset)
                .unwrap_err();
            match err {
                ContractError::AccessDenied { explanation, .. } => {
                    assert!(
                        !explanation.contains("f1"),
                        "the owner's fingerprint should never be disclosed",
                    );
                }
                _ => panic!("unexpected error type for {}: {:?}", operation, err),
            }
        }
    }

    #[test]
    fn test_owner_passes_ownership() {
        let policy = get_default_role_policy();
        AccessPolicyEvaluator::new(&policy)
            .check_ownership(
                AssetOperation::Update,
                &CallerIdentity::new("owner", "f1", "org1"),
                &asset_owned_by("f1"),
            )
            .expect("the creating owner should be authorized");
    }

    #[test]
    fn test_non_owner_scoped_operation_skips_ownership() {
        let policy = get_default_role_policy();
        AccessPolicyEvaluator::new(&policy)
            .check_ownership(
                AssetOperation::Approve,
                &CallerIdentity::new("auditor", "f2", "org2"),
                &asset_owned_by("f1"),
            )
            .expect("approval is not owner scoped");
    }
}
