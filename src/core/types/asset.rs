use std::collections::BTreeMap;

use cosmwasm_std::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{approval_state::ApprovalState, asset_status::AssetStatus};

/// The public asset record.  One exists per unique asset id and it is never physically removed:
/// deletion only moves the status to [Deleted](super::asset_status::AssetStatus::Deleted).
///
/// # Parameters
///
/// * `asset_id` The unique identifier of the asset.  Between 1 and 64 characters of
/// `[A-Za-z0-9_-]`.
/// * `description` Free text describing the asset.  Between 1 and 1024 characters.
/// * `status` The current lifecycle status.
/// * `owner_fingerprint` The fingerprint of the participant that created the asset.  Drives every
/// ownership check.
/// * `created_by_label` The organization label of the creator.  Recorded for auditing only and never
/// used to make authorization decisions.
/// * `required_approvals` The ordered roles that must approve the asset before it can become
/// approved, captured from the contract's role policy at creation.
/// * `approvals` The current review cycle's decision for each role in `required_approvals`.
/// * `created_at` The block time of the creating transaction.
/// * `updated_at` The block time of the latest transaction that modified the asset.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct AssetV1 {
    pub asset_id: String,
    pub description: String,
    pub status: AssetStatus,
    pub owner_fingerprint: String,
    pub created_by_label: String,
    pub required_approvals: Vec<String>,
    pub approvals: BTreeMap<String, ApprovalState>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
impl AssetV1 {
    pub fn new<S1, S2, S3, S4>(
        asset_id: S1,
        description: S2,
        owner_fingerprint: S3,
        created_by_label: S4,
        required_approvals: &[String],
        created_at: Timestamp,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        AssetV1 {
            asset_id: asset_id.into(),
            description: description.into(),
            status: AssetStatus::Created,
            owner_fingerprint: owner_fingerprint.into(),
            created_by_label: created_by_label.into(),
            required_approvals: required_approvals.to_vec(),
            approvals: pending_approvals(required_approvals),
            created_at,
            updated_at: created_at,
        }
    }

    /// Starts a fresh review cycle by setting every required role back to pending.
    pub fn reset_approvals(&mut self) {
        self.approvals = pending_approvals(&self.required_approvals);
    }

    /// True only when every required role has approved in the current cycle.
    pub fn is_fully_approved(&self) -> bool {
        !self.required_approvals.is_empty()
            && self.required_approvals.iter().all(|role| {
                self.approvals
                    .get(role)
                    .map(|state| state.is_approved())
                    .unwrap_or(false)
            })
    }

    /// Verifies that the approval keys are exactly the required approval roles.
    pub fn has_consistent_approvals(&self) -> bool {
        self.approvals.len() == self.required_approvals.len()
            && self
                .required_approvals
                .iter()
                .all(|role| self.approvals.contains_key(role))
    }

    pub fn is_deleted(&self) -> bool {
        self.status == AssetStatus::Deleted
    }
}

fn pending_approvals(required_approvals: &[String]) -> BTreeMap<String, ApprovalState> {
    required_approvals
        .iter()
        .map(|role| (role.to_owned(), ApprovalState::Pending))
        .collect()
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Timestamp;

    use crate::core::types::{approval_state::ApprovalState, asset_status::AssetStatus};

    use super::AssetV1;

    fn required() -> Vec<String> {
        vec!["auditor".to_string(), "regulator".to_string()]
    }

    #[test]
    fn test_new_asset_has_pending_approvals_for_required_roles() {
        let asset = AssetV1::new(
            "A1",
            "desc",
            "fingerprint",
            "org",
            &required(),
            Timestamp::from_seconds(100),
        );
        assert_eq!(AssetStatus::Created, asset.status);
        assert!(
            asset.has_consistent_approvals(),
            "approval keys should match the required roles"
        );
        assert!(
            asset.approvals.values().all(|a| a.is_pending()),
            "every approval should start as pending"
        );
        assert_eq!(
            asset.created_at, asset.updated_at,
            "a new asset should be created and updated at the same time"
        );
    }

    #[test]
    fn test_fully_approved_requires_every_role() {
        let mut asset = AssetV1::new(
            "A1",
            "desc",
            "fingerprint",
            "org",
            &required(),
            Timestamp::from_seconds(100),
        );
        asset
            .approvals
            .insert("auditor".to_string(), ApprovalState::Approved);
        assert!(
            !asset.is_fully_approved(),
            "a single approval out of two should not be full approval"
        );
        asset
            .approvals
            .insert("regulator".to_string(), ApprovalState::Approved);
        assert!(asset.is_fully_approved(), "both roles approved");
        asset.reset_approvals();
        assert!(
            asset.approvals.values().all(|a| a.is_pending()),
            "a reset should move every approval back to pending"
        );
    }

    #[test]
    fn test_ad_hoc_role_breaks_consistency() {
        let mut asset = AssetV1::new(
            "A1",
            "desc",
            "fingerprint",
            "org",
            &required(),
            Timestamp::from_seconds(100),
        );
        asset
            .approvals
            .insert("stranger".to_string(), ApprovalState::Approved);
        assert!(
            !asset.has_consistent_approvals(),
            "an approval key outside the required roles should be detected"
        );
    }
}
