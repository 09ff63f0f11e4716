use core::fmt;
use std::fmt::{Display, Formatter};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An enum that denotes the various states that an [AssetV1](super::asset::AssetV1) can have.
/// Every status is reachable from [Created](self::AssetStatus::Created) only by following the
/// transitions returned by [allowed_transitions](self::AssetStatus::allowed_transitions).
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AssetStatus {
    /// The asset has been created by its owner and has not yet entered review.
    Created,
    /// The asset is under review and awaits a decision from every required approval role.
    PendingApproval,
    /// Every required approval role has approved the asset in the current review cycle.
    Approved,
    /// A required approval role rejected the asset.  The owner may correct and resubmit it.
    Rejected,
    /// The owner has activated an approved asset.
    Active,
    /// The asset was soft-deleted.  Terminal.
    Deleted,
}
impl AssetStatus {
    /// Every status value, in lifecycle order.
    pub const ALL: [AssetStatus; 6] = [
        AssetStatus::Created,
        AssetStatus::PendingApproval,
        AssetStatus::Approved,
        AssetStatus::Rejected,
        AssetStatus::Active,
        AssetStatus::Deleted,
    ];

    /// The transition table: each status maps to the statuses it may legally move into.
    pub fn allowed_transitions(&self) -> &'static [AssetStatus] {
        match self {
            Self::Created => &[Self::PendingApproval, Self::Deleted],
            Self::PendingApproval => &[Self::Approved, Self::Rejected],
            Self::Approved => &[Self::Active, Self::Deleted],
            Self::Rejected => &[Self::PendingApproval, Self::Deleted],
            Self::Active => &[Self::Deleted],
            Self::Deleted => &[],
        }
    }

    pub fn can_transition_to(&self, next: AssetStatus) -> bool {
        self.allowed_transitions().contains(&next)
    }

    /// The snake case name used in storage, events and the status index.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::PendingApproval => "pending_approval",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Active => "active",
            Self::Deleted => "deleted",
        }
    }
}
impl Display for AssetStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::AssetStatus;

    #[test]
    fn test_transition_table_matches_lifecycle() {
        let expected: Vec<(AssetStatus, Vec<AssetStatus>)> = vec![
            (
                AssetStatus::Created,
                vec![AssetStatus::PendingApproval, AssetStatus::Deleted],
            ),
            (
                AssetStatus::PendingApproval,
                vec![AssetStatus::Approved, AssetStatus::Rejected],
            ),
            (
                AssetStatus::Approved,
                vec![AssetStatus::Active, AssetStatus::Deleted],
            ),
            (
                AssetStatus::Rejected,
                vec![AssetStatus::PendingApproval, AssetStatus::Deleted],
            ),
            (AssetStatus::Active, vec![AssetStatus::Deleted]),
            (AssetStatus::Deleted, vec![]),
        ];
        for (current, allowed) in expected {
            for next in AssetStatus::ALL {
                assert_eq!(
                    allowed.contains(&next),
                    current.can_transition_to(next),
                    "unexpected legality for transition {} -> {}",
                    current,
                    next,
                );
            }
        }
    }

    #[test]
    fn test_pending_approval_cannot_be_deleted() {
        assert!(
            !AssetStatus::PendingApproval.can_transition_to(AssetStatus::Deleted),
            "an owner should never be able to cancel a review in progress",
        );
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for status in AssetStatus::ALL {
            let serialized = serde_json_wasm::to_string(&status)
                .expect("status should serialize to json");
            assert_eq!(
                format!("\"{}\"", status),
                serialized,
                "the display value should equal the serialized value",
            );
        }
    }
}
