use cosmwasm_std::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The decision recorded for a single required approval role during the current review cycle.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalState {
    /// The role has not yet acted in the current review cycle.
    Pending,
    /// The role approved the asset.
    Approved,
    /// The role rejected the asset.
    ///
    /// # Parameters
    ///
    /// * `reason` Free text supplied by the rejecting reviewer.
    /// * `timestamp` The block time of the transaction that recorded the rejection.
    Rejected { reason: String, timestamp: Timestamp },
}
impl ApprovalState {
    pub fn rejected<S: Into<String>>(reason: S, timestamp: Timestamp) -> Self {
        ApprovalState::Rejected {
            reason: reason.into(),
            timestamp,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ApprovalState::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ApprovalState::Approved)
    }
}
