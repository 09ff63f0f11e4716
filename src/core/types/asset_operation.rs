use core::fmt;
use std::fmt::{Display, Formatter};

/// Every operation exposed by the contract that is subject to an access policy decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetOperation {
    Create,
    SubmitForApproval,
    Approve,
    Reject,
    Activate,
    Update,
    Delete,
    Read,
    List,
    History,
    ReadPrivate,
}
impl AssetOperation {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Create => "create_asset",
            Self::SubmitForApproval => "submit_for_approval",
            Self::Approve => "approve_asset",
            Self::Reject => "reject_asset",
            Self::Activate => "activate_asset",
            Self::Update => "update_asset",
            Self::Delete => "delete_asset",
            Self::Read => "query_asset",
            Self::List => "query_assets",
            Self::History => "query_asset_history",
            Self::ReadPrivate => "read_private_asset",
        }
    }

    /// Owner-scoped operations additionally require the caller to be the asset's owner.
    pub fn is_owner_scoped(&self) -> bool {
        matches!(
            self,
            Self::SubmitForApproval | Self::Activate | Self::Update | Self::Delete
        )
    }
}
impl Display for AssetOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
