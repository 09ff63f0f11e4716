use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The confidential sibling of an [AssetV1](super::asset::AssetV1).  Lives in the private
/// partition under the same asset id and is never mixed into the public record or its indexes.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PrivateAssetRecordV1 {
    pub asset_id: String,
    pub confidential_notes: String,
    pub internal_value: Option<i64>,
}

/// The transient payload supplied alongside a create request.  Encoded as base64 json in the
/// request so that it never becomes a field of the public record.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct PrivateAssetInput {
    pub confidential_notes: String,
    pub internal_value: Option<i64>,
}
impl PrivateAssetInput {
    pub fn new<S: Into<String>>(confidential_notes: S, internal_value: Option<i64>) -> Self {
        PrivateAssetInput {
            confidential_notes: confidential_notes.into(),
            internal_value,
        }
    }

    pub fn into_record<S: Into<String>>(self, asset_id: S) -> PrivateAssetRecordV1 {
        PrivateAssetRecordV1 {
            asset_id: asset_id.into(),
            confidential_notes: self.confidential_notes,
            internal_value: self.internal_value,
        }
    }
}
