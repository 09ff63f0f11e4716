use super::constants::{
    ASSET_EVENT_TYPE_KEY, ASSET_ID_KEY, ASSET_STATUS_KEY, CALLER_ROLE_KEY, NEW_VALUE_KEY,
    PARTICIPANT_ADDRESS_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    CreateAsset,
    SubmitForApproval,
    ApproveAsset,
    RejectAsset,
    ActivateAsset,
    UpdateAsset,
    DeleteAsset,
    ReadPrivateAsset,
    AddParticipant,
    RemoveParticipant,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::CreateAsset => "create_asset",
            EventType::SubmitForApproval => "submit_for_approval",
            EventType::ApproveAsset => "approve_asset",
            EventType::RejectAsset => "reject_asset",
            EventType::ActivateAsset => "activate_asset",
            EventType::UpdateAsset => "update_asset",
            EventType::DeleteAsset => "delete_asset",
            EventType::ReadPrivateAsset => "read_private_asset",
            EventType::AddParticipant => "add_participant",
            EventType::RemoveParticipant => "remove_participant",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    pub fn for_asset_event<T: Into<String>>(event_type: EventType, asset_id: T) -> Self {
        Self::new(event_type).set_asset_id(asset_id)
    }

    pub fn set_asset_id<T: Into<String>>(mut self, asset_id: T) -> Self {
        self.attributes.push((ASSET_ID_KEY.into(), asset_id.into()));
        self
    }

    pub fn set_status<T: ToString>(mut self, status: T) -> Self {
        self.attributes
            .push((ASSET_STATUS_KEY.into(), status.to_string()));
        self
    }

    pub fn set_caller_role<T: Into<String>>(mut self, role: T) -> Self {
        self.attributes.push((CALLER_ROLE_KEY.into(), role.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }

    pub fn set_participant<T: ToString>(mut self, address: T) -> Self {
        self.attributes
            .push((PARTICIPANT_ADDRESS_KEY.into(), address.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
