use crate::util::constants::{
    MAX_ASSET_ID_LENGTH, MAX_DESCRIPTION_LENGTH, MAX_LABEL_LENGTH, MAX_REJECTION_REASON_LENGTH,
};

/// Checks an asset id for length and charset.  Returns one message per violated rule, prefixed with
/// the field name.
///
/// # Examples
/// ```
/// use asset_approval_smart_contract::validation::field_validation::asset_id_errors;
///
/// assert!(asset_id_errors("asset_id", "A1-good_id").is_empty());
/// assert_eq!(1, asset_id_errors("asset_id", "bad id!").len());
/// ```
pub fn asset_id_errors(field: &str, asset_id: &str) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if asset_id.is_empty() {
        invalid_fields.push(format!("{}: must not be blank", field));
        return invalid_fields;
    }
    if asset_id.chars().count() > MAX_ASSET_ID_LENGTH {
        invalid_fields.push(format!(
            "{}: must be at most {} characters",
            field, MAX_ASSET_ID_LENGTH
        ));
    }
    if !asset_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        invalid_fields.push(format!(
            "{}: must only contain characters in [A-Za-z0-9_-]",
            field
        ));
    }
    invalid_fields
}

/// Checks free text such as a description or rejection reason.  The text must hold at least one
/// character, stay within the length limit and contain no control characters other than newlines
/// and tabs.  Whitespace counts as content.
pub fn text_errors(field: &str, text: &str, max_length: usize) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if text.is_empty() {
        invalid_fields.push(format!("{}: must not be blank", field));
        return invalid_fields;
    }
    if text.chars().count() > max_length {
        invalid_fields.push(format!(
            "{}: must be at most {} characters",
            field, max_length
        ));
    }
    if text
        .chars()
        .any(|c| c.is_control() && c != '\n' && c != '\t')
    {
        invalid_fields.push(format!("{}: must not contain control characters", field));
    }
    invalid_fields
}

pub fn description_errors(field: &str, description: &str) -> Vec<String> {
    text_errors(field, description, MAX_DESCRIPTION_LENGTH)
}

pub fn rejection_reason_errors(field: &str, reason: &str) -> Vec<String> {
    text_errors(field, reason, MAX_REJECTION_REASON_LENGTH)
}

/// Checks a role name or organization label.  Labels use the same charset as asset ids.
pub fn label_errors(field: &str, label: &str) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if label.is_empty() {
        invalid_fields.push(format!("{}: must not be blank", field));
        return invalid_fields;
    }
    if label.chars().count() > MAX_LABEL_LENGTH {
        invalid_fields.push(format!(
            "{}: must be at most {} characters",
            field, MAX_LABEL_LENGTH
        ));
    }
    if !label
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
    {
        invalid_fields.push(format!(
            "{}: must only contain characters in [A-Za-z0-9_.-]",
            field
        ));
    }
    invalid_fields
}
