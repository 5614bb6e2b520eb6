pub mod auth;
pub mod categories;
pub mod customers;
pub mod enquiries;
pub mod join_requests;
pub mod locations;
pub mod maintenance;

pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}
