//! Field-level validation for profiles.
use super::Profile;

/// A single invalid field and the reason it was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Wire name of the field (`name`, `clientId`, `clientSecret`).
    pub field: &'static str,
    pub message: &'static str,
}

const NAME_REQUIRED: FieldViolation = FieldViolation {
    field: "name",
    message: "profile name is required",
};
const CLIENT_ID_EMPTY: FieldViolation = FieldViolation {
    field: "clientId",
    message: "client id may not be empty",
};
const CLIENT_SECRET_REQUIRED: FieldViolation = FieldViolation {
    field: "clientSecret",
    message: "client secret is required",
};

/// Check every field independently and return all violations in field order.
pub fn validate(profile: &Profile) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if profile.name.trim().is_empty() {
        violations.push(NAME_REQUIRED);
    }
    if profile.has_sentinel_client_id() {
        violations.push(CLIENT_ID_EMPTY);
    }
    if profile.client_secret.trim().is_empty() {
        violations.push(CLIENT_SECRET_REQUIRED);
    }

    violations
}
