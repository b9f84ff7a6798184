use chrono::Utc;
use uuid::Uuid;

/// Generates an identifier that is unique within one stored dataset.
///
/// A millisecond timestamp is combined with a random suffix so that two
/// identifiers generated within the same millisecond cannot collide.
pub(crate) fn random() -> String {
    let millis = Utc::now().timestamp_millis();
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis}-{}", &random[..9])
}
