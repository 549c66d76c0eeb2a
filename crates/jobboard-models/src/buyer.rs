//! Job owner identity embedded in both collections.

use std::collections::HashMap;

use mongodb::bson::Bson;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Owner of a job posting, embedded in `Job` documents and copied into
/// `Bid` documents at creation time for query convenience.
///
/// `email` is the ownership key: gated routes compare it against the
/// authenticated identity.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Buyer {
    #[validate(email)]
    pub email: String,

    /// Display name, photo URL and whatever else the client attaches.
    #[serde(flatten)]
    pub extra: HashMap<String, Bson>,
}

impl Buyer {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            extra: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_fields_round_trip() {
        let json = r#"{"email":"a@x.com","name":"Alice","photo":"https://img/a.png"}"#;
        let buyer: Buyer = serde_json::from_str(json).unwrap();
        assert_eq!(buyer.email, "a@x.com");
        assert_eq!(buyer.extra.get("name"), Some(&Bson::String("Alice".into())));

        let back = serde_json::to_value(&buyer).unwrap();
        assert_eq!(back["photo"], "https://img/a.png");
    }

    #[test]
    fn rejects_malformed_email() {
        let buyer = Buyer::new("not-an-email");
        assert!(buyer.validate().is_err());
    }
}
