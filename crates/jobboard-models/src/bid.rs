//! Bid document.

use std::collections::HashMap;

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Buyer;

/// One bidder's application to a job, stored in the `bids` collection.
///
/// `job_id` is a weak reference to a `Job` document id (hex string, no
/// referential integrity). The store enforces at most one bid per
/// `(email, jobId)` pair. `buyer` is the job owner's identity copied in
/// at creation so owner-side listing is a single filter.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Bid {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Bidder identity.
    #[validate(email)]
    pub email: String,

    #[serde(rename = "jobId")]
    #[validate(length(min = 1, message = "jobId must not be empty"))]
    pub job_id: String,

    /// Free-text lifecycle marker, mutated by the job owner.
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,

    /// Job owner's identity, copied from the job at creation time.
    #[validate(nested)]
    pub buyer: Buyer,

    #[serde(flatten)]
    pub extra: HashMap<String, Bson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "email": "bidder@x.com",
            "jobId": "65f1a2b3c4d5e6f7a8b9c0d1",
            "status": "Pending",
            "price": 120,
            "comment": "Can start today",
            "deadline": "2024-07-01",
            "buyer": {"email": "owner@x.com"},
            "job_title": "Logo Design"
        }"#
    }

    #[test]
    fn deserializes_with_job_id_rename() {
        let bid: Bid = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(bid.job_id, "65f1a2b3c4d5e6f7a8b9c0d1");
        assert_eq!(bid.status, "Pending");
        assert_eq!(bid.buyer.email, "owner@x.com");
        assert!(bid.validate().is_ok());

        let value = serde_json::to_value(&bid).unwrap();
        assert_eq!(value["jobId"], "65f1a2b3c4d5e6f7a8b9c0d1");
        assert!(value.get("job_id").is_none());
    }

    #[test]
    fn bidder_email_is_validated() {
        let mut bid: Bid = serde_json::from_str(sample_json()).unwrap();
        bid.email = "broken".into();
        assert!(bid.validate().is_err());
    }

    #[test]
    fn extra_posting_fields_survive() {
        let bid: Bid = serde_json::from_str(sample_json()).unwrap();
        let title = bid.extra.get("job_title").expect("extra field kept");
        assert_eq!(serde_json::to_value(title).unwrap(), "Logo Design");
    }
}
