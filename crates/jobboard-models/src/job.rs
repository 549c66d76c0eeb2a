//! Job posting document.

use std::collections::HashMap;

use chrono::NaiveDate;
use mongodb::bson::{oid::ObjectId, Bson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Buyer;

/// A posted task in the `jobs` collection.
///
/// `_id` is assigned by the store on insert and absent on create payloads.
/// `deadline` serializes as `YYYY-MM-DD`, which keeps lexicographic store
/// ordering identical to chronological ordering for the sort path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Job {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,

    /// Title, the search target for substring matching.
    #[validate(length(min = 1, message = "job_title must not be empty"))]
    pub job_title: String,

    /// Exact-match filter key.
    #[validate(length(min = 1, message = "category must not be empty"))]
    pub category: String,

    /// Sort key for paginated search.
    pub deadline: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,

    /// Owner; `buyer.email` gates update/delete/list-by-owner.
    #[validate(nested)]
    pub buyer: Buyer,

    /// Arbitrary additional posting fields, persisted verbatim.
    #[serde(flatten)]
    pub extra: HashMap<String, Bson>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "job_title": "Logo Design",
            "category": "design",
            "deadline": "2024-06-30",
            "description": "A flat logo",
            "min_price": 100,
            "max_price": 150.5,
            "buyer": {"email": "a@x.com", "name": "Alice"},
            "total_bids": 3
        }"#
    }

    #[test]
    fn deserializes_client_payload() {
        let job: Job = serde_json::from_str(sample_json()).unwrap();
        assert!(job.id.is_none());
        assert_eq!(job.job_title, "Logo Design");
        assert_eq!(job.deadline, NaiveDate::from_ymd_opt(2024, 6, 30).unwrap());
        assert_eq!(job.min_price, Some(100.0));
        assert_eq!(job.buyer.email, "a@x.com");
        let total_bids = job.extra.get("total_bids").expect("extra field kept");
        assert_eq!(serde_json::to_value(total_bids).unwrap(), serde_json::json!(3));
        assert!(job.validate().is_ok());
    }

    #[test]
    fn missing_id_is_not_serialized() {
        let job: Job = serde_json::from_str(sample_json()).unwrap();
        let value = serde_json::to_value(&job).unwrap();
        assert!(value.get("_id").is_none());
        assert_eq!(value["deadline"], "2024-06-30");
    }

    #[test]
    fn empty_title_fails_validation() {
        let mut job: Job = serde_json::from_str(sample_json()).unwrap();
        job.job_title.clear();
        assert!(job.validate().is_err());
    }

    #[test]
    fn bad_buyer_email_fails_validation() {
        let mut job: Job = serde_json::from_str(sample_json()).unwrap();
        job.buyer.email = "nope".into();
        assert!(job.validate().is_err());
    }
}
