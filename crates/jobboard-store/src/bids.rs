//! Repository for bid documents.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_document, Bson};
use mongodb::results::UpdateResult;
use mongodb::Collection;
use tracing::info;

use jobboard_models::Bid;

use crate::error::{StoreError, StoreResult};

/// Outcome of a bid insertion attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BidCreate {
    /// The bid was stored under the given id.
    Created(ObjectId),
    /// A bid for this `(email, jobId)` pair already exists; nothing stored.
    Duplicate,
}

/// Operations over the `bids` collection.
#[derive(Clone)]
pub struct BidRepository {
    collection: Collection<Bid>,
}

impl BidRepository {
    pub(crate) fn new(collection: Collection<Bid>) -> Self {
        Self { collection }
    }

    /// Insert a bid unless one already exists for the same
    /// `(email, jobId)` pair.
    ///
    /// Expressed as a single conditional write: `$setOnInsert` with upsert
    /// keyed on the uniqueness tuple, so two concurrent identical requests
    /// cannot both insert. A matched existing document reports
    /// [`BidCreate::Duplicate`].
    pub async fn create(&self, bid: &Bid) -> StoreResult<BidCreate> {
        let filter = doc! { "email": &bid.email, "jobId": &bid.job_id };
        let mut fields = to_document(bid)?;
        fields.remove("_id");

        let result = self
            .collection
            .update_one(filter, doc! { "$setOnInsert": fields })
            .upsert(true)
            .await?;

        if result.matched_count > 0 {
            return Ok(BidCreate::Duplicate);
        }
        match result.upserted_id {
            Some(Bson::ObjectId(id)) => {
                info!(inserted_id = %id, job_id = %bid.job_id, "Created bid");
                Ok(BidCreate::Created(id))
            }
            other => Err(StoreError::unexpected(format!(
                "upsert produced no object id: {other:?}"
            ))),
        }
    }

    /// Bids placed by the given bidder email.
    pub async fn list_by_bidder(&self, email: &str) -> StoreResult<Vec<Bid>> {
        let cursor = self.collection.find(doc! { "email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Bids on jobs owned by the given email, via the embedded buyer copy.
    pub async fn list_by_job_owner(&self, email: &str) -> StoreResult<Vec<Bid>> {
        let cursor = self.collection.find(doc! { "buyer.email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Merge a new status into the matched bid. Zero matches is a
    /// success with `modified_count: 0`.
    pub async fn update_status(&self, id: &ObjectId, status: &str) -> StoreResult<UpdateResult> {
        let result = self
            .collection
            .update_one(doc! { "_id": *id }, doc! { "$set": { "status": status } })
            .await?;
        Ok(result)
    }
}
