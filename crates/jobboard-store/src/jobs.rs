//! Repository for job documents.

use futures_util::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_document};
use mongodb::results::{DeleteResult, InsertOneResult, UpdateResult};
use mongodb::Collection;
use tracing::info;

use jobboard_models::Job;

use crate::error::StoreResult;
use crate::query::{deadline_sort, job_search_filter, JobSearch};

/// Operations over the `jobs` collection. Each method is one driver call.
#[derive(Clone)]
pub struct JobRepository {
    collection: Collection<Job>,
}

impl JobRepository {
    pub(crate) fn new(collection: Collection<Job>) -> Self {
        Self { collection }
    }

    /// All jobs, in natural store order.
    pub async fn list_all(&self) -> StoreResult<Vec<Job>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// One job by id, `None` when no document matches.
    pub async fn get(&self, id: &ObjectId) -> StoreResult<Option<Job>> {
        Ok(self.collection.find_one(doc! { "_id": *id }).await?)
    }

    /// Insert a new job document.
    pub async fn create(&self, job: &Job) -> StoreResult<InsertOneResult> {
        let result = self.collection.insert_one(job).await?;
        info!(inserted_id = %result.inserted_id, "Created job");
        Ok(result)
    }

    /// Jobs owned by the given buyer email.
    pub async fn list_by_owner(&self, email: &str) -> StoreResult<Vec<Job>> {
        let cursor = self.collection.find(doc! { "buyer.email": email }).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Delete a job, scoped to its owner: a matching id owned by someone
    /// else deletes nothing (`deleted_count: 0`).
    pub async fn delete(&self, id: &ObjectId, owner_email: &str) -> StoreResult<DeleteResult> {
        let result = self
            .collection
            .delete_one(doc! { "_id": *id, "buyer.email": owner_email })
            .await?;
        Ok(result)
    }

    /// Replace all fields of the matched document, inserting a fresh one
    /// when the id does not match. The generated id of an upserted
    /// document differs from the requested id; callers read
    /// `upserted_id` to detect that path.
    pub async fn upsert(&self, id: &ObjectId, job: &Job) -> StoreResult<UpdateResult> {
        let mut fields = to_document(job)?;
        // Never rewrite the identity of an existing document.
        fields.remove("_id");

        let result = self
            .collection
            .update_one(doc! { "_id": *id }, doc! { "$set": fields })
            .upsert(true)
            .await?;
        Ok(result)
    }

    /// Paginated search: title regex + optional category, sorted by
    /// deadline, `skip = (page-1)*size`, `limit = size`.
    pub async fn search(&self, params: &JobSearch) -> StoreResult<Vec<Job>> {
        let filter = job_search_filter(&params.search, params.category.as_deref());
        let cursor = self
            .collection
            .find(filter)
            .sort(deadline_sort(params.sort))
            .skip(params.skip())
            .limit(params.size)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    /// Total count for the same filter construction, ignoring pagination.
    pub async fn count(&self, search: &str, category: Option<&str>) -> StoreResult<u64> {
        let filter = job_search_filter(search, category);
        Ok(self.collection.count_documents(filter).await?)
    }
}
