//! Store client bootstrap.

use mongodb::bson::doc;
use mongodb::options::{ClientOptions, ServerApi, ServerApiVersion};
use mongodb::Client;
use tracing::info;

use crate::bids::BidRepository;
use crate::error::{StoreError, StoreResult};
use crate::jobs::JobRepository;

const JOBS_COLLECTION: &str = "jobs";
const BIDS_COLLECTION: &str = "bids";

/// Connection settings, read from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Database user
    pub user: String,
    /// Database password
    pub password: String,
    /// Cluster host, e.g. `cluster0.abcde.mongodb.net`
    pub cluster: String,
    /// Database name
    pub database: String,
}

impl StoreConfig {
    /// Create config from environment variables.
    pub fn from_env() -> StoreResult<Self> {
        Ok(Self {
            user: require_env("DB_USER")?,
            password: require_env("DB_PASSWORD")?,
            cluster: require_env("DB_CLUSTER")?,
            database: std::env::var("DB_NAME").unwrap_or_else(|_| "job-board".to_string()),
        })
    }

    /// SRV connection string for the managed cluster.
    fn connection_uri(&self) -> String {
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority",
            self.user, self.password, self.cluster
        )
    }
}

fn require_env(key: &str) -> StoreResult<String> {
    std::env::var(key).map_err(|_| StoreError::config(format!("{key} must be set")))
}

/// Handle to the document store, injected into request handlers.
///
/// Owns the long-lived driver client; created once at startup and torn
/// down explicitly on the shutdown path.
#[derive(Clone)]
pub struct Store {
    client: Client,
    jobs: JobRepository,
    bids: BidRepository,
}

impl Store {
    /// Connect to the cluster and verify connectivity with a ping.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut options = ClientOptions::parse(config.connection_uri()).await?;
        options.server_api = Some(
            ServerApi::builder()
                .version(ServerApiVersion::V1)
                .strict(true)
                .deprecation_errors(true)
                .build(),
        );
        options.app_name = Some("jobboard-api".to_string());

        let client = Client::with_options(options)?;
        client
            .database("admin")
            .run_command(doc! { "ping": 1 })
            .await?;
        info!(database = %config.database, "Connected to MongoDB");

        Ok(Self::new(client, &config.database))
    }

    /// Build a store around an existing client without pinging.
    pub fn new(client: Client, database: &str) -> Self {
        let db = client.database(database);
        Self {
            jobs: JobRepository::new(db.collection(JOBS_COLLECTION)),
            bids: BidRepository::new(db.collection(BIDS_COLLECTION)),
            client,
        }
    }

    pub fn jobs(&self) -> &JobRepository {
        &self.jobs
    }

    pub fn bids(&self) -> &BidRepository {
        &self.bids
    }

    /// Close the connection pool. Called on graceful shutdown.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        info!("MongoDB client shut down");
    }
}
