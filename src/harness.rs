//! Batch execution against an isolated database.
//!
//! A [`Session`] owns the process-wide database lifecycle: it drops any stale
//! database of the same name, creates a fresh one, and connects to it. Each
//! verification scenario then runs inside its own [`Scenario`] transaction
//! and rolls back, so every scenario starts from the same consistent state
//! without paying for a fresh database.
use super::*;
use tokio_postgres::tls::NoTls;
use tokio_postgres::{Client, Config, Transaction};

/// Establishes a database connection.
///
/// Connects to PostgreSQL using the `DB_URL` environment variable and spawns
/// the connection task on the tokio runtime.
///
/// # Panics
///
/// Panics if `DB_URL` is not set.
pub async fn db() -> Result<Client, PgErr> {
    log::info!("connecting to database");
    let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
    connect(url.parse()?).await
}

async fn connect(config: Config) -> Result<Client, PgErr> {
    let (client, connection) = config.connect(NoTls).await?;
    tokio::spawn(connection);
    Ok(client)
}

/// Owns one isolated database for the lifetime of a verification suite.
///
/// Acquire with [`Session::create`], release with [`Session::teardown`].
/// The session is injected into scenarios explicitly; nothing here lives in
/// ambient or global state.
pub struct Session {
    admin: Client,
    client: Client,
    database: String,
}

impl Session {
    /// Drops any stale database of this name, creates a fresh one, and
    /// connects to it. `WITH (FORCE)` severs connections left over from a
    /// prior run before the drop.
    pub async fn create(database: &str) -> Result<Self, PgErr> {
        let ref url = std::env::var("DB_URL").expect("DB_URL must be set");
        let admin = db().await?;
        log::info!("resetting database ({})", database);
        admin
            .execute(
                &format!("DROP DATABASE IF EXISTS \"{database}\" WITH (FORCE)"),
                &[],
            )
            .await?;
        admin
            .execute(&format!("CREATE DATABASE \"{database}\""), &[])
            .await?;
        let mut target: Config = url.parse()?;
        target.dbname(database);
        let client = connect(target).await?;
        Ok(Self {
            admin,
            client,
            database: database.to_string(),
        })
    }

    /// Begins one scenario transaction.
    pub async fn scenario(&mut self) -> Result<Scenario<'_>, PgErr> {
        Ok(Scenario {
            tx: self.client.transaction().await?,
        })
    }

    /// Disconnects from the database and drops it.
    pub async fn teardown(self) -> Result<(), PgErr> {
        log::info!("dropping database ({})", self.database);
        drop(self.client);
        self.admin
            .execute(
                &format!("DROP DATABASE IF EXISTS \"{}\" WITH (FORCE)", self.database),
                &[],
            )
            .await?;
        Ok(())
    }
}

/// One verification scenario: a single transaction over the session's
/// database, discarded by [`Scenario::rollback`] so the next scenario sees a
/// clean slate.
pub struct Scenario<'a> {
    pub(crate) tx: Transaction<'a>,
}

impl Scenario<'_> {
    /// Executes a generated batch as one sequential script inside the
    /// scenario transaction. Any statement failure fails the scenario;
    /// there is no partial-success interpretation and no retry.
    pub async fn execute(&self, batch: &Batch) -> Result<(), PgErr> {
        log::debug!("executing batch ({} statements)", batch.len());
        self.tx.batch_execute(&batch.script()).await
    }

    /// Discards every schema and data change the scenario made. Failures
    /// surface to the caller; a silently broken rollback would corrupt
    /// isolation for subsequent scenarios.
    pub async fn rollback(self) -> Result<(), PgErr> {
        self.tx.rollback().await
    }
}
