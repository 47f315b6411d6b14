use {
    referral_sql_migration::{Migrator, MigratorTrait},
    sea_orm::{ConnectOptions, Database, DatabaseConnection},
};

#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
}

impl Context {
    pub async fn new(database_url: &str) -> Result<Self, sea_orm::DbErr> {
        let db = Self::connect_db_with_url(database_url).await?;

        Ok(Self { db })
    }

    /// In-memory database for tests. Single connection: every pooled sqlite
    /// `:memory:` connection opens a fresh, empty database.
    pub async fn new_memory() -> Result<Self, sea_orm::DbErr> {
        let mut opt = ConnectOptions::new("sqlite::memory:".to_owned());
        opt.max_connections(1).sqlx_logging(false);

        let db = Database::connect(opt).await?;

        Ok(Self { db })
    }

    pub async fn migrate_db(&self) -> Result<(), sea_orm::DbErr> {
        Migrator::up(&self.db, None).await
    }

    pub async fn connect_db_with_url(
        database_url: &str,
    ) -> Result<DatabaseConnection, sea_orm::DbErr> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(10).sqlx_logging(false);

        match Database::connect(opt).await {
            Ok(db) => {
                #[cfg(feature = "tracing")]
                tracing::info!(database_url, "Connected to database");

                Ok(db)
            },
            Err(error) => {
                #[cfg(feature = "tracing")]
                tracing::error!(database_url, %error, "Failed to connect to database");

                Err(error)
            },
        }
    }
}
