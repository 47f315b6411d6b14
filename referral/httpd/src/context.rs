use {crate::error::Error, sea_orm::DatabaseConnection};

#[derive(Clone)]
pub struct Context {
    pub db: DatabaseConnection,
    /// Page size used by the reporting endpoints when the request doesn't
    /// pass an explicit `limit`.
    pub page_size: u64,
}

impl Context {
    /// Connect and bring the schema up to date.
    pub async fn new(database_url: &str, page_size: u64) -> Result<Self, Error> {
        let sql_context = referral_sql::Context::new(database_url).await?;
        sql_context.migrate_db().await?;

        Ok(Self {
            db: sql_context.db,
            page_size,
        })
    }
}

impl From<referral_sql::Context> for Context {
    fn from(ctx: referral_sql::Context) -> Self {
        Self {
            db: ctx.db,
            page_size: referral_sql::reporter::DEFAULT_PAGE_SIZE,
        }
    }
}
