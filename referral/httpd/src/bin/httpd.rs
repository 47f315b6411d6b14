use {
    clap::Parser,
    referral_httpd::{error::Error, server::run_server},
    tracing_subscriber::EnvFilter,
};

#[derive(Parser)]
pub struct Cli {
    #[arg(long, default_value = "0.0.0.0")]
    ip: String,

    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// The database url
    #[arg(long, default_value = "postgres://localhost")]
    database_url: String,

    /// Page size used by the reporting endpoints
    #[arg(long, default_value_t = referral_sql::reporter::DEFAULT_PAGE_SIZE)]
    page_size: u64,
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    run_server(
        Some(&cli.ip),
        Some(cli.port),
        &cli.database_url,
        cli.page_size,
    )
    .await?;
    Ok(())
}
