use {
    crate::{context::Context, error::Error, routes},
    actix_web::{App, HttpServer, middleware::Logger, web},
};

/// Run the HTTP server exposing the referral read endpoints.
pub async fn run_server(
    ip: Option<&str>,
    port: Option<u16>,
    database_url: &str,
    page_size: u64,
) -> Result<(), Error> {
    let port = port
        .or_else(|| {
            std::env::var("PORT")
                .ok()
                .and_then(|val| val.parse::<u16>().ok())
        })
        .unwrap_or(8080);
    let ip = ip.unwrap_or("0.0.0.0");

    let context = Context::new(database_url, page_size).await?;

    tracing::info!(ip, port, "Starting referral httpd");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(routes::index::index)
            .service(routes::index::up)
            .service(routes::parrainages::parrainage_services())
            .app_data(web::Data::new(context.clone()))
    })
    .bind((ip, port))?
    .run()
    .await?;

    Ok(())
}
