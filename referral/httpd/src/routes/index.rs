use {
    crate::context::Context,
    actix_web::{Error, HttpResponse, Responder, error::ErrorInternalServerError, get, web},
    referral_sql::entity,
    sea_orm::{EntityTrait, PaginatorTrait},
};

#[get("/")]
pub async fn index() -> impl Responder {
    "OK"
}

#[derive(serde::Serialize, Default)]
struct UpResponse {
    relation_count: u64,
}

#[get("/up")]
pub async fn up(app_ctx: web::Data<Context>) -> Result<impl Responder, Error> {
    // This ensures the database is up
    let relation_count = entity::referral_edges::Entity::find()
        .count(&app_ctx.db)
        .await
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(UpResponse { relation_count }))
}
