use {
    crate::context::Context,
    actix_web::{
        Error, HttpResponse, Scope,
        error::{ErrorInternalServerError, ErrorNotFound},
        get, web,
    },
    referral_sql::{registry, reporter},
    serde::Deserialize,
    uuid::Uuid,
};

pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<u64>,
    limit: Option<u64>,
}

impl PageQuery {
    fn resolve(&self, default_page_size: u64) -> (u64, u64) {
        let page = self.page.unwrap_or(1).max(1);
        let limit = self
            .limit
            .unwrap_or(default_page_size)
            .clamp(1, MAX_PAGE_SIZE);

        (page, limit)
    }
}

pub fn parrainage_services() -> Scope {
    web::scope("/parrainages")
        .service(bonus_by_vendor)
        .service(vendor_relations)
        .service(all_relations)
}

/// All relationship edges — admin scope.
#[get("")]
pub async fn all_relations(
    query: web::Query<PageQuery>,
    app_ctx: web::Data<Context>,
) -> Result<HttpResponse, Error> {
    let (page, limit) = query.resolve(app_ctx.page_size);

    let relations = reporter::list_relations(&app_ctx.db, page, limit)
        .await
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(relations))
}

/// Per-vendor bonus totals.
#[get("/bonus-par-vendeur")]
pub async fn bonus_by_vendor(
    query: web::Query<PageQuery>,
    app_ctx: web::Data<Context>,
) -> Result<HttpResponse, Error> {
    let (page, limit) = query.resolve(app_ctx.page_size);

    let totals = reporter::list_bonus_by_vendor(&app_ctx.db, page, limit)
        .await
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(totals))
}

/// Relationship edges where the vendor is sponsor or referred — vendor scope.
#[get("/vendeur/{id}")]
pub async fn vendor_relations(
    path: web::Path<Uuid>,
    query: web::Query<PageQuery>,
    app_ctx: web::Data<Context>,
) -> Result<HttpResponse, Error> {
    let vendor_user_id = path.into_inner();
    let (page, limit) = query.resolve(app_ctx.page_size);

    registry::find_vendor(&app_ctx.db, vendor_user_id)
        .await
        .map_err(ErrorInternalServerError)?
        .ok_or_else(|| ErrorNotFound(format!("vendor not found: {vendor_user_id}")))?;

    let relations = reporter::list_vendor_relations(&app_ctx.db, vendor_user_id, page, limit)
        .await
        .map_err(ErrorInternalServerError)?;

    Ok(HttpResponse::Ok().json(relations))
}
