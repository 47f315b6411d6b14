use {
    actix_web::{App, test, web},
    assert_json_diff::assert_json_include,
    referral_httpd::{context::Context, routes},
    referral_sql::ledger,
    referral_testing::{seed_pack, seed_vendor, setup_context},
    serde_json::json,
    uuid::Uuid,
};

async fn build_contexts() -> (referral_sql::Context, Context) {
    let sql_context = setup_context().await;
    let app_context = Context::from(sql_context.clone());

    (sql_context, app_context)
}

macro_rules! build_service {
    ($context:expr) => {
        test::init_service(
            App::new()
                .service(routes::index::index)
                .service(routes::index::up)
                .service(routes::parrainages::parrainage_services())
                .app_data(web::Data::new($context.clone())),
        )
        .await
    };
}

#[tokio::test]
async fn index_and_up() {
    let (_sql, context) = build_contexts().await;
    let app = build_service!(context);

    let req = test::TestRequest::get().uri("/").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "OK");

    let req = test::TestRequest::get().uri("/up").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_json_include!(actual: body, expected: json!({ "relation_count": 0 }));
}

#[tokio::test]
async fn admin_listing_serializes_relations() -> anyhow::Result<()> {
    let (sql, context) = build_contexts().await;

    seed_pack(&sql, "gold", "100.00").await;
    seed_pack(&sql, "basic", "10.00").await;
    let alice = seed_vendor(&sql, "alice", None, "gold").await;
    let bruno = seed_vendor(&sql, "bruno", Some(alice), "basic").await;
    ledger::apply_registration(&sql.db, bruno).await?;

    let app = build_service!(context);
    let req = test::TestRequest::get().uri("/parrainages").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_json_include!(
        actual: body,
        expected: json!({
            "page": 1,
            "pageSize": 10,
            "totalItems": 1,
            "totalPages": 1,
            "data": [{
                "niveau": 1,
                "bonus": "20.00",
                "pourcentage": "20.00",
                "parrain": { "id": alice, "nom": "alice", "email": "alice@example.com" },
                "parrained": { "id": bruno, "nom": "bruno", "email": "bruno@example.com" },
            }],
        })
    );

    Ok(())
}

#[tokio::test]
async fn bonus_by_vendor_totals() -> anyhow::Result<()> {
    let (sql, context) = build_contexts().await;

    seed_pack(&sql, "gold", "100.00").await;
    seed_pack(&sql, "silver", "50.00").await;
    seed_pack(&sql, "basic", "10.00").await;

    let alice = seed_vendor(&sql, "alice", None, "gold").await;
    let bruno = seed_vendor(&sql, "bruno", Some(alice), "silver").await;
    ledger::apply_registration(&sql.db, bruno).await?;
    let chloe = seed_vendor(&sql, "chloe", Some(bruno), "basic").await;
    ledger::apply_registration(&sql.db, chloe).await?;

    let app = build_service!(context);
    let req = test::TestRequest::get()
        .uri("/parrainages/bonus-par-vendeur")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    // alice: 20.00 (bruno L1) + 10.00 (chloe L2); bruno: 10.00 (chloe L1).
    assert_json_include!(
        actual: body,
        expected: json!({
            "totalItems": 2,
            "data": [
                { "vendeur": { "nom": "alice" }, "totalBonus": "30.00", "pack": "gold" },
                { "vendeur": { "nom": "bruno" }, "totalBonus": "10.00", "pack": "silver" },
            ],
        })
    );

    Ok(())
}

#[tokio::test]
async fn vendor_listing_marks_direct_edges() -> anyhow::Result<()> {
    let (sql, context) = build_contexts().await;

    seed_pack(&sql, "gold", "100.00").await;
    seed_pack(&sql, "basic", "10.00").await;

    let alice = seed_vendor(&sql, "alice", None, "gold").await;
    let bruno = seed_vendor(&sql, "bruno", Some(alice), "basic").await;
    ledger::apply_registration(&sql.db, bruno).await?;

    let app = build_service!(context);
    let req = test::TestRequest::get()
        .uri(&format!("/parrainages/vendeur/{alice}"))
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_json_include!(
        actual: body,
        expected: json!({
            "totalItems": 1,
            "data": [{ "niveau": 1, "parrainDirect": true }],
        })
    );

    Ok(())
}

#[tokio::test]
async fn unknown_vendor_is_not_found() {
    let (_sql, context) = build_contexts().await;
    let app = build_service!(context);

    let req = test::TestRequest::get()
        .uri(&format!("/parrainages/vendeur/{}", Uuid::new_v4()))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn page_past_the_end_is_empty() -> anyhow::Result<()> {
    let (sql, context) = build_contexts().await;

    seed_pack(&sql, "gold", "100.00").await;
    seed_pack(&sql, "basic", "10.00").await;
    let alice = seed_vendor(&sql, "alice", None, "gold").await;
    let bruno = seed_vendor(&sql, "bruno", Some(alice), "basic").await;
    ledger::apply_registration(&sql.db, bruno).await?;

    let app = build_service!(context);
    let req = test::TestRequest::get()
        .uri("/parrainages?page=4&limit=10")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_json_include!(
        actual: body,
        expected: json!({ "page": 4, "totalItems": 1, "totalPages": 1, "data": [] })
    );

    // Even the largest representable page number comes back as an empty page.
    let req = test::TestRequest::get()
        .uri(&format!("/parrainages?page={}&limit=10", u64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_json_include!(
        actual: body,
        expected: json!({ "totalItems": 1, "totalPages": 1, "data": [] })
    );

    Ok(())
}
