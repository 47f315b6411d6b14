use {
    chrono::Utc,
    referral_sql::{Context, entity},
    sea_orm::{ActiveModelTrait, ActiveValue::Set, EntityTrait, IntoActiveModel},
    uuid::Uuid,
};

/// Fresh in-memory database with the schema applied.
pub async fn setup_context() -> Context {
    let context = Context::new_memory().await.expect("Can't open database");
    context.migrate_db().await.expect("Can't run migrations");

    context
}

pub async fn seed_pack(context: &Context, key: &str, price: &str) {
    entity::packs::ActiveModel {
        key: Set(key.to_owned()),
        price: Set(price.to_owned()),
    }
    .insert(&context.db)
    .await
    .expect("Can't insert pack");
}

/// Create a user and its vendor profile in one go, with an empty wallet.
/// The email is derived from the name, so names must be unique per test.
pub async fn seed_vendor(
    context: &Context,
    name: &str,
    sponsor_id: Option<Uuid>,
    pack_key: &str,
) -> Uuid {
    let user_id = Uuid::new_v4();
    let now = Utc::now().naive_utc();

    entity::users::ActiveModel {
        id: Set(user_id),
        name: Set(name.to_owned()),
        email: Set(format!("{name}@example.com")),
        created_at: Set(now),
    }
    .insert(&context.db)
    .await
    .expect("Can't insert user");

    entity::vendors::ActiveModel {
        user_id: Set(user_id),
        sponsor_id: Set(sponsor_id),
        pack_key: Set(pack_key.to_owned()),
        wallet_balance: Set("0.00".to_owned()),
        created_at: Set(now),
    }
    .insert(&context.db)
    .await
    .expect("Can't insert vendor");

    user_id
}

pub async fn wallet_balance(context: &Context, user_id: Uuid) -> String {
    entity::vendors::Entity::find_by_id(user_id)
        .one(&context.db)
        .await
        .expect("Can't fetch vendor")
        .expect("Vendor not found")
        .wallet_balance
}

/// Rewire a sponsor pointer, bypassing the engine. Used to corrupt the
/// sponsor graph in cycle tests.
pub async fn set_sponsor(context: &Context, user_id: Uuid, sponsor_id: Option<Uuid>) {
    let vendor = entity::vendors::Entity::find_by_id(user_id)
        .one(&context.db)
        .await
        .expect("Can't fetch vendor")
        .expect("Vendor not found");

    let mut vendor = vendor.into_active_model();
    vendor.sponsor_id = Set(sponsor_id);
    vendor.update(&context.db).await.expect("Can't update vendor");
}

/// Overwrite a wallet balance, bypassing the engine. Used to provoke
/// mid-chain storage failures in rollback tests.
pub async fn set_wallet_balance(context: &Context, user_id: Uuid, balance: &str) {
    let vendor = entity::vendors::Entity::find_by_id(user_id)
        .one(&context.db)
        .await
        .expect("Can't fetch vendor")
        .expect("Vendor not found");

    let mut vendor = vendor.into_active_model();
    vendor.wallet_balance = Set(balance.to_owned());
    vendor.update(&context.db).await.expect("Can't update vendor");
}
