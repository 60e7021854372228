//! Integration tests for the shop and product ownership checks.
//!
//! Both checks are plain existence queries: a miss is `false`, never an
//! error. A soft-deleted shop grants nothing; a soft-deleted product is
//! still attributed to its (live) shop's owner.

use shopfront_db::models::product::CreateProduct;
use shopfront_db::models::shop::CreateShop;
use shopfront_db::repositories::{ProductRepo, ShopRepo};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_shop(user_id: Uuid) -> CreateShop {
    CreateShop {
        user_id,
        name: "Ownership Shop".to_string(),
    }
}

fn new_product(shop_id: Uuid) -> CreateProduct {
    CreateProduct {
        shop_id,
        category_id: Uuid::new_v4(),
        name: "Owned thing".to_string(),
        description: "owned".to_string(),
        image_url: "https://img.example/owned.png".to_string(),
        price: 1000,
        stock: 1,
    }
}

// ---------------------------------------------------------------------------
// Shop ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shop_owner_is_recognised(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();

    assert!(ShopRepo::is_owner(&pool, owner, shop.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_shop_non_owner_and_unknown_shop_are_false(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();

    assert!(!ShopRepo::is_owner(&pool, Uuid::new_v4(), shop.id).await.unwrap());
    assert!(!ShopRepo::is_owner(&pool, owner, Uuid::new_v4()).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_deleted_shop_has_no_owner(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();
    assert!(ShopRepo::soft_delete(&pool, shop.id).await.unwrap());

    assert!(!ShopRepo::is_owner(&pool, owner, shop.id).await.unwrap());
    assert!(ShopRepo::find_by_id(&pool, shop.id).await.unwrap().is_none());
}

// ---------------------------------------------------------------------------
// Product ownership
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_owner_follows_the_shop(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();
    let product = ProductRepo::create(&pool, &new_product(shop.id)).await.unwrap();

    assert!(ProductRepo::is_owner(&pool, owner, product.id).await.unwrap());
    assert!(!ProductRepo::is_owner(&pool, Uuid::new_v4(), product.id)
        .await
        .unwrap());
    assert!(!ProductRepo::is_owner(&pool, owner, Uuid::new_v4())
        .await
        .unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_ownership_ignores_product_deletion(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();
    let product = ProductRepo::create(&pool, &new_product(shop.id)).await.unwrap();
    ProductRepo::soft_delete(&pool, product.id).await.unwrap();

    assert!(ProductRepo::is_owner(&pool, owner, product.id).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_product_ownership_requires_live_shop(pool: PgPool) {
    let owner = Uuid::new_v4();
    let shop = ShopRepo::create(&pool, &new_shop(owner)).await.unwrap();
    let product = ProductRepo::create(&pool, &new_product(shop.id)).await.unwrap();
    ShopRepo::soft_delete(&pool, shop.id).await.unwrap();

    assert!(!ProductRepo::is_owner(&pool, owner, product.id).await.unwrap());
}
