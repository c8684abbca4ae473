//! Integration tests for the record repositories.
//!
//! Exercises create, read with joined location names, full-row update,
//! location-filtered paging and delete against a real database.

use chrono::NaiveDate;
use propdesk_core::location::LocationFilter;
use propdesk_core::pagination::PageRequest;
use propdesk_core::yes_no::YesNo;
use propdesk_db::models::location::{CreateCity, CreateProperty, CreateUnit};
use propdesk_db::models::move_in::MoveInForm;
use propdesk_db::models::payment::PaymentForm;
use propdesk_db::models::vendor_task::VendorTaskForm;
use propdesk_db::repositories::{LocationRepo, MoveInRepo, PaymentRepo, VendorTaskRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Chain {
    city: i64,
    property: i64,
    unit: i64,
}

async fn chain(pool: &PgPool, city: &str, property: &str, unit: &str) -> Chain {
    let c = match LocationRepo::list_cities(pool)
        .await
        .unwrap()
        .into_iter()
        .find(|c| c.name == city)
    {
        Some(existing) => existing,
        None => LocationRepo::create_city(
            pool,
            &CreateCity {
                name: Some(city.to_string()),
            },
        )
        .await
        .unwrap(),
    };
    let p = LocationRepo::create_property(
        pool,
        &CreateProperty {
            city_id: Some(c.id),
            name: Some(property.to_string()),
        },
    )
    .await
    .unwrap();
    let u = LocationRepo::create_unit(
        pool,
        &CreateUnit {
            property_id: Some(p.id),
            name: Some(unit.to_string()),
        },
    )
    .await
    .unwrap();
    Chain {
        city: c.id,
        property: p.id,
        unit: u.id,
    }
}

fn move_in(chain: &Chain, tenant: &str) -> MoveInForm {
    MoveInForm {
        city_id: Some(chain.city),
        property_id: Some(chain.property),
        unit_id: Some(chain.unit),
        tenant_name: Some(tenant.to_string()),
        ..Default::default()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_joined_names(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let mut form = move_in(&chain, "Jane Roe");
    form.move_in_date = NaiveDate::from_ymd_opt(2024, 3, 1);
    form.handed_keys = Some(YesNo::Yes);

    let created = MoveInRepo::create(&pool, &form).await.unwrap();
    assert_eq!(created.city_name, "Austin");
    assert_eq!(created.property_name, "Elm");
    assert_eq!(created.unit_name, "1A");
    assert_eq!(created.handed_keys.as_deref(), Some("Yes"));
    assert_eq!(created.move_in_date, NaiveDate::from_ymd_opt(2024, 3, 1));

    let found = MoveInRepo::find_by_id(&pool, created.id).await.unwrap().unwrap();
    assert_eq!(found.tenant_name, "Jane Roe");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_every_field(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let mut form = move_in(&chain, "Jane Roe");
    form.notes = Some("first".to_string());
    let created = MoveInRepo::create(&pool, &form).await.unwrap();

    let replacement = move_in(&chain, "John Doe");
    let updated = MoveInRepo::update(&pool, created.id, &replacement)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.tenant_name, "John Doe");
    assert_eq!(updated.notes, None);

    let missing = MoveInRepo::update(&pool, created.id + 1000, &replacement)
        .await
        .unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_and_pages_newest_first(pool: PgPool) {
    let elm = chain(&pool, "Austin", "Elm", "1A").await;
    let oak = chain(&pool, "Austin", "Oak", "9Z").await;
    for i in 0..3 {
        MoveInRepo::create(&pool, &move_in(&elm, &format!("Elm {i}"))).await.unwrap();
    }
    MoveInRepo::create(&pool, &move_in(&oak, "Oak tenant")).await.unwrap();

    let everything = LocationFilter::default();
    let (rows, total) = MoveInRepo::list(&pool, everything, PageRequest::new(Some(1), Some(2), 10, 100))
        .await
        .unwrap();
    assert_eq!(total, 4);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].tenant_name, "Oak tenant");

    let elm_only = LocationFilter {
        city: Some(elm.city),
        property: Some(elm.property),
        unit: None,
    };
    let (rows, total) = MoveInRepo::list(&pool, elm_only, PageRequest::new(Some(2), Some(2), 10, 100))
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].tenant_name, "Elm 0");

    let (rows, total) = MoveInRepo::list(&pool, elm_only, PageRequest::new(Some(9), Some(2), 10, 100))
        .await
        .unwrap();
    assert_eq!(total, 3);
    assert!(rows.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_reports_whether_row_existed(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let created = MoveInRepo::create(&pool, &move_in(&chain, "Jane Roe")).await.unwrap();

    assert!(MoveInRepo::delete(&pool, created.id).await.unwrap());
    assert!(!MoveInRepo::delete(&pool, created.id).await.unwrap());
    assert!(MoveInRepo::find_by_id(&pool, created.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_payment_amounts_round_trip(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let form = PaymentForm {
        city_id: Some(chain.city),
        property_id: Some(chain.property),
        unit_id: Some(chain.unit),
        tenant_name: Some("Jane Roe".to_string()),
        amount_owed: Some(1250.5),
        amount_paid: Some(1000.0),
        reversed_payment: Some(YesNo::No),
        ..Default::default()
    };
    let created = PaymentRepo::create(&pool, &form).await.unwrap();
    assert_eq!(created.amount_owed, Some(1250.5));
    assert_eq!(created.amount_paid, Some(1000.0));
    assert_eq!(created.reversed_payment.as_deref(), Some("No"));
    assert_eq!(created.permanent, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_update_store_the_same_columns(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let full = PaymentForm {
        city_id: Some(chain.city),
        property_id: Some(chain.property),
        unit_id: Some(chain.unit),
        tenant_name: Some("Jane Roe".to_string()),
        payment_date: NaiveDate::from_ymd_opt(2026, 3, 1),
        amount_owed: Some(900.0),
        amount_paid: Some(450.25),
        status: Some("Partial".to_string()),
        reversed_payment: Some(YesNo::Yes),
        permanent: Some(YesNo::No),
        notes: Some("second half due on the 15th".to_string()),
    };
    let blank = PaymentForm {
        city_id: full.city_id,
        property_id: full.property_id,
        unit_id: full.unit_id,
        tenant_name: Some("Placeholder".to_string()),
        ..Default::default()
    };

    let created = PaymentRepo::create(&pool, &full).await.unwrap();
    let placeholder = PaymentRepo::create(&pool, &blank).await.unwrap();
    let updated = PaymentRepo::update(&pool, placeholder.id, &full)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.tenant_name, created.tenant_name);
    assert_eq!(updated.payment_date, created.payment_date);
    assert_eq!(updated.amount_owed, created.amount_owed);
    assert_eq!(updated.amount_paid, created.amount_paid);
    assert_eq!(updated.status, created.status);
    assert_eq!(updated.reversed_payment, created.reversed_payment);
    assert_eq!(updated.permanent, created.permanent);
    assert_eq!(updated.notes, created.notes);
    assert_eq!(updated.unit_name, "1A");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_vendor_task_create_and_list(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    let form = VendorTaskForm {
        city_id: Some(chain.city),
        property_id: Some(chain.property),
        unit_id: Some(chain.unit),
        vendor_name: Some("Acme Plumbing".to_string()),
        task: Some("Fix \"leaky\" sink".to_string()),
        urgent: Some(YesNo::Yes),
        ..Default::default()
    };
    VendorTaskRepo::create(&pool, &form).await.unwrap();

    let (rows, total) = VendorTaskRepo::list(&pool, LocationFilter::default(), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(rows[0].task, "Fix \"leaky\" sink");
    assert_eq!(rows[0].urgent.as_deref(), Some("Yes"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_location_in_use_cannot_be_deleted(pool: PgPool) {
    let chain = chain(&pool, "Austin", "Elm", "1A").await;
    MoveInRepo::create(&pool, &move_in(&chain, "Jane Roe")).await.unwrap();

    let result = sqlx::query("DELETE FROM units WHERE id = $1")
        .bind(chain.unit)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "records must keep their unit");
}
