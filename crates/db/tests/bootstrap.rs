use sqlx::PgPool;

/// Full bootstrap test: connect, migrate, verify schema.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_full_bootstrap(pool: PgPool) {
    propdesk_db::health_check(&pool).await.unwrap();

    let tables = [
        "cities",
        "properties",
        "units",
        "move_ins",
        "move_outs",
        "notices_and_evictions",
        "payments",
        "vendor_tasks",
    ];

    for table in tables {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap_or_else(|e| panic!("{table} query failed: {e}"));
        assert_eq!(count.0, 0, "{table} should start empty");
    }
}

/// Yes/No columns only accept the two canonical spellings.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_yes_no_check_constraint(pool: PgPool) {
    let (city_id,): (i64,) = sqlx::query_as("INSERT INTO cities (name) VALUES ('Austin') RETURNING id")
        .fetch_one(&pool)
        .await
        .unwrap();
    let (property_id,): (i64,) = sqlx::query_as(
        "INSERT INTO properties (city_id, name) VALUES ($1, 'Elm') RETURNING id",
    )
    .bind(city_id)
    .fetch_one(&pool)
    .await
    .unwrap();
    let (unit_id,): (i64,) =
        sqlx::query_as("INSERT INTO units (property_id, name) VALUES ($1, '1A') RETURNING id")
            .bind(property_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let result = sqlx::query(
        "INSERT INTO vendor_tasks (city_id, property_id, unit_id, vendor_name, task, urgent) \
         VALUES ($1, $2, $3, 'Acme', 'Fix sink', 'maybe')",
    )
    .bind(city_id)
    .bind(property_id)
    .bind(unit_id)
    .execute(&pool)
    .await;

    assert!(result.is_err(), "non Yes/No value must be rejected");
}
