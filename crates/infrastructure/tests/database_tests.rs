use pokedex_domain::config::DatabaseConfig;
use pokedex_infrastructure::database::{create_pool, initialize_schema};
use sqlx::sqlite::SqlitePoolOptions;

#[tokio::test]
async fn test_initialize_schema_is_idempotent() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    initialize_schema(&pool).await.unwrap();
    sqlx::query(
        "INSERT INTO pokemon (id, name, description, category, hp, attack, defense, speed)
         VALUES (25, 'Pikachu', 'Mouse', 'Electric', 35, 55, 40, 90)",
    )
    .execute(&pool)
    .await
    .unwrap();

    initialize_schema(&pool).await.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pokemon")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);
}

#[tokio::test]
async fn test_schema_columns() {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    initialize_schema(&pool).await.unwrap();

    let columns: Vec<(String, i64)> =
        sqlx::query_as("SELECT name, pk FROM pragma_table_info('pokemon') ORDER BY cid")
            .fetch_all(&pool)
            .await
            .unwrap();

    let names: Vec<&str> = columns.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(
        names,
        vec!["id", "name", "description", "category", "hp", "attack", "defense", "speed"]
    );
    assert_eq!(columns[0].1, 1);
}

#[tokio::test]
async fn test_create_pool_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pokedex.db");
    let url = format!("sqlite:{}", path.display());

    let pool = create_pool(&url, &DatabaseConfig::default()).await.unwrap();
    initialize_schema(&pool).await.unwrap();
    pool.close().await;

    assert!(path.exists());

    let reopened = create_pool(&url, &DatabaseConfig::default()).await.unwrap();
    initialize_schema(&reopened).await.unwrap();
}

#[tokio::test]
async fn test_create_pool_unreachable_path_fails() {
    let result = create_pool(
        "sqlite:/nonexistent-dir/for/pokedex/test.db",
        &DatabaseConfig::default(),
    )
    .await;

    assert!(result.is_err());
}
