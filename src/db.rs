use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbBackend, Statement};

pub type OrmConn = DatabaseConnection;

/// Create a SeaORM connection.
pub async fn create_orm_conn(database_url: &str) -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(database_url.to_owned());
    options.sqlx_logging(false);
    let conn = Database::connect(options).await?;
    Ok(conn)
}

/// Apply the SQL files under `migrations/` through sqlx's migrator.
pub async fn run_migrations(conn: &DatabaseConnection) -> Result<()> {
    let pool = conn.get_postgres_connection_pool();
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Names of the tables visible in the current schema.
pub async fn list_collections(conn: &DatabaseConnection) -> Result<Vec<String>, sea_orm::DbErr> {
    let rows = conn
        .query_all(Statement::from_string(
            DbBackend::Postgres,
            "SELECT table_name::text AS table_name FROM information_schema.tables \
             WHERE table_schema = current_schema() \
             AND table_name <> '_sqlx_migrations' \
             ORDER BY table_name",
        ))
        .await?;

    rows.iter()
        .map(|row| row.try_get::<String>("", "table_name"))
        .collect()
}
