use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// The eight read-only tables of the agri store. The bootstrap only creates
/// what is missing; real schema ownership lives with the external database.
const TABLES: &[(&str, &str)] = &[
    (
        "a001_company",
        r#"
        CREATE TABLE a001_company (
            id TEXT PRIMARY KEY NOT NULL,
            name TEXT NOT NULL,
            cuit TEXT NOT NULL,
            address TEXT NOT NULL
        );
    "#,
    ),
    (
        "a002_parcel",
        r#"
        CREATE TABLE a002_parcel (
            id TEXT PRIMARY KEY NOT NULL,
            company_id TEXT NOT NULL,
            name TEXT NOT NULL,
            hectares REAL NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "a003_planting",
        r#"
        CREATE TABLE a003_planting (
            id TEXT PRIMARY KEY NOT NULL,
            parcel_id TEXT NOT NULL,
            crop TEXT NOT NULL,
            season TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "a004_harvest",
        r#"
        CREATE TABLE a004_harvest (
            id TEXT PRIMARY KEY NOT NULL,
            planting_id TEXT NOT NULL,
            date TEXT NOT NULL,
            tonnes REAL NOT NULL DEFAULT 0,
            tch REAL
        );
    "#,
    ),
    (
        "a005_machine",
        r#"
        CREATE TABLE a005_machine (
            id TEXT PRIMARY KEY NOT NULL,
            company_id TEXT NOT NULL,
            name TEXT NOT NULL,
            kind TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "a006_machine_job",
        r#"
        CREATE TABLE a006_machine_job (
            id TEXT PRIMARY KEY NOT NULL,
            machine_id TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            hectares REAL NOT NULL DEFAULT 0,
            date TEXT NOT NULL
        );
    "#,
    ),
    (
        "a007_product",
        r#"
        CREATE TABLE a007_product (
            id TEXT PRIMARY KEY NOT NULL,
            company_id TEXT NOT NULL,
            name TEXT NOT NULL,
            stock REAL NOT NULL DEFAULT 0,
            unit TEXT NOT NULL DEFAULT ''
        );
    "#,
    ),
    (
        "a008_cheque",
        r#"
        CREATE TABLE a008_cheque (
            id TEXT PRIMARY KEY NOT NULL,
            company_id TEXT NOT NULL,
            number TEXT NOT NULL,
            amount REAL NOT NULL DEFAULT 0,
            due_date TEXT NOT NULL,
            status TEXT NOT NULL DEFAULT 'pendiente'
        );
    "#,
    ),
];

/// Create missing tables on `conn`. Shared with the in-memory test databases.
pub async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, ddl) in TABLES {
        let check = format!(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
            table
        );
        let exists = conn
            .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
            .await?;

        if exists.is_empty() {
            tracing::info!("Creating {} table", table);
            conn.execute(Statement::from_string(
                DatabaseBackend::Sqlite,
                ddl.to_string(),
            ))
            .await?;
        }
    }
    Ok(())
}

pub async fn initialize_database(db_url: &str) -> anyhow::Result<()> {
    // For sqlite file URLs make sure the parent directory exists; other
    // backends pass through untouched.
    if let Some(path) = db_url
        .strip_prefix("sqlite://")
        .map(|rest| rest.split('?').next().unwrap_or(rest))
    {
        if path != ":memory:" {
            if let Some(parent) = std::path::Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let conn = Database::connect(db_url).await?;
    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Best-effort teardown on process exit. Closes the underlying sqlx pool;
/// nothing to report on failure beyond the log line.
pub async fn shutdown() {
    if let Some(conn) = DB_CONN.get() {
        conn.get_sqlite_connection_pool().close().await;
        tracing::info!("Database connection closed");
    }
}
