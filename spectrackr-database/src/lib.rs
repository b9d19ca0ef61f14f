pub mod config;
pub mod database;
pub mod models;

use crate::config::get_env_or_throw;
use once_cell::sync::Lazy;
use sea_orm::{Database, DatabaseConnection, DbErr};
use std::sync::Mutex;

/**
 * The global database connection
 */
static DB_CONN: Lazy<Mutex<Option<DatabaseConnection>>> = Lazy::new(|| Mutex::new(None));

/**
 * Load environment variables from .env (used by tests; the server binary calls dotenv in its main function)
 *
 * # Returns
 * @return () - The result of the operation
 */
pub fn init() {
    dotenv::dotenv().ok();
}

/**
 * Establish a connection to the database and store it for the process
 *
 * # Returns
 * @return Result<(), sea_orm::DbErr> - The result of the operation
 */
pub async fn setup() -> Result<(), DbErr> {
    let database_url = get_env_or_throw("DATABASE_URL");
    let db_conn = Database::connect(&database_url).await?;
    set_database_connection(db_conn);
    Ok(())
}

/**
 * Store an established connection as the process-wide connection
 *
 * # Arguments
 * @param conn: DatabaseConnection - The connection to store
 *
 * # Returns
 * @return () - The result of the operation
 */
pub fn set_database_connection(conn: DatabaseConnection) {
    let mut db_conn_global = DB_CONN.lock().unwrap();
    *db_conn_global = Some(conn);
}

/**
 * Get a handle on the established database connection. The handle is a cheap
 * clone of the underlying pool and is released when it goes out of scope, so
 * each request borrows and returns its session automatically.
 *
 * # Returns
 * @return Result<DatabaseConnection, sea_orm::DbErr> - The database connection or an error
 */
pub async fn get_database_connection() -> Result<DatabaseConnection, DbErr> {
    let db_conn = DB_CONN.lock().unwrap();
    if let Some(ref conn) = *db_conn {
        Ok(conn.clone())
    } else {
        Err(DbErr::Custom(
            "Database connection is not established".into(),
        ))
    }
}
