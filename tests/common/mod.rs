//! Shared fixtures for the integration suites.

use std::path::PathBuf;

use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use storefront::db::{DbPool, establish_connection_pool};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// A throwaway SQLite database, fully migrated, removed again when the
/// fixture drops. Lives under the system temp dir so concurrently
/// running test binaries never collide on the working directory.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let path = std::env::temp_dir().join(filename);
        std::fs::remove_file(&path).ok();

        let database_url = path.to_string_lossy();
        let pool = establish_connection_pool(&database_url)
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");

        TestDb { path, pool }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        // The -shm and -wal sidecars appear when SQLite runs in WAL mode.
        for suffix in ["", "-shm", "-wal"] {
            let mut sidecar = self.path.clone().into_os_string();
            sidecar.push(suffix);
            std::fs::remove_file(sidecar).ok();
        }
    }
}
