use std::path::{Path, PathBuf};

use autodb::adapter::outbound::sqlite::database::connection::ConnectionOptions;
use autodb::adapter::outbound::sqlite::Database;
use tempfile::TempDir;

/// File-backed SQLite database in its own temporary directory.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
    db: Database,
}

impl TempDb {
    pub fn create(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(format!("autodb-{name}.db"));
        let db = Database::open(&ConnectionOptions::new(path.to_string_lossy()))
            .expect("open sqlite database");
        Self { dir, path, db }
    }

    pub fn db(&self) -> &Database {
        &self.db
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }
}
