use async_trait::async_trait;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use careerpath_core::{CareerError, Result, SkillRecord, SkillStore, normalize};

/// Where a SQLite store lives, parsed from a connection URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    Memory,
    File(PathBuf),
}

impl StoreLocation {
    /// Accepts `sqlite://<path>`, `sqlite:<path>`, `sqlite::memory:`, `:memory:`,
    /// or a bare filesystem path.
    pub fn parse(uri: &str) -> Result<Self> {
        let uri = uri.trim();
        if uri.is_empty() {
            return Err(CareerError::Config("store URI is empty".into()));
        }
        let rest = if let Some(rest) = uri.strip_prefix("sqlite://") {
            rest
        } else if let Some(rest) = uri.strip_prefix("sqlite:") {
            rest
        } else if uri.contains("://") {
            return Err(CareerError::Config(format!(
                "unsupported store URI scheme: {}",
                uri
            )));
        } else {
            uri
        };
        match rest {
            "" => Err(CareerError::Config(format!("store URI has no path: {}", uri))),
            ":memory:" => Ok(StoreLocation::Memory),
            path => Ok(StoreLocation::File(PathBuf::from(path))),
        }
    }
}

/// SQLite-backed skill store.
///
/// `related_roles` is stored as a JSON array. The `skill_key` column holds
/// the lowercased name so lookups stay Unicode-aware.
#[derive(Clone)]
pub struct SqliteSkillStore {
    db: Arc<Mutex<Connection>>,
}

impl SqliteSkillStore {
    /// Open the store named by a connection URI.
    pub fn from_uri(uri: &str) -> Result<Self> {
        match StoreLocation::parse(uri)? {
            StoreLocation::Memory => Self::open_in_memory(),
            StoreLocation::File(path) => Self::open(&path),
        }
    }

    /// Open or create the skill database at the given path.
    pub fn open(path: &Path) -> Result<Self> {
        info!(?path, "opening skill store");
        let conn = Connection::open(path).map_err(store_err)?;
        Self::init(conn)
    }

    /// Open an in-memory database (for tests).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(store_err)?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Enable WAL mode for concurrent reads
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")
            .map_err(store_err)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS skills (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                skill TEXT NOT NULL,
                skill_key TEXT NOT NULL,
                scope TEXT,
                related_roles TEXT,
                growth_rate TEXT
            );

            CREATE INDEX IF NOT EXISTS idx_skills_key ON skills(skill_key);
            ",
        )
        .map_err(store_err)?;

        Ok(Self {
            db: Arc::new(Mutex::new(conn)),
        })
    }

    /// Insert one skill record.
    pub fn insert(&self, record: &SkillRecord) -> Result<()> {
        let roles = record
            .related_roles
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;
        let db = self.db.lock();
        db.execute(
            "INSERT INTO skills (skill, skill_key, scope, related_roles, growth_rate)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                record.skill,
                normalize(&record.skill),
                record.scope,
                roles,
                record.growth_rate
            ],
        )
        .map_err(store_err)?;
        Ok(())
    }

    /// Insert every record in a single transaction. Returns the count inserted.
    pub fn insert_all(&self, records: &[SkillRecord]) -> Result<usize> {
        let mut db = self.db.lock();
        let tx = db.transaction().map_err(store_err)?;
        {
            let mut stmt = tx
                .prepare(
                    "INSERT INTO skills (skill, skill_key, scope, related_roles, growth_rate)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                )
                .map_err(store_err)?;
            for record in records {
                let roles = record
                    .related_roles
                    .as_ref()
                    .map(serde_json::to_string)
                    .transpose()?;
                stmt.execute(params![
                    record.skill,
                    normalize(&record.skill),
                    record.scope,
                    roles,
                    record.growth_rate
                ])
                .map_err(store_err)?;
            }
        }
        tx.commit().map_err(store_err)?;
        info!(count = records.len(), "imported skill records");
        Ok(records.len())
    }

    /// Load a JSON seed file into the store.
    pub fn import_json(&self, path: &Path) -> Result<usize> {
        let records = crate::seed::load_seed_file(path)?;
        self.insert_all(&records)
    }

    /// Number of stored records.
    pub fn count(&self) -> Result<usize> {
        let db = self.db.lock();
        let n: i64 = db
            .query_row("SELECT COUNT(*) FROM skills", [], |row| row.get(0))
            .map_err(store_err)?;
        Ok(n as usize)
    }

    fn row_to_record(row: &Row<'_>) -> rusqlite::Result<(SkillRecord, Option<String>)> {
        let record = SkillRecord {
            skill: row.get(0)?,
            scope: row.get(1)?,
            related_roles: None,
            growth_rate: row.get(3)?,
        };
        Ok((record, row.get(2)?))
    }
}

#[async_trait]
impl SkillStore for SqliteSkillStore {
    async fn skill_names(&self) -> Result<Vec<String>> {
        let db = self.db.lock();
        let mut stmt = db
            .prepare("SELECT skill FROM skills ORDER BY id")
            .map_err(store_err)?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(store_err)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(store_err)?;
        debug!(count = names.len(), "read skill names");
        Ok(names)
    }

    async fn find_skill(&self, name: &str) -> Result<Option<SkillRecord>> {
        let found = {
            let db = self.db.lock();
            db.query_row(
                "SELECT skill, scope, related_roles, growth_rate FROM skills
                 WHERE skill_key = ?1 ORDER BY id LIMIT 1",
                params![normalize(name)],
                Self::row_to_record,
            )
            .optional()
            .map_err(store_err)?
        };

        let Some((mut record, roles)) = found else {
            return Ok(None);
        };
        if let Some(raw) = roles {
            let parsed: Vec<String> = serde_json::from_str(&raw).map_err(|e| {
                CareerError::Store(format!(
                    "related_roles for '{}' is not a JSON string array: {}",
                    record.skill, e
                ))
            })?;
            record.related_roles = Some(parsed);
        }
        Ok(Some(record))
    }
}

fn store_err(e: rusqlite::Error) -> CareerError {
    CareerError::Store(e.to_string())
}
