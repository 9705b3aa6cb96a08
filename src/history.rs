use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

use crate::language::Language;

/// A single past translation, immutable once saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub id: String,
    pub source_text: String,
    pub translated_text: String,
    pub source_language: Language,
    pub target_language: Language,
    pub romanization: Option<String>,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

/// Local store of past translations.
///
/// A single logical writer is assumed; the mutex serializes in-process
/// access so a save followed by a load from the same caller observes the
/// saved entry.
#[derive(Clone)]
pub struct HistoryStore {
    conn: Arc<Mutex<Connection>>,
}

impl HistoryStore {
    /// Open (or create) the history database at the given path.
    pub fn new(database_path: &str) -> Result<Self> {
        let conn = Connection::open(database_path)
            .context(format!("Failed to open history database at {}", database_path))?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS history (
                id TEXT PRIMARY KEY,
                source_text TEXT NOT NULL,
                translated_text TEXT NOT NULL,
                source_language TEXT NOT NULL,
                target_language TEXT NOT NULL,
                romanization TEXT,
                created_at INTEGER NOT NULL
            )",
            [],
        )
        .context("Failed to create history table")?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// All saved entries in insertion order. An empty store yields an empty
    /// sequence, never an error.
    pub fn load_history(&self) -> Result<Vec<TranslationEntry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, source_text, translated_text, source_language, target_language,
                    romanization, created_at
             FROM history
             ORDER BY rowid",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, Option<String>>(5)?,
                row.get::<_, i64>(6)?,
            ))
        })?;

        let mut entries = Vec::new();
        for row in rows {
            let (id, source_text, translated_text, source, target, romanization, created_at) =
                row.context("Failed to read history row")?;
            entries.push(TranslationEntry {
                id,
                source_text,
                translated_text,
                source_language: Language::from_code(&source)
                    .context("History row has an unsupported source language")?,
                target_language: Language::from_code(&target)
                    .context("History row has an unsupported target language")?,
                romanization,
                created_at,
            });
        }

        Ok(entries)
    }

    /// Append the entry, or replace an existing entry with the same id.
    ///
    /// An upsert keeps the row's original insertion position, so replaying a
    /// save does not reorder the history.
    pub fn save_entry(&self, entry: &TranslationEntry) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO history (id, source_text, translated_text, source_language,
                                  target_language, romanization, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
             ON CONFLICT(id) DO UPDATE SET
                 source_text = excluded.source_text,
                 translated_text = excluded.translated_text,
                 source_language = excluded.source_language,
                 target_language = excluded.target_language,
                 romanization = excluded.romanization,
                 created_at = excluded.created_at",
            params![
                entry.id,
                entry.source_text,
                entry.translated_text,
                entry.source_language.code(),
                entry.target_language.code(),
                entry.romanization,
                entry.created_at,
            ],
        )
        .context("Failed to save history entry")?;
        Ok(())
    }

    /// Remove the entry with the given id.
    ///
    /// Idempotent: deleting an id that is not present is a no-op. Returns
    /// whether an entry was actually removed.
    pub fn delete_entry(&self, id: &str) -> Result<bool> {
        let conn = self.conn.lock().unwrap();
        let rows_affected = conn
            .execute("DELETE FROM history WHERE id = ?1", params![id])
            .context("Failed to delete history entry")?;
        Ok(rows_affected > 0)
    }

    /// Remove every entry. Idempotent.
    pub fn clear_all(&self) -> Result<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM history", [])
            .context("Failed to clear history")?;
        Ok(())
    }
}
