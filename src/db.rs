// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.tallybook", "Tallybook", "tallybook"));

pub const DB_ENV: &str = "TALLYBOOK_DB";

pub const EXPENSES_KEY: &str = "expenses";
pub const NOTIFICATIONS_KEY: &str = "notifications";
pub const SETTINGS_KEY: &str = "userSettings";
pub const PROFILE_KEY: &str = "userProfile";

/// String-keyed document storage. Every collection is one JSON document
/// stored under its own key.
pub trait KvStore {
    fn get(&self, key: &str) -> crate::errors::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> crate::errors::Result<()>;
    fn remove(&self, key: &str) -> crate::errors::Result<()>;
}

impl KvStore for Connection {
    fn get(&self, key: &str) -> crate::errors::Result<Option<String>> {
        let v = self
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
                r.get(0)
            })
            .optional()?;
        Ok(v)
    }

    fn set(&self, key: &str, value: &str) -> crate::errors::Result<()> {
        self.execute(
            "INSERT INTO kv(key, value) VALUES(?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value=excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> crate::errors::Result<()> {
        self.execute("DELETE FROM kv WHERE key=?1", params![key])?;
        Ok(())
    }
}

/// Resolve the database file: explicit path, then `TALLYBOOK_DB`, then the
/// platform data dir.
pub fn db_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(p) = explicit {
        return Ok(p.to_path_buf());
    }
    if let Ok(p) = std::env::var(DB_ENV) {
        if !p.trim().is_empty() {
            return Ok(PathBuf::from(p));
        }
    }
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("tallybook.sqlite"))
}

pub fn open_or_init(path: &Path) -> Result<Connection> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }
    let conn =
        Connection::open(path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

/// Read a JSON document. Absent, unreadable or malformed documents yield the
/// default value; the failure is logged and never returned.
pub fn load_document<T>(kv: &dyn KvStore, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match kv.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return T::default(),
        Err(err) => {
            tracing::warn!(key, error = %err, "failed to read stored document, using default");
            return T::default();
        }
    };
    match serde_json::from_str(&raw) {
        Ok(v) => v,
        Err(err) => {
            tracing::warn!(key, error = %err, "malformed stored document, using default");
            T::default()
        }
    }
}

/// Write a JSON document. Failures are logged; the caller's in-memory copy
/// stays authoritative for the rest of the session.
pub fn save_document<T>(kv: &dyn KvStore, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
{
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to encode document");
            return false;
        }
    };
    match kv.set(key, &raw) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to persist document");
            false
        }
    }
}

pub fn remove_document(kv: &dyn KvStore, key: &str) -> bool {
    match kv.remove(key) {
        Ok(()) => true,
        Err(err) => {
            tracing::error!(key, error = %err, "failed to remove document");
            false
        }
    }
}
