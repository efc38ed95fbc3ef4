use super::error::StoreResult;
use rusqlite::Connection;
use std::path::Path;

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens (creating if needed) the SQLite file at `path`.
    ///
    /// The bulk fill commits once per record, so the journal runs in WAL
    /// mode with relaxed syncing.
    pub fn open(path: &Path) -> StoreResult<Db> {
        let conn = Connection::open(path)?;
        let journal_mode: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        tracing::trace!(%journal_mode, "journal mode set");
        conn.pragma_update(None, "synchronous", "NORMAL")?;
        tracing::debug!(path = %path.display(), "database opened");

        Ok(Db { conn })
    }

    /// Closes the connection, surfacing any error instead of dropping it.
    pub fn close(self) -> StoreResult<()> {
        self.conn.close().map_err(|(_, e)| e)?;
        Ok(())
    }
}
