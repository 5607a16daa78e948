//! Local persistence for the auth session.
//!
//! Replaces the browser local storage the platform's web client used: the
//! session survives restarts as a small JSON file and is removed on logout.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use vita_core::model::AuthSession;

pub trait SessionStore: Send + Sync {
    /// The persisted session, if any. Unreadable or corrupt files count as
    /// "no session" rather than an error: the user just logs in again.
    fn load(&self) -> Option<AuthSession>;

    fn save(&self, session: &AuthSession) -> io::Result<()>;

    fn clear(&self) -> io::Result<()>;
}

/// Session persisted as a JSON file on disk.
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SessionStore for FileSessionStore {
    fn load(&self) -> Option<AuthSession> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&raw) {
            Ok(session) => Some(session),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "ignoring corrupt session file");
                None
            }
        }
    }

    fn save(&self, session: &AuthSession) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        std::fs::write(&self.path, raw)
    }

    fn clear(&self) -> io::Result<()> {
        match std::fs::remove_file(&self.path) {
            Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
            _ => Ok(()),
        }
    }
}

/// Session held in memory only; used by tests and ephemeral runs.
#[derive(Default)]
pub struct InMemorySessionStore {
    slot: Mutex<Option<AuthSession>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Option<AuthSession> {
        self.slot.lock().expect("session lock").clone()
    }

    fn save(&self, session: &AuthSession) -> io::Result<()> {
        *self.slot.lock().expect("session lock") = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> io::Result<()> {
        *self.slot.lock().expect("session lock") = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vita_core::model::UserId;

    fn temp_session_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("vita-session-{tag}-{}.json", std::process::id()))
    }

    #[test]
    fn file_store_round_trips_and_clears() {
        let store = FileSessionStore::new(temp_session_path("roundtrip"));
        let session = AuthSession::new("token-1", UserId::from("u1"));

        store.save(&session).expect("save session");
        assert_eq!(store.load(), Some(session));

        store.clear().expect("clear session");
        assert_eq!(store.load(), None);
        // Clearing an already-missing file is fine.
        store.clear().expect("clear again");
    }

    #[test]
    fn corrupt_session_file_loads_as_none() {
        let path = temp_session_path("corrupt");
        std::fs::write(&path, "{not json").expect("write corrupt file");
        let store = FileSessionStore::new(&path);
        assert_eq!(store.load(), None);
        let _ = std::fs::remove_file(&path);
    }
}
