//! Session storage for persisting login state.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use folio_core::identity::Account;
use folio_core::types::UserId;

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

/// Stored session data.
#[derive(Debug, Serialize, Deserialize)]
pub struct StoredSession {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

impl StoredSession {
    /// The session's user id, parsed.
    pub fn user_id(&self) -> Result<UserId> {
        UserId::new(&self.user_id).context("Invalid user id in session file")
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("", "", "folio").context("Could not determine config directory")
}

/// Get the session file path.
fn session_path() -> Result<PathBuf> {
    let dirs = project_dirs()?;

    let data_dir = dirs.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data directory")?;

    Ok(data_dir.join("session.json"))
}

/// Resolve the store root directory.
///
/// Precedence: `--store` flag, then `FOLIO_STORE`, then the platform data
/// directory.
pub fn store_root(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Ok(path) = std::env::var("FOLIO_STORE") {
        return Ok(PathBuf::from(path));
    }

    Ok(project_dirs()?.data_dir().join("store"))
}

/// Save a session to disk.
pub fn save_session(account: &Account) -> Result<()> {
    let stored = StoredSession {
        user_id: account.id.to_string(),
        email: account.email.clone(),
        name: account.name.clone(),
    };

    let path = session_path()?;
    let json = serde_json::to_string_pretty(&stored)?;

    fs::write(&path, &json).context("Failed to write session file")?;

    // Set restrictive permissions (Unix only)
    #[cfg(unix)]
    {
        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}

/// Load the stored session, if any.
pub fn load_session() -> Result<Option<StoredSession>> {
    let path = session_path()?;

    if !path.exists() {
        return Ok(None);
    }

    let json = fs::read_to_string(&path).context("Failed to read session file")?;
    let stored: StoredSession = serde_json::from_str(&json).context("Invalid session file")?;

    Ok(Some(stored))
}

/// Load the stored session or fail with a login hint.
pub fn require_session() -> Result<StoredSession> {
    load_session()?.context("No active session. Run 'folio login' first.")
}

/// Clear the stored session.
pub fn clear_session() -> Result<()> {
    let path = session_path()?;

    if path.exists() {
        fs::remove_file(&path).context("Failed to remove session file")?;
    }

    Ok(())
}
