//! Login and logout - the session gate
//!
//! The gate verifies the fixed credential pairs, persists the resolved
//! role, and hands it to every other command as an explicit Session.

use super::StoredSession;
use anyhow::Result;
use shelfside_core::{authenticate, Role};
use std::fs;
use std::path::Path;

/// Verify credentials and persist the session.
pub fn login(data_dir: &Path, username: &str, password: &str) -> Result<()> {
    let Some(role) = authenticate(username, password) else {
        anyhow::bail!("Invalid credentials. Please check your username and password.");
    };

    fs::create_dir_all(data_dir)?;
    let stored = StoredSession {
        role: role.as_str().to_string(),
    };
    fs::write(
        super::session_path(data_dir),
        serde_json::to_string_pretty(&stored)?,
    )?;

    let title = match role {
        Role::Admin => "Administrator",
        Role::User => "User",
    };
    println!("Login successful. Welcome, {}!", title);
    Ok(())
}

/// Drop the stored session, if any.
pub fn logout(data_dir: &Path) -> Result<()> {
    match fs::remove_file(super::session_path(data_dir)) {
        Ok(()) => {
            println!("Logged out.");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            println!("No active session.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
