//! Usernames, passwords and password hashes

use crate::CourseError;
use crate::config::UsersSource;
use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use sha_crypt::{Sha512Params, sha512_simple};
use std::path::Path;
use tokio::fs;
use tracing::{debug, info};

/// Length of generated passwords
pub const PASSWORD_LENGTH: usize = 10;

/// SHA-512-crypt rounds, the glibc default
pub const HASH_ROUNDS: usize = 5000;

/// Password for one roster entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Password given in the roster file
    Supplied(String),
    /// Password to be generated
    Generated,
}

impl Credential {
    /// Plaintext password for this credential
    pub fn resolve(&self) -> String {
        match self {
            Credential::Supplied(password) => password.clone(),
            Credential::Generated => generate_password(PASSWORD_LENGTH),
        }
    }
}

/// One roster line: a username and its credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub username: String,
    pub credential: Credential,
}

/// Build the roster for a users source
pub async fn load_roster(source: &UsersSource) -> Result<Vec<RosterEntry>, CourseError> {
    match source {
        UsersSource::Roster(path) => read_roster(path).await,
        UsersSource::Count(count) => Ok(synthetic_roster(*count)),
    }
}

/// Read a roster file
pub async fn read_roster(path: impl AsRef<Path>) -> Result<Vec<RosterEntry>, CourseError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).await.map_err(|e| {
        CourseError::input(format!("Cannot read roster {}: {}", path.display(), e))
    })?;

    let entries = parse_roster(&content);
    info!("Read {} users from {}", entries.len(), path.display());
    Ok(entries)
}

/// Parse roster content
///
/// Each non-blank line is `username [password]`; further tokens are ignored.
pub fn parse_roster(content: &str) -> Vec<RosterEntry> {
    content
        .lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            let username = tokens.next()?;
            let credential = match tokens.next() {
                Some(password) => Credential::Supplied(password.to_string()),
                None => Credential::Generated,
            };
            Some(RosterEntry {
                username: username.to_string(),
                credential,
            })
        })
        .collect()
}

/// Roster of `count` generated users named `user000`, `user001`, ...
pub fn synthetic_roster(count: usize) -> Vec<RosterEntry> {
    debug!("Generating {} synthetic users", count);
    (0..count)
        .map(|n| RosterEntry {
            username: format!("user{:03}", n),
            credential: Credential::Generated,
        })
        .collect()
}

/// Random alphanumeric password drawn from the OS random source
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// SHA-512-crypt hash suitable for `/etc/shadow`
pub fn hash_password(password: &str) -> Result<String, CourseError> {
    let params = Sha512Params::new(HASH_ROUNDS)
        .map_err(|e| CourseError::crypto(format!("Invalid hash parameters: {:?}", e)))?;
    sha512_simple(password, &params)
        .map_err(|e| CourseError::crypto(format!("Password hashing failed: {:?}", e)))
}
