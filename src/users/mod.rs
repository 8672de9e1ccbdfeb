//! Course user generation
//!
//! Turns a roster into one [`UserRecord`] per cluster node. Node `n` gets
//! host `<prefix>-node-<nnn>` and uid/gid `2000 + n`; the Ansible playbooks
//! rely on host numbering and uid offsets lining up, so records are built
//! strictly in roster order.

pub mod credentials;
pub mod keys;

pub use credentials::{Credential, RosterEntry};
pub use keys::SshKeypair;

use crate::CourseError;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use tracing::{debug, info};

/// First uid/gid handed out
pub const UID_START: u32 = 2000;

/// Everything provisioned for one course participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub host: String,
    pub user: String,
    pub password: String,
    pub hash: String,
    pub uid: u32,
    pub gid: u32,
    pub private_key: String,
    pub public_key: String,
    pub num: String,
}

/// Host name to user records, in generation order
///
/// Serializes as a map of host to a one-element list, the layout the
/// playbooks iterate over.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserMapping {
    entries: Vec<(String, UserRecord)>,
}

impl UserMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record keyed by its host; an existing host is replaced in place
    pub fn insert(&mut self, record: UserRecord) {
        match self.entries.iter_mut().find(|(host, _)| *host == record.host) {
            Some(entry) => entry.1 = record,
            None => self.entries.push((record.host.clone(), record)),
        }
    }

    pub fn get(&self, host: &str) -> Option<&UserRecord> {
        self.entries
            .iter()
            .find(|(h, _)| h == host)
            .map(|(_, record)| record)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Host names in generation order
    pub fn hosts(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(host, _)| host.as_str())
    }

    /// All user records in generation order
    pub fn records(&self) -> impl Iterator<Item = &UserRecord> {
        self.entries.iter().map(|(_, record)| record)
    }
}

impl Serialize for UserMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (host, record) in &self.entries {
            map.serialize_entry(host, std::slice::from_ref(record))?;
        }
        map.end()
    }
}

/// Host name for node `num` of the cluster
pub fn node_host(prefix: &str, num: &str) -> String {
    format!("{}-node-{}", prefix, num)
}

/// uid/gid of the user at roster position `n`
pub fn uid_for(n: usize) -> Result<u32, CourseError> {
    u32::try_from(n)
        .ok()
        .and_then(|offset| UID_START.checked_add(offset))
        .ok_or_else(|| CourseError::input("Too many users for uid range"))
}

/// Build the user mapping for a roster
///
/// Every entry gets its password resolved and hashed and a fresh keypair.
/// Key generation dominates the runtime.
pub fn build_user_mapping(
    roster: &[RosterEntry],
    cluster_prefix: &str,
) -> Result<UserMapping, CourseError> {
    info!("Generating credentials for {} users", roster.len());

    let mut mapping = UserMapping::new();
    for (n, entry) in roster.iter().enumerate() {
        let num = format!("{:03}", n);
        let host = node_host(cluster_prefix, &num);
        let uid = uid_for(n)?;

        let password = entry.credential.resolve();
        let hash = credentials::hash_password(&password)?;
        let SshKeypair {
            private_key,
            public_key,
        } = keys::generate_keypair()?;

        debug!("Created user {} on {} (uid {})", entry.username, host, uid);

        mapping.insert(UserRecord {
            host,
            user: entry.username.clone(),
            password,
            hash,
            uid,
            gid: uid,
            private_key,
            public_key,
            num,
        });
    }

    Ok(mapping)
}
