//! Course configuration
//!
//! Holds the typed settings a setup run is driven by. The CLI builds one
//! [`CourseConfig`] and every stage receives it by reference.

use crate::CourseError;
use std::path::{Path, PathBuf};

/// Default prefix for every host name in the cluster
pub const DEFAULT_CLUSTER_PREFIX: &str = "virt-workshop";

/// Default OpenStack flavor for the master and the nodes
pub const DEFAULT_FLAVOR: &str = "ssc.small";

/// Default location of the cloud CLI wrapper
pub const DEFAULT_KN: &str = "./kn";

/// Default template for the Terraform variables file
pub const DEFAULT_TEMPLATE: &str = "config.tfvars.jj2";

/// Where the user list comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersSource {
    /// Roster file with one `username [password]` per line
    Roster(PathBuf),
    /// Number of synthetic `userNNN` accounts to generate
    Count(usize),
}

impl UsersSource {
    /// Interpret the `--users` argument
    ///
    /// An existing file wins; anything else must be a non-negative integer.
    pub fn resolve(arg: &str) -> Result<Self, CourseError> {
        let path = Path::new(arg);
        if path.is_file() {
            return Ok(Self::Roster(path.to_path_buf()));
        }

        arg.trim().parse::<usize>().map(Self::Count).map_err(|_| {
            CourseError::input(format!(
                "'{}' is neither an existing roster file nor a user count",
                arg
            ))
        })
    }
}

/// Settings for one course setup run
#[derive(Debug, Clone)]
pub struct CourseConfig {
    /// Raw `--users` argument, passed through to the template
    pub users: String,
    pub cluster_prefix: String,
    pub master_flavor: String,
    pub master_disk_size: u32,
    pub node_flavor: String,
    pub node_disk_size: u32,
    /// Cloud CLI wrapper used for the network lookup
    pub kn: PathBuf,
    /// Jinja template for `config.tfvars`
    pub template: PathBuf,
    /// Directory the artifacts are written under
    pub output_dir: PathBuf,
}

impl CourseConfig {
    /// Create a config with default settings for the given `--users` value
    pub fn new(users: impl Into<String>) -> Self {
        Self {
            users: users.into(),
            cluster_prefix: DEFAULT_CLUSTER_PREFIX.to_string(),
            master_flavor: DEFAULT_FLAVOR.to_string(),
            master_disk_size: 0,
            node_flavor: DEFAULT_FLAVOR.to_string(),
            node_disk_size: 0,
            kn: PathBuf::from(DEFAULT_KN),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            output_dir: PathBuf::from("."),
        }
    }

    /// Set the cluster prefix
    pub fn with_cluster_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.cluster_prefix = prefix.into();
        self
    }

    /// Set the template path
    pub fn with_template(mut self, template: impl AsRef<Path>) -> Self {
        self.template = template.as_ref().to_path_buf();
        self
    }

    /// Set the output directory
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Resolve the `--users` argument
    pub fn users_source(&self) -> Result<UsersSource, CourseError> {
        UsersSource::resolve(&self.users)
    }
}

/// Host name of the cluster master
pub fn master_host(cluster_prefix: &str) -> String {
    format!("{}-master-000", cluster_prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_count() {
        assert_eq!(UsersSource::resolve("3").unwrap(), UsersSource::Count(3));
        assert_eq!(UsersSource::resolve("0").unwrap(), UsersSource::Count(0));
    }

    #[test]
    fn test_resolve_roster_file() {
        let temp_dir = TempDir::new().unwrap();
        let roster = temp_dir.path().join("users.txt");
        fs::write(&roster, "alice\n").unwrap();

        let source = UsersSource::resolve(roster.to_str().unwrap()).unwrap();
        assert_eq!(source, UsersSource::Roster(roster));
    }

    #[test]
    fn test_resolve_invalid() {
        let err = UsersSource::resolve("no-such-file.txt").unwrap_err();
        assert!(matches!(err, CourseError::Input(_)));

        assert!(UsersSource::resolve("-2").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = CourseConfig::new("5");
        assert_eq!(config.cluster_prefix, "virt-workshop");
        assert_eq!(config.master_flavor, "ssc.small");
        assert_eq!(config.node_disk_size, 0);
        assert_eq!(config.kn, PathBuf::from("./kn"));
        assert_eq!(master_host(&config.cluster_prefix), "virt-workshop-master-000");
    }
}
