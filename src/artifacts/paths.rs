//! Output locations
//!
//! All artifacts live at fixed paths relative to the course directory.

use std::path::{Path, PathBuf};

/// Terraform variables file
pub const CONFIG_FILE: &str = "config.tfvars";

/// Ansible group variables for all hosts
pub const GROUP_VARS_FILE: &str = "playbooks/group_vars/all";

/// Plaintext credentials handed out to participants
pub const PASSWORDS_FILE: &str = "passwords.txt";

/// Artifact paths under one base directory
#[derive(Debug, Clone)]
pub struct OutputPaths {
    /// Course directory (default: current directory)
    pub base: PathBuf,
}

impl Default for OutputPaths {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPaths {
    /// Paths relative to the current directory
    pub fn new() -> Self {
        Self {
            base: PathBuf::from("."),
        }
    }

    /// Paths under a custom base directory (useful for testing)
    pub fn with_base(base: impl AsRef<Path>) -> Self {
        Self {
            base: base.as_ref().to_path_buf(),
        }
    }

    /// ./config.tfvars
    pub fn config_file(&self) -> PathBuf {
        self.base.join(CONFIG_FILE)
    }

    /// ./playbooks/group_vars/all
    pub fn group_vars_file(&self) -> PathBuf {
        self.base.join(GROUP_VARS_FILE)
    }

    /// ./passwords.txt
    pub fn passwords_file(&self) -> PathBuf {
        self.base.join(PASSWORDS_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let paths = OutputPaths::new();
        assert_eq!(paths.config_file(), PathBuf::from("./config.tfvars"));
        assert_eq!(
            paths.group_vars_file(),
            PathBuf::from("./playbooks/group_vars/all")
        );
        assert_eq!(paths.passwords_file(), PathBuf::from("./passwords.txt"));
    }

    #[test]
    fn test_custom_base() {
        let paths = OutputPaths::with_base("/tmp/course");
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/course/config.tfvars"));
        assert_eq!(
            paths.group_vars_file(),
            PathBuf::from("/tmp/course/playbooks/group_vars/all")
        );
    }
}
