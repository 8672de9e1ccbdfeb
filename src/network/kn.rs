//! Network listing through the `kn` wrapper
//!
//! `kn` runs the cloud CLIs inside a container with the course credentials
//! loaded, so the listing is `kn openstack network list --external`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::NetworkLister;
use crate::CourseError;
use crate::config::DEFAULT_KN;

/// Lists networks by running the `kn` executable
pub struct KnCli {
    program: PathBuf,
}

impl KnCli {
    pub fn new() -> Self {
        Self {
            program: PathBuf::from(DEFAULT_KN),
        }
    }

    /// Use a different `kn` executable
    pub fn with_program(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl Default for KnCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkLister for KnCli {
    fn name(&self) -> &'static str {
        "kn"
    }

    async fn list_external_networks(&self) -> Result<String, CourseError> {
        debug!("Running {} openstack network list --external", self.program.display());

        let output = tokio::process::Command::new(&self.program)
            .args(["openstack", "network", "list", "--external"])
            .output()
            .await
            .map_err(|e| {
                CourseError::ExternalTool(format!(
                    "Failed to run {}: {}",
                    self.program.display(),
                    e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(CourseError::ExternalTool(format!(
                "{} exited with {}: {}",
                self.program.display(),
                output.status,
                stderr.trim()
            )));
        }

        String::from_utf8(output.stdout).map_err(|e| {
            CourseError::ExternalTool(format!("Network listing is not UTF-8: {}", e))
        })
    }
}
