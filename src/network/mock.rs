//! Mock network lister for testing
//!
//! Returns canned `network list` output instead of running `kn`.

use async_trait::async_trait;

use super::NetworkLister;
use crate::CourseError;

/// Mock network lister
///
/// # Example
/// ```
/// use course_setup::network::mock::MockLister;
///
/// let mock = MockLister::new()
///     .with_network("5e2c-abc123", "Public External IPv4 network");
/// ```
pub struct MockLister {
    output: String,
    error: Option<String>,
}

impl MockLister {
    /// Create a mock that lists no networks
    pub fn new() -> Self {
        Self {
            output: String::new(),
            error: None,
        }
    }

    /// Return this raw output
    pub fn with_output(mut self, output: &str) -> Self {
        self.output = output.to_string();
        self
    }

    /// Append a table row for a network
    pub fn with_network(mut self, id: &str, name: &str) -> Self {
        self.output.push_str(&format!("| {} | {} |\r\n", id, name));
        self
    }

    /// Fail the listing with this message
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }
}

impl Default for MockLister {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NetworkLister for MockLister {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn list_external_networks(&self) -> Result<String, CourseError> {
        if let Some(error) = &self.error {
            return Err(CourseError::ExternalTool(error.clone()));
        }
        Ok(self.output.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_lister_default() {
        let mock = MockLister::new();
        assert_eq!(mock.name(), "Mock");
        assert_eq!(mock.list_external_networks().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_mock_lister_rows() {
        let mock = MockLister::new()
            .with_network("1111-aaaa", "Internal")
            .with_network("5e2c-abc123", "Public External IPv4 network");

        let output = mock.list_external_networks().await.unwrap();
        assert_eq!(
            output,
            "| 1111-aaaa | Internal |\r\n| 5e2c-abc123 | Public External IPv4 network |\r\n"
        );
    }

    #[tokio::test]
    async fn test_mock_lister_error() {
        let mock = MockLister::new().with_error("kn: command not found");
        let err = mock.list_external_networks().await.unwrap_err();
        assert!(err.to_string().contains("kn: command not found"));
    }
}
