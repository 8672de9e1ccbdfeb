//! External network discovery
//!
//! The Terraform variables need the id of the provider's public network.
//! It is looked up by listing external networks through the cloud CLI and
//! picking the row named "Public External IPv4 network".

pub mod kn;
pub mod mock;

use crate::CourseError;
use async_trait::async_trait;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::{debug, info};

/// Name of the network the cluster attaches its floating IPs to
pub const EXTERNAL_NETWORK_NAME: &str = "Public External IPv4 network";

/// Table row with a whole hex/hyphen id cell followed by the target name cell
static NETWORK_ROW: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"\|\s*([a-f0-9-]+)\s*\|\s*({})\s*\|",
        regex::escape(EXTERNAL_NETWORK_NAME)
    );
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .expect("network row pattern must compile")
});

/// Identity of the external network
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkInfo {
    pub id: String,
    pub name: String,
}

/// Source of the `network list --external` table
#[async_trait]
pub trait NetworkLister: Send + Sync {
    /// Short name for logging
    fn name(&self) -> &'static str;

    /// Raw tabular output listing the external networks
    async fn list_external_networks(&self) -> Result<String, CourseError>;
}

/// Find the public external network in a network listing
///
/// Rows are CRLF-separated; the first row whose id cell is entirely
/// hex/hyphen and whose next cell is exactly the target name matches,
/// case-insensitively.
pub fn parse_external_network(output: &str) -> Option<NetworkInfo> {
    output.split("\r\n").find_map(|line| {
        let captures = NETWORK_ROW.captures(line)?;
        Some(NetworkInfo {
            id: captures.get(1)?.as_str().to_string(),
            name: captures.get(2)?.as_str().to_string(),
        })
    })
}

/// Query the lister and parse its output
///
/// `Ok(None)` means the listing worked but had no matching row.
pub async fn find_external_network(
    lister: &dyn NetworkLister,
) -> Result<Option<NetworkInfo>, CourseError> {
    debug!("Listing external networks via {}", lister.name());
    let output = lister.list_external_networks().await?;

    let network = parse_external_network(&output);
    match &network {
        Some(net) => info!("Found external network {} ({})", net.name, net.id),
        None => debug!("No '{}' row in network listing", EXTERNAL_NETWORK_NAME),
    }
    Ok(network)
}
