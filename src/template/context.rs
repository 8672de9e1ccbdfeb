//! Template context building
//!
//! Collects the variables `config.tfvars.jj2` can reference.

use crate::config::CourseConfig;
use crate::network::NetworkInfo;
use serde::Serialize;

/// Variables available to the Terraform variables template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderContext {
    pub users: String,
    pub cluster_prefix: String,
    pub master_flavor: String,
    pub master_disk_size: u32,
    pub node_flavor: String,
    pub node_disk_size: u32,
    pub node_count: usize,
    pub external_network_id: String,
    pub external_network_name: String,
}

/// Build the template context from the run configuration
pub fn build_context(
    config: &CourseConfig,
    node_count: usize,
    network: &NetworkInfo,
) -> RenderContext {
    RenderContext {
        users: config.users.clone(),
        cluster_prefix: config.cluster_prefix.clone(),
        master_flavor: config.master_flavor.clone(),
        master_disk_size: config.master_disk_size,
        node_flavor: config.node_flavor.clone(),
        node_disk_size: config.node_disk_size,
        node_count,
        external_network_id: network.id.clone(),
        external_network_name: network.name.clone(),
    }
}
