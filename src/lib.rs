//! course-setup library
//!
//! Prepares everything a short-lived training cluster needs before it is
//! brought up with `kn apply`:
//!
//! - **Users**: one account per node with password, `/etc/shadow` hash,
//!   RSA SSH keypair and a sequential uid
//! - **Network**: the id of the provider's public external network
//! - **Artifacts**: `config.tfvars`, `playbooks/group_vars/all` and
//!   `passwords.txt`

pub mod artifacts;
pub mod config;
pub mod network;
pub mod template;
pub mod users;

mod error;

pub use config::{CourseConfig, UsersSource};
pub use error::CourseError;
pub use network::{NetworkInfo, NetworkLister};
pub use users::{UserMapping, UserRecord};

use artifacts::OutputPaths;
use tracing::info;

/// Printed once all artifacts are written
pub const COMPLETION_MESSAGE: &str = "Course setup is finished
 To spin up the cloud run: ./kn apply
 The usernames and passwords are in the file passwords.txt";

/// What a completed setup produced
#[derive(Debug, Clone)]
pub struct SetupSummary {
    pub users: UserMapping,
    pub network: NetworkInfo,
    pub paths: OutputPaths,
}

/// Run the whole setup: users, network lookup, then the three artifacts
pub async fn run_setup(
    config: &CourseConfig,
    lister: &dyn NetworkLister,
) -> Result<SetupSummary, CourseError> {
    let source = config.users_source()?;
    let roster = users::credentials::load_roster(&source).await?;
    let mapping = users::build_user_mapping(&roster, &config.cluster_prefix)?;

    let network = network::find_external_network(lister).await?.ok_or_else(|| {
        CourseError::NetworkNotFound(format!(
            "no '{}' row in the output of {}",
            network::EXTERNAL_NETWORK_NAME,
            lister.name()
        ))
    })?;

    let paths = OutputPaths::with_base(&config.output_dir);
    let context = template::build_context(config, mapping.len(), &network);

    artifacts::write_config_file(&paths, &config.template, &context).await?;
    artifacts::write_group_vars(&paths, &config.cluster_prefix, &mapping).await?;
    artifacts::write_passwords(&paths, &mapping).await?;

    info!("Provisioned {} users for {}", mapping.len(), config.cluster_prefix);

    Ok(SetupSummary {
        users: mapping,
        network,
        paths,
    })
}
