//! course-setup - credentials and provisioning artifacts for training clusters
//!
//! Run from the course directory before `./kn apply`.

use clap::Parser;
use std::path::PathBuf;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use course_setup::config::{DEFAULT_CLUSTER_PREFIX, DEFAULT_FLAVOR, DEFAULT_KN, DEFAULT_TEMPLATE};
use course_setup::network::kn::KnCli;
use course_setup::{COMPLETION_MESSAGE, CourseConfig, CourseError, run_setup};

#[derive(Parser)]
#[command(name = "course-setup")]
#[command(author, version, about = "Generate users and provisioning files for a course cluster", long_about = None)]
struct Cli {
    /// Roster file (`username [password]` per line) or the number of users to generate
    #[arg(long, env = "COURSE_USERS")]
    users: String,

    /// Prefix for all host names in the cluster
    #[arg(long, env = "COURSE_CLUSTER_PREFIX", default_value = DEFAULT_CLUSTER_PREFIX)]
    cluster_prefix: String,

    /// Flavor of the master instance
    #[arg(long, env = "COURSE_MASTER_FLAVOR", default_value = DEFAULT_FLAVOR)]
    master_flavor: String,

    /// Volume size of the master instance in GB (0 = flavor disk)
    #[arg(long, env = "COURSE_MASTER_DISK_SIZE", default_value_t = 0)]
    master_disk_size: u32,

    /// Flavor of the node instances
    #[arg(long, env = "COURSE_NODE_FLAVOR", default_value = DEFAULT_FLAVOR)]
    node_flavor: String,

    /// Volume size of each node instance in GB (0 = flavor disk)
    #[arg(long, env = "COURSE_NODE_DISK_SIZE", default_value_t = 0)]
    node_disk_size: u32,

    /// Cloud CLI wrapper used to look up the external network
    #[arg(long, env = "COURSE_KN", default_value = DEFAULT_KN)]
    kn: PathBuf,

    /// Jinja template for config.tfvars
    #[arg(long, env = "COURSE_TEMPLATE", default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// Directory the artifacts are written to
    #[arg(long, env = "COURSE_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Cli> for CourseConfig {
    fn from(cli: Cli) -> Self {
        Self {
            users: cli.users,
            cluster_prefix: cli.cluster_prefix,
            master_flavor: cli.master_flavor,
            master_disk_size: cli.master_disk_size,
            node_flavor: cli.node_flavor,
            node_disk_size: cli.node_disk_size,
            kn: cli.kn,
            template: cli.template,
            output_dir: cli.output_dir,
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };

    // RUST_LOG overrides the -v count
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), CourseError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = CourseConfig::from(cli);
    info!("Setting up course {}", config.cluster_prefix);

    let kn = KnCli::with_program(&config.kn);
    run_setup(&config, &kn).await?;

    println!("{}", COMPLETION_MESSAGE);
    Ok(())
}
