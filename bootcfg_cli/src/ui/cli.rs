use std::io::{stdout, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bootcfg_core::config::ConfigFile;
use bootcfg_core::{ClientConfig, ClientError, TlsFiles};
use bootcfg_grpc::proto::{
    GroupDeleteRequest, GroupGetRequest, GroupListRequest, IgnitionDeleteRequest,
    IgnitionGetRequest, IgnitionPutRequest, ProfileDeleteRequest, ProfileGetRequest,
    ProfileListRequest,
};
use bootcfg_grpc::{Client, GrpcDialer};
use clap::{Parser, Subcommand};
use log::info;

use super::render;

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "bootcmd", version, subcommand_required = true)]
pub struct Args {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Args, Debug)]
pub struct ConnectionArgs {
    /// JSON client config file; when given the flags below are ignored
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    /// bootcfg endpoints to try in order (host:port, comma separated)
    #[arg(long, global = true, value_delimiter = ',', default_value = "127.0.0.1:8081")]
    pub endpoints: Vec<String>,
    /// Use TLS with the platform trust roots when no PEM file is given
    #[arg(long, global = true)]
    pub tls: bool,
    /// CA certificate (PEM) used to verify the server
    #[arg(long, global = true)]
    pub ca_file: Option<PathBuf>,
    /// Client certificate (PEM)
    #[arg(long, global = true)]
    pub cert_file: Option<PathBuf>,
    /// Client private key (PEM)
    #[arg(long, global = true)]
    pub key_file: Option<PathBuf>,
    /// Name to verify in the server certificate
    #[arg(long, global = true)]
    pub domain_name: Option<String>,
    /// Seconds to wait for each dial attempt
    #[arg(long, global = true, default_value_t = 5)]
    pub dial_timeout: u64,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Manage machine groups
    Group {
        #[command(subcommand)]
        action: GroupAction,
    },
    /// Manage boot profiles
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },
    /// Manage Ignition configs
    Ignition {
        #[command(subcommand)]
        action: IgnitionAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum GroupAction {
    /// List all groups
    List,
    /// Show one group
    Describe { id: String },
    /// Delete a group
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// List all profiles
    List,
    /// Show one profile
    Describe { id: String },
    /// Delete a profile
    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum IgnitionAction {
    /// Print an Ignition config to stdout
    Get { name: String },
    /// Upload an Ignition config from a file
    Put { name: String, file: PathBuf },
    /// Delete an Ignition config
    Delete { name: String },
}

pub async fn run_cli(args: Args) -> anyhow::Result<()> {
    let config = load_config(&args.connection).await?;
    let dialer =
        GrpcDialer::new().with_connect_timeout(Duration::from_secs(args.connection.dial_timeout));

    let mut client = Client::connect(&dialer, &config).await?;
    info!("Connected to bootcfg at {}", client.endpoint());

    // Close even when the command failed; the command's error wins.
    let result = run_command(&mut client, args.command).await;
    let closed = client.close().await;
    result?;
    closed.context("closing the bootcfg connection")?;
    Ok(())
}

/// Builds the client config from `--config` or from the individual flags.
///
/// TLS is configured by `--tls`, `--domain-name` or any PEM file flag.
async fn load_config(args: &ConnectionArgs) -> Result<ClientConfig, ClientError> {
    if let Some(path) = &args.config {
        return ClientConfig::from_file(path).await;
    }

    let tls_requested = args.tls
        || args.domain_name.is_some()
        || args.ca_file.is_some()
        || args.cert_file.is_some()
        || args.key_file.is_some();
    let tls = if tls_requested {
        Some(TlsFiles {
            ca_file: args.ca_file.clone(),
            cert_file: args.cert_file.clone(),
            key_file: args.key_file.clone(),
            domain_name: args.domain_name.clone(),
        })
    } else {
        None
    };

    ConfigFile {
        endpoints: args.endpoints.clone(),
        tls,
    }
    .into_client_config()
    .await
}

async fn run_command(client: &mut Client, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Group { action } => run_group(client, action).await,
        Command::Profile { action } => run_profile(client, action).await,
        Command::Ignition { action } => run_ignition(client, action).await,
    }
}

async fn run_group(client: &mut Client, action: GroupAction) -> anyhow::Result<()> {
    let groups = client.groups();
    match action {
        GroupAction::List => {
            let response = groups.group_list(GroupListRequest {}).await?.into_inner();
            for group in &response.groups {
                println!("{}", render::group_row(group));
            }
        }
        GroupAction::Describe { id } => {
            let response = groups
                .group_get(GroupGetRequest { id: id.clone() })
                .await?
                .into_inner();
            let group = response
                .group
                .with_context(|| format!("server returned no group for '{id}'"))?;
            print!("{}", render::describe_group(&group));
        }
        GroupAction::Delete { id } => {
            groups.group_delete(GroupDeleteRequest { id: id.clone() }).await?;
            info!("Deleted group '{}'", id);
        }
    }
    Ok(())
}

async fn run_profile(client: &mut Client, action: ProfileAction) -> anyhow::Result<()> {
    let profiles = client.profiles();
    match action {
        ProfileAction::List => {
            let response = profiles
                .profile_list(ProfileListRequest {})
                .await?
                .into_inner();
            for profile in &response.profiles {
                println!("{}", render::profile_row(profile));
            }
        }
        ProfileAction::Describe { id } => {
            let response = profiles
                .profile_get(ProfileGetRequest { id: id.clone() })
                .await?
                .into_inner();
            let profile = response
                .profile
                .with_context(|| format!("server returned no profile for '{id}'"))?;
            print!("{}", render::describe_profile(&profile));
        }
        ProfileAction::Delete { id } => {
            profiles
                .profile_delete(ProfileDeleteRequest { id: id.clone() })
                .await?;
            info!("Deleted profile '{}'", id);
        }
    }
    Ok(())
}

async fn run_ignition(client: &mut Client, action: IgnitionAction) -> anyhow::Result<()> {
    let ignition = client.ignition();
    match action {
        IgnitionAction::Get { name } => {
            let response = ignition
                .ignition_get(IgnitionGetRequest { name })
                .await?
                .into_inner();
            let mut out = stdout().lock();
            out.write_all(&response.config)?;
            out.flush()?;
        }
        IgnitionAction::Put { name, file } => {
            let config = tokio::fs::read(&file)
                .await
                .with_context(|| format!("reading {}", file.display()))?;
            ignition
                .ignition_put(IgnitionPutRequest {
                    name: name.clone(),
                    config,
                })
                .await?;
            info!("Stored Ignition config '{}'", name);
        }
        IgnitionAction::Delete { name } => {
            ignition
                .ignition_delete(IgnitionDeleteRequest { name: name.clone() })
                .await?;
            info!("Deleted Ignition config '{}'", name);
        }
    }
    Ok(())
}
