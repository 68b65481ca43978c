//! Command-line surface of `heroku-certs`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::types::{AddRequest, ResolutionQuery, TargetRequest, UpdateRequest};

#[derive(Parser, Debug)]
#[command(
    name = "heroku-certs",
    version,
    about = "Manage SSL certificates of Heroku apps",
    after_help = "EXAMPLES:\n\
                  \n  heroku-certs -a example certs\
                  \n  heroku-certs -a example certs:add server.crt server.key\
                  \n  heroku-certs -a example certs:update --name tokyo-1050 server.crt server.key\
                  \n  heroku-certs -a example certs:rollback --endpoint tokyo-1050.herokussl.com\
                  \n  heroku-certs certs:chain intermediate.crt server.crt"
)]
pub struct Cli {
    /// App to run the command against
    #[arg(short, long, global = true, env = "HEROKU_APP")]
    pub app: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the SSL endpoints of an app
    #[command(visible_alias = "certs", alias = "certs:list")]
    List,
    /// Show certificate details of an endpoint
    #[command(alias = "certs:info")]
    Info(TargetArgs),
    /// Add an SSL endpoint to an app
    #[command(alias = "certs:add")]
    Add(AddArgs),
    /// Replace the certificate of an endpoint
    #[command(alias = "certs:update")]
    Update(UpdateArgs),
    /// Restore the previous certificate of an SSL endpoint
    #[command(alias = "certs:rollback")]
    Rollback(ConfirmedTargetArgs),
    /// Remove an endpoint from an app
    #[command(alias = "certs:remove")]
    Remove(ConfirmedTargetArgs),
    /// Print the ordered trust chain for the given certificates
    #[command(alias = "certs:chain")]
    Chain(ChainArgs),
    /// Print the private key that matches a certificate
    #[command(alias = "certs:key")]
    Key(KeyArgs),
}

/// `--name` / `--endpoint` filters selecting one existing endpoint.
#[derive(Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Name of the endpoint
    #[arg(long)]
    pub name: Option<String>,
    /// Cname of the endpoint; a fragment is enough when it is unique
    #[arg(long, visible_alias = "cname")]
    pub endpoint: Option<String>,
}

impl From<TargetArgs> for ResolutionQuery {
    fn from(args: TargetArgs) -> Self {
        ResolutionQuery::new(args.name, args.endpoint)
    }
}

#[derive(Args, Debug, Clone)]
pub struct ConfirmedTargetArgs {
    #[command(flatten)]
    pub target: TargetArgs,
    /// App name, to skip the confirmation prompt
    #[arg(long)]
    pub confirm: Option<String>,
}

impl From<ConfirmedTargetArgs> for TargetRequest {
    fn from(args: ConfirmedTargetArgs) -> Self {
        TargetRequest {
            query: args.target.into(),
            confirm: args.confirm,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Certificate chain file (PEM)
    pub crt: PathBuf,
    /// Private key file (PEM)
    pub key: PathBuf,
    /// Add an SNI endpoint
    #[arg(long)]
    pub sni: bool,
    /// Add a dedicated SSL endpoint (requires the SSL Endpoint add-on)
    #[arg(long)]
    pub endpoint: bool,
    /// Skip trust chain resolution
    #[arg(long)]
    pub bypass: bool,
}

impl From<AddArgs> for AddRequest {
    fn from(args: AddArgs) -> Self {
        AddRequest {
            crt: args.crt,
            key: args.key,
            sni: args.sni,
            endpoint: args.endpoint,
            bypass: args.bypass,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct UpdateArgs {
    pub crt: PathBuf,
    pub key: PathBuf,
    #[command(flatten)]
    pub target: TargetArgs,
    /// Skip trust chain resolution
    #[arg(long)]
    pub bypass: bool,
    /// App name, to skip the confirmation prompt
    #[arg(long)]
    pub confirm: Option<String>,
}

impl From<UpdateArgs> for UpdateRequest {
    fn from(args: UpdateArgs) -> Self {
        UpdateRequest {
            crt: args.crt,
            key: args.key,
            query: args.target.into(),
            bypass: args.bypass,
            confirm: args.confirm,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ChainArgs {
    /// Certificate files, in any order
    #[arg(required = true)]
    pub crts: Vec<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct KeyArgs {
    /// Certificate the key must match
    pub crt: PathBuf,
    /// Candidate private keys
    #[arg(required = true)]
    pub keys: Vec<PathBuf>,
}
