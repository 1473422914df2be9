pub mod init;
pub mod login;
pub mod logout;
pub mod task;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Sign in by storing an access token")]
    Login,
    #[command(about = "Sign out and remove the cached session token")]
    Logout,
    #[command(about = "Manage tasks on the remote server")]
    Task(task::TaskArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Login => login::cmd().await,
            Commands::Logout => logout::cmd(),
            Commands::Task(args) => task::cmd(args).await,
        }
    }
}
