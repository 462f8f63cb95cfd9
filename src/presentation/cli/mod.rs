pub mod images;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use images::ImageCommands;

use crate::infrastructure::catalog::PICSUM_URL;

#[derive(Debug, Parser)]
#[command(author, version, about = "Browse and flag catalog images", long_about = None)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "SEGPIC_URL",
        default_value = "http://localhost:8081"
    )]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    Serve(ServeCommand),

    /// List and flag images on a running server
    Image {
        #[command(subcommand)]
        command: ImageCommands,
    },
}

#[derive(Debug, Args)]
pub struct ServeCommand {
    /// Directory holding the image store
    #[arg(long, env = "SEGPIC_DATA_DIR", default_value = "/tmp/segpic")]
    pub data_dir: PathBuf,

    #[arg(long, env = "SEGPIC_BIND_ADDRESS", default_value = "0.0.0.0:8081")]
    pub bind_address: SocketAddr,

    /// Base URL of the image catalog
    #[arg(long, env = "SEGPIC_CATALOG_URL", default_value = PICSUM_URL)]
    pub catalog_url: String,

    /// Directory holding the built frontend
    #[arg(long, env = "SEGPIC_STATIC_DIR", default_value = "./web/dist")]
    pub static_dir: PathBuf,
}

pub(crate) fn print_json<T>(value: &T) -> anyhow::Result<()>
where
    T: serde::Serialize,
{
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
