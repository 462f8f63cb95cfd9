use anyhow::Result;
use clap::{Args, Subcommand};

use super::print_json;
use crate::infrastructure::client::SegpicClient;

#[derive(Debug, Subcommand)]
pub enum ImageCommands {
    /// List all cached images
    List,
    /// Toggle the flag on an image
    Flag(FlagImageCommand),
}

pub async fn run(client: &SegpicClient, cmd: ImageCommands) -> Result<()> {
    match cmd {
        ImageCommands::List => list_images(client).await,
        ImageCommands::Flag(c) => flag_image(client, c).await,
    }
}

#[derive(Debug, Args)]
pub struct FlagImageCommand {
    #[arg(long)]
    pub id: String,
}

pub async fn list_images(client: &SegpicClient) -> Result<()> {
    let images = client.images().list().await?;
    print_json(&images)
}

pub async fn flag_image(client: &SegpicClient, command: FlagImageCommand) -> Result<()> {
    let image = client.images().toggle_flag(&command.id).await?;
    print_json(&image)
}
