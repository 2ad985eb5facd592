use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use pixview_core::navigation::list_images_in_same_directory;

#[derive(Args)]
pub struct ListArgs {
    /// An image file or a directory
    pub path: PathBuf,

    /// Viewer config (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ListArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let images = list_images_in_same_directory(&args.path, config.image_extensions.as_slice())?;

    for (i, path) in images.iter().enumerate() {
        let marker = if *path == args.path { '*' } else { ' ' };
        println!("{marker} {:>4}  {}", i + 1, path.display());
    }
    if images.is_empty() {
        eprintln!("No images found");
    }
    Ok(())
}
