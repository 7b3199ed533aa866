use sigdoc_core::{render_document, OutputFormat, RenderConfig};
use std::path::PathBuf;
use tracing::info;

pub fn run(
    path: PathBuf,
    format: OutputFormat,
    config: Option<PathBuf>,
    base_url: Option<String>,
    strict: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = crate::load_document(&path, strict)?;

    let mut config = match config {
        Some(config_path) => RenderConfig::load(config_path)?,
        None => RenderConfig::default(),
    };
    if base_url.is_some() {
        config.base_url = base_url;
    }

    println!("{}", render_document(&doc, format, &config)?);
    info!("Rendered {} members", doc.members.len());
    Ok(())
}
