use anyhow::{Context, Result};
use clap::Parser;
use codewalk_renderer::{HighlightRenderer, RenderCache};
use codewalk_site::{copy_static_assets, ensure_dir, write_example_pages, write_index, Assembler};
use std::path::PathBuf;

mod config;

pub use config::SiteConfig;

#[derive(Parser)]
#[command(name = "codewalk")]
#[command(about = "Generate a static site from annotated source examples", long_about = None)]
#[command(version)]
struct Cli {
    /// Example list file, one display name per line
    #[arg(long, default_value = "examples.txt")]
    list: PathBuf,

    /// Directory holding one subdirectory of source files per example
    #[arg(long, default_value = "examples")]
    examples_dir: PathBuf,

    /// Directory holding the stylesheet, icon, and 404 page
    #[arg(long, default_value = "assets")]
    assets_dir: PathBuf,

    /// Output directory (falls back to $SITEDIR, then "site")
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Render cache directory (defaults to a shared temp location)
    #[arg(long)]
    cache_dir: Option<PathBuf>,
}

fn init_logging() {
    let mut builder = env_logger::Builder::from_default_env();
    if SiteConfig::debug_tracing() {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Entry point shared by the binary; the single place any failure turns
/// into process termination.
pub fn main_entry() -> Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = SiteConfig::resolve(
        cli.list,
        cli.examples_dir,
        cli.assets_dir,
        cli.out_dir,
        cli.cache_dir,
    );
    run(&config)
}

/// Run the full generation pipeline: assets, assembly, pages, index.
/// Sequential and idempotent; stale files from earlier runs are left in
/// place for the caller to clean up.
pub fn run(config: &SiteConfig) -> Result<()> {
    log::info!("generating site into {}", config.out_dir.display());

    ensure_dir(&config.out_dir)
        .with_context(|| format!("creating output dir {}", config.out_dir.display()))?;
    copy_static_assets(&config.assets_dir, &config.out_dir)
        .with_context(|| format!("copying assets from {}", config.assets_dir.display()))?;

    let highlighter = RenderCache::new(&config.cache_dir, HighlightRenderer::new());
    let assembler = Assembler::new(&config.examples_dir, &highlighter);
    let examples = assembler
        .assemble_from_list(&config.list_path)
        .with_context(|| format!("assembling examples from {}", config.list_path.display()))?;

    write_index(&examples, &config.out_dir).context("writing index page")?;
    write_example_pages(&examples, &config.out_dir).context("writing example pages")?;

    log::info!("wrote {} example pages", examples.len());
    Ok(())
}
