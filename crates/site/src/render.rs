use crate::error::{Result, SiteError};
use crate::example::Example;
use askama::Template;
use std::path::Path;

/// Rendered page for one example
#[derive(Template)]
#[template(path = "example.html")]
struct ExamplePage<'a> {
    example: &'a Example,
}

/// Rendered index listing every example
#[derive(Template)]
#[template(path = "index.html")]
struct IndexPage<'a> {
    examples: &'a [Example],
}

/// Static files copied byte-for-byte into the output directory
const STATIC_ASSETS: [&str; 3] = ["site.css", "favicon.ico", "404.html"];

/// Create the output directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|source| SiteError::io(dir, source))
}

/// Copy the stylesheet, icon, and error page into the output directory
pub fn copy_static_assets(assets_dir: &Path, out_dir: &Path) -> Result<()> {
    for asset in STATIC_ASSETS {
        let src = assets_dir.join(asset);
        let dst = out_dir.join(asset);
        let bytes = std::fs::read(&src).map_err(|source| SiteError::io(&src, source))?;
        std::fs::write(&dst, bytes).map_err(|source| SiteError::io(&dst, source))?;
    }
    Ok(())
}

/// Write the index page listing all examples
pub fn write_index(examples: &[Example], out_dir: &Path) -> Result<()> {
    let html = IndexPage { examples }.render()?;
    let path = out_dir.join("index.html");
    std::fs::write(&path, html).map_err(|source| SiteError::io(&path, source))
}

/// Write one page per example, named by its slug
pub fn write_example_pages(examples: &[Example], out_dir: &Path) -> Result<()> {
    for example in examples {
        let html = ExamplePage { example }.render()?;
        let path = out_dir.join(&example.id);
        log::debug!("writing {}", path.display());
        std::fs::write(&path, html).map_err(|source| SiteError::io(&path, source))?;
    }
    Ok(())
}
