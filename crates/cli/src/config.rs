use std::env;
use std::path::PathBuf;

/// Environment variable overriding the output directory
pub const SITE_DIR_VAR: &str = "SITEDIR";

/// Environment variable enabling segmentation tracing (`DEBUG=1`)
pub const DEBUG_VAR: &str = "DEBUG";

/// Resolved run configuration, built once at startup and threaded through
/// the pipeline. Flags win over environment variables, environment
/// variables win over defaults.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Example list file, one display name per line
    pub list_path: PathBuf,

    /// Directory holding one subdirectory of source files per example slug
    pub examples_dir: PathBuf,

    /// Directory holding the passthrough assets (stylesheet, icon, 404 page)
    pub assets_dir: PathBuf,

    /// Output directory for the generated site
    pub out_dir: PathBuf,

    /// Render cache directory
    pub cache_dir: PathBuf,
}

impl SiteConfig {
    pub fn resolve(
        list_path: PathBuf,
        examples_dir: PathBuf,
        assets_dir: PathBuf,
        out_dir: Option<PathBuf>,
        cache_dir: Option<PathBuf>,
    ) -> Self {
        let out_dir = out_dir
            .or_else(|| env::var_os(SITE_DIR_VAR).map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from("site"));
        let cache_dir = cache_dir.unwrap_or_else(codewalk_renderer::default_cache_dir);
        Self {
            list_path,
            examples_dir,
            assets_dir,
            out_dir,
            cache_dir,
        }
    }

    /// Whether the legacy `DEBUG=1` tracing toggle is set
    pub fn debug_tracing() -> bool {
        env::var(DEBUG_VAR).as_deref() == Ok("1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_beats_default() {
        let config = SiteConfig::resolve(
            PathBuf::from("examples.txt"),
            PathBuf::from("examples"),
            PathBuf::from("assets"),
            Some(PathBuf::from("/tmp/out")),
            None,
        );
        assert_eq!(config.out_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn test_default_out_dir() {
        // Environment precedence is covered by the CLI integration test,
        // which controls the variable per process.
        if env::var_os(SITE_DIR_VAR).is_none() {
            let config = SiteConfig::resolve(
                PathBuf::from("examples.txt"),
                PathBuf::from("examples"),
                PathBuf::from("assets"),
                None,
                None,
            );
            assert_eq!(config.out_dir, PathBuf::from("site"));
        }
    }

    #[test]
    fn test_default_cache_dir() {
        let config = SiteConfig::resolve(
            PathBuf::from("examples.txt"),
            PathBuf::from("examples"),
            PathBuf::from("assets"),
            None,
            None,
        );
        assert_eq!(config.cache_dir, codewalk_renderer::default_cache_dir());
    }
}
