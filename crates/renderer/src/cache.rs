use crate::error::Result;
use crate::MarkupRenderer;
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// Content-addressed render cache wrapping another [`MarkupRenderer`].
///
/// Key = sha256 of tag and source text, one file per key. Entries are
/// write-once: identical inputs always render to identical markup, so
/// there is no invalidation and no eviction. An unreadable entry is
/// treated as a miss and re-rendered.
pub struct RenderCache<R> {
    dir: PathBuf,
    inner: R,
}

impl<R: MarkupRenderer> RenderCache<R> {
    /// Wrap `inner` with a cache stored under `dir` (created on demand)
    pub fn new(dir: impl Into<PathBuf>, inner: R) -> Self {
        Self {
            dir: dir.into(),
            inner,
        }
    }

    /// Wrap `inner` with the default cache location
    pub fn with_default_dir(inner: R) -> Self {
        Self::new(default_cache_dir(), inner)
    }

    pub fn get_or_render(&self, tag: &str, source: &str) -> Result<String> {
        std::fs::create_dir_all(&self.dir)?;

        let path = self.entry_path(tag, source);
        if let Ok(cached) = std::fs::read_to_string(&path) {
            log::debug!("cache hit: {}", path.display());
            return Ok(cached);
        }

        let markup = self.inner.render(tag, source)?;
        std::fs::write(&path, &markup)?;
        Ok(markup)
    }

    fn entry_path(&self, tag: &str, source: &str) -> PathBuf {
        let mut hasher = Sha256::new();
        hasher.update(tag.as_bytes());
        hasher.update(b"\n");
        hasher.update(source.as_bytes());
        let key = format!("{:x}", hasher.finalize());
        self.dir.join(format!("render-{tag}-{key}"))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl<R: MarkupRenderer> MarkupRenderer for RenderCache<R> {
    fn render(&self, tag: &str, source: &str) -> Result<String> {
        self.get_or_render(tag, source)
    }
}

/// Default cache location, shared across runs
pub fn default_cache_dir() -> PathBuf {
    std::env::temp_dir().join("codewalk-cache")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    /// Stub renderer that counts invocations
    struct CountingRenderer {
        calls: Cell<usize>,
    }

    impl CountingRenderer {
        fn new() -> Self {
            Self {
                calls: Cell::new(0),
            }
        }
    }

    impl MarkupRenderer for CountingRenderer {
        fn render(&self, tag: &str, source: &str) -> Result<String> {
            self.calls.set(self.calls.get() + 1);
            Ok(format!("<pre>{tag}:{source}</pre>"))
        }
    }

    #[test]
    fn test_second_call_hits_cache() {
        let dir = tempfile::tempdir().unwrap();
        let cache = RenderCache::new(dir.path(), CountingRenderer::new());

        let first = cache.get_or_render("go", "package main").unwrap();
        let second = cache.get_or_render("go", "package main").unwrap();

        assert_eq!(first, second);
        assert_eq!(cache.inner.calls.get(), 1);
    }

    #[test]
    fn test_distinct_tags_are_distinct_keys() {
        let dir = tempfile::tempdir().unwrap();
        let cache = RenderCache::new(dir.path(), CountingRenderer::new());

        let go = cache.get_or_render("go", "echo hi").unwrap();
        let console = cache.get_or_render("console", "echo hi").unwrap();

        assert_ne!(go, console);
        assert_eq!(cache.inner.calls.get(), 2);
    }

    #[test]
    fn test_creates_cache_dir_on_demand() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deeper").join("cache");
        let cache = RenderCache::new(&nested, CountingRenderer::new());

        cache.get_or_render("go", "x").unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_cache_survives_new_instance() {
        let dir = tempfile::tempdir().unwrap();

        let first = RenderCache::new(dir.path(), CountingRenderer::new());
        first.get_or_render("go", "x").unwrap();

        let second = RenderCache::new(dir.path(), CountingRenderer::new());
        second.get_or_render("go", "x").unwrap();
        assert_eq!(second.inner.calls.get(), 0);
    }
}
