use crate::error::{Result, SiteError};
use crate::example::{parse_example_list, slug, Example};
use codewalk_renderer::{decorate_segments, MarkupRenderer};
use codewalk_segmenter::segment_file;
use std::path::{Path, PathBuf};

/// Builds the ordered example list from an examples directory.
///
/// For each listed name: derive the slug, glob the example's source
/// files, segment and decorate each one, then link every example to its
/// successor. Files are processed strictly sequentially.
pub struct Assembler<'a> {
    examples_dir: &'a Path,
    highlighter: &'a dyn MarkupRenderer,
}

impl<'a> Assembler<'a> {
    pub fn new(examples_dir: &'a Path, highlighter: &'a dyn MarkupRenderer) -> Self {
        Self {
            examples_dir,
            highlighter,
        }
    }

    /// Assemble examples from the list file at `list_path`
    pub fn assemble_from_list(&self, list_path: &Path) -> Result<Vec<Example>> {
        let text = std::fs::read_to_string(list_path)
            .map_err(|source| SiteError::io(list_path, source))?;
        self.assemble(&parse_example_list(&text))
    }

    /// Assemble examples for the given ordered display names
    pub fn assemble(&self, names: &[String]) -> Result<Vec<Example>> {
        let mut examples = Vec::with_capacity(names.len());
        for name in names {
            examples.push(self.assemble_one(name)?);
        }

        // Link each example to its successor; the last stays unlinked.
        let successors: Vec<_> = examples.iter().skip(1).map(Example::summary).collect();
        for (example, next) in examples.iter_mut().zip(successors) {
            example.next = Some(next);
        }

        Ok(examples)
    }

    fn assemble_one(&self, name: &str) -> Result<Example> {
        let id = slug(name);
        log::debug!("assembling example '{name}' ({id})");

        let mut segments_by_file = Vec::new();
        for path in self.source_paths(&id)? {
            let (mut segments, language) = segment_file(&path)?;
            decorate_segments(&mut segments, language, self.highlighter)?;
            segments_by_file.push(segments);
        }

        Ok(Example {
            id,
            name: name.to_string(),
            segments_by_file,
            next: None,
        })
    }

    fn source_paths(&self, id: &str) -> Result<Vec<PathBuf>> {
        let pattern = self.examples_dir.join(id).join("*");
        let mut paths = glob::glob(&pattern.to_string_lossy())?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        paths.sort();
        Ok(paths)
    }
}
