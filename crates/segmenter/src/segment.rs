use crate::classify::{classify, LineKind};
use crate::error::Result;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kind of a segment, fixed by the line that opened it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SegmentKind {
    Doc,
    Code,
}

/// A maximal run of same-kind consecutive lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Which side of the page this segment fills
    pub kind: SegmentKind,

    /// Raw documentation text, newline-joined, comment prefixes stripped
    pub docs: String,

    /// Raw code text, newline-joined, verbatim
    pub code: String,

    /// Markdown-rendered `docs`, empty until decorated
    pub docs_rendered: String,

    /// Highlighted `code`, empty until decorated
    pub code_rendered: String,

    /// True for pure-doc segments
    pub code_empty: bool,

    /// True for every segment but the file's last (drives separators)
    pub not_last: bool,
}

impl Segment {
    fn doc(text: String) -> Self {
        Self {
            kind: SegmentKind::Doc,
            docs: text,
            code: String::new(),
            docs_rendered: String::new(),
            code_rendered: String::new(),
            code_empty: false,
            not_last: false,
        }
    }

    fn code(text: String) -> Self {
        Self {
            kind: SegmentKind::Code,
            docs: String::new(),
            code: text,
            docs_rendered: String::new(),
            code_rendered: String::new(),
            code_empty: false,
            not_last: false,
        }
    }
}

/// What the scan last accumulated, tracked across lines.
///
/// Held explicitly (rather than peeking at the output tail) so the
/// blank-line reset is a plain state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LastSeen {
    None,
    Doc,
    Code,
}

/// Segment an in-memory source text.
///
/// One linear pass. A blank line resets the scan state so the next
/// non-blank line opens a fresh segment whatever its kind; that is the
/// only way two adjacent segments of the same kind can appear.
pub fn segment_lines<'a>(lines: impl IntoIterator<Item = &'a str>) -> Vec<Segment> {
    let mut segs: Vec<Segment> = Vec::new();
    let mut last_seen = LastSeen::None;

    for line in lines {
        match classify(line) {
            LineKind::Blank => {
                last_seen = LastSeen::None;
            }
            LineKind::Skip => {
                log::debug!("SKIP: {line}");
            }
            LineKind::Doc(trimmed) => {
                // A fresh segment is also needed when the open segment holds
                // code: an intervening blank reset can leave last_seen == Doc
                // while the tail segment is still a code segment.
                let new_docs = last_seen == LastSeen::None
                    || (last_seen != LastSeen::Doc
                        && segs.last().is_some_and(|seg| !seg.docs.is_empty()));
                match segs.last_mut() {
                    Some(open) if !new_docs && open.kind == SegmentKind::Doc => {
                        open.docs.push('\n');
                        open.docs.push_str(&trimmed);
                    }
                    _ => {
                        log::debug!("NEWSEG");
                        segs.push(Segment::doc(trimmed));
                    }
                }
                log::debug!("DOCS: {line}");
                last_seen = LastSeen::Doc;
            }
            LineKind::Code(text) => {
                let new_code = last_seen == LastSeen::None
                    || (last_seen != LastSeen::Code
                        && segs.last().is_some_and(|seg| !seg.code.is_empty()));
                match segs.last_mut() {
                    Some(open) if !new_code && open.kind == SegmentKind::Code => {
                        open.code.push('\n');
                        open.code.push_str(&text);
                    }
                    _ => {
                        log::debug!("NEWSEG");
                        segs.push(Segment::code(text));
                    }
                }
                log::debug!("CODE: {line}");
                last_seen = LastSeen::Code;
            }
        }
    }

    let len = segs.len();
    for (i, seg) in segs.iter_mut().enumerate() {
        seg.code_empty = seg.code.is_empty();
        seg.not_last = i < len - 1;
    }
    segs
}

/// Segment a string of source text
pub fn segment_str(source: &str) -> Vec<Segment> {
    segment_lines(source.split('\n'))
}

/// Segment a source file, returning its segments and highlighter language
pub fn segment_file(path: impl AsRef<Path>) -> Result<(Vec<Segment>, Language)> {
    let path = path.as_ref();
    let language = Language::from_path(path)?;
    let source = std::fs::read_to_string(path)?;
    Ok((segment_str(&source), language))
}
