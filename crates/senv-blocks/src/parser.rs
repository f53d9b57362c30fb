//! Segmentation of env-file text into classified lines and named blocks.
//!
//! A header line starts a new block:
//!
//! ```text
//! ## Staging
//! # API_TOKEN=XYZ890
//! ```
//!
//! Variable lines are `KEY=value` assignments, optionally commented out
//! with a single `#`. Every other line (blank lines, free comments,
//! malformed assignments) is classified [`Role::Other`] and passed through
//! rewrites untouched.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Matches a block header: optional indentation, `##`, at least one space,
/// then the name (trimmed, may be empty). A `##` with no space after it is
/// not a header and falls through to the other classifications.
static HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*## +(.*?)\s*$").expect("Invalid header regex"));

/// Matches a variable line, commented or not. Group 1 is the comment
/// prefix (absent on active lines), group 2 the `KEY=value` body.
///
/// A `##` line never reaches this regex — header detection runs first, and
/// `#` followed by a second `#` fails the whitespace requirement here.
static VARIABLE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(#\s+)?([A-Za-z0-9_]+=.*)$").expect("Invalid variable regex")
});

/// The terminator that followed a line in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terminator {
    /// `\n`
    Lf,
    /// `\r\n`
    CrLf,
    /// End of input with no trailing terminator.
    None,
}

impl Terminator {
    /// The literal text of this terminator.
    pub fn as_str(self) -> &'static str {
        match self {
            Terminator::Lf => "\n",
            Terminator::CrLf => "\r\n",
            Terminator::None => "",
        }
    }
}

/// Classification of a single line, computed once at parse time.
///
/// Rewrites act on this stored role rather than re-scanning the text, so
/// the read pass and the write pass can never disagree about what a line
/// is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A `## <name>` block boundary. Owned by no block, preserved verbatim.
    Header,
    /// A `KEY=value` assignment, possibly commented out. `body_offset` is
    /// the byte position where the assignment begins, i.e. everything the
    /// comment prefix (indentation, `#`, whitespace) occupies before it.
    Variable { active: bool, body_offset: usize },
    /// Anything else. Never touched by the write pass.
    Other,
}

/// One physical line of the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Exact original text, excluding the terminator.
    pub raw: String,
    /// Zero-based position in the file.
    pub ordinal: usize,
    /// Role, fixed at parse time.
    pub role: Role,
    /// The terminator that followed this line.
    pub terminator: Terminator,
}

/// Identifier of a block.
///
/// The run of lines before the first header belongs to
/// [`BlockName::Default`]. Header syntax can only ever produce
/// [`BlockName::Named`] values, so the default block can never collide with
/// a user-chosen name and is never selectable through the header mechanism.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockName {
    /// The implicit leading block, before any header.
    Default,
    /// A block introduced by a `## <name>` header.
    Named(String),
}

impl BlockName {
    /// The header-given name, or `None` for the default block.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            BlockName::Default => None,
            BlockName::Named(name) => Some(name),
        }
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockName::Default => write!(f, "(default)"),
            BlockName::Named(name) => write!(f, "{}", name),
        }
    }
}

/// A named, contiguous run of lines between header boundaries.
///
/// Names are not required to be unique; two blocks with the same name are
/// treated as one logical unit for activation purposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// The block's identifier.
    pub name: BlockName,
    /// Ordinals of the lines this block owns. Header lines are boundaries
    /// and belong to no block.
    pub lines: Vec<usize>,
}

/// A segmented file: the full line sequence plus its block structure.
///
/// The line sequence is the single source of truth; blocks refer to lines
/// by ordinal. Concatenating every line with its terminator reproduces the
/// input byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<Line>,
    blocks: Vec<Block>,
}

impl Document {
    /// All lines in ordinal order.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// All blocks in file order. The first entry is always the default
    /// block, even when it owns no lines.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Header-given block names in first-occurrence order, duplicates
    /// collapsed. The default block is not listed.
    pub fn block_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for block in &self.blocks {
            if let Some(name) = block.name.as_named() {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }
}

/// Segments raw file text into a [`Document`].
///
/// Total over all inputs: empty text yields a document with no lines and
/// only the default block, and text with no recognizable structure yields
/// one default block of [`Role::Other`] lines.
///
/// # Example
/// ```
/// use senv_blocks::{BlockName, segment};
///
/// let doc = segment("NODE_ENV=Development\n\n## Dev\nAPI_TOKEN=ABC123\n");
/// assert_eq!(doc.blocks().len(), 2);
/// assert_eq!(doc.blocks()[0].name, BlockName::Default);
/// assert_eq!(doc.blocks()[1].name, BlockName::Named("Dev".into()));
/// ```
pub fn segment(text: &str) -> Document {
    let mut lines: Vec<Line> = Vec::new();
    let mut blocks = vec![Block {
        name: BlockName::Default,
        lines: Vec::new(),
    }];

    let mut rest = text;
    let mut ordinal = 0;
    while !rest.is_empty() {
        let (raw, terminator, remainder) = match rest.find('\n') {
            Some(pos) if pos > 0 && rest.as_bytes()[pos - 1] == b'\r' => {
                (&rest[..pos - 1], Terminator::CrLf, &rest[pos + 1..])
            }
            Some(pos) => (&rest[..pos], Terminator::Lf, &rest[pos + 1..]),
            None => (rest, Terminator::None, ""),
        };

        // Header detection runs before the variable test so that `##` is
        // never mistaken for a commented assignment.
        if let Some(caps) = HEADER_REGEX.captures(raw) {
            let name = caps.get(1).map_or("", |m| m.as_str()).to_string();
            blocks.push(Block {
                name: BlockName::Named(name),
                lines: Vec::new(),
            });
            lines.push(Line {
                raw: raw.to_string(),
                ordinal,
                role: Role::Header,
                terminator,
            });
        } else {
            let role = classify_variable(raw).unwrap_or(Role::Other);
            blocks
                .last_mut()
                .expect("blocks always starts with the default block")
                .lines
                .push(ordinal);
            lines.push(Line {
                raw: raw.to_string(),
                ordinal,
                role,
                terminator,
            });
        }

        ordinal += 1;
        rest = remainder;
    }

    tracing::debug!(
        lines = lines.len(),
        blocks = blocks.len(),
        "segmented input"
    );

    Document { lines, blocks }
}

/// Classifies a non-header line as a variable, or `None` for anything that
/// does not match the `KEY=value` shape.
fn classify_variable(raw: &str) -> Option<Role> {
    let caps = VARIABLE_REGEX.captures(raw)?;
    let body = caps.get(2).expect("variable regex always captures a body");
    Some(Role::Variable {
        active: caps.get(1).is_none(),
        body_offset: body.start(),
    })
}
