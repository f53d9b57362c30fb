//! Activation state reporting and rewriting.
//!
//! The read path reports which named blocks currently have at least one
//! uncommented variable. The write path produces a full replacement text in
//! which exactly the selected blocks are active, touching nothing but the
//! variable lines whose state disagrees with the selection.

use std::collections::BTreeSet;

use crate::parser::{BlockName, Document, Role};

/// Returns the names of all currently active blocks.
///
/// A named block is active iff at least one variable line in any block
/// with that name is uncommented — one live variable is enough, even when
/// sibling variables remain commented. Blocks with no variable lines are
/// never active, and the default block is never reported.
///
/// # Example
/// ```
/// use senv_blocks::{active_blocks, segment};
///
/// let doc = segment("## Dev\nAPI_TOKEN=ABC123\n## Staging\n# API_TOKEN=XYZ890\n");
/// let active = active_blocks(&doc);
/// assert!(active.contains("Dev"));
/// assert!(!active.contains("Staging"));
/// ```
pub fn active_blocks(doc: &Document) -> BTreeSet<String> {
    let mut active = BTreeSet::new();
    for block in doc.blocks() {
        let BlockName::Named(name) = &block.name else {
            continue;
        };
        let lit = block.lines.iter().any(|&ord| {
            matches!(doc.lines()[ord].role, Role::Variable { active: true, .. })
        });
        if lit {
            active.insert(name.clone());
        }
    }
    active
}

/// Rewrites the document so that exactly the blocks in `target` are active,
/// returning the complete replacement text.
///
/// In selected blocks every commented variable is uncommented by dropping
/// its comment prefix; in unselected named blocks every uncommented
/// variable gains the literal prefix `# `. Lines already in the desired
/// state are left byte-identical, as are all header lines, all
/// [`Role::Other`] lines, and the whole default block. Each line keeps the
/// terminator it had on input, so applying the current activation set
/// reproduces the input exactly.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use senv_blocks::{apply, segment};
///
/// let doc = segment("## Dev\nAPI_TOKEN=ABC123\n## Staging\n# API_TOKEN=XYZ890\n");
/// let target: BTreeSet<String> = ["Staging".to_string()].into();
/// assert_eq!(
///     apply(&doc, &target),
///     "## Dev\n# API_TOKEN=ABC123\n## Staging\nAPI_TOKEN=XYZ890\n"
/// );
/// ```
pub fn apply(doc: &Document, target: &BTreeSet<String>) -> String {
    // Planned replacement text per ordinal; None keeps the line as-is.
    let mut edits: Vec<Option<String>> = vec![None; doc.lines().len()];
    let mut touched = 0usize;

    for block in doc.blocks() {
        let BlockName::Named(name) = &block.name else {
            // The default block has no header to select it by and is never
            // toggled.
            continue;
        };
        let want_active = target.contains(name);
        for &ord in &block.lines {
            let line = &doc.lines()[ord];
            let Role::Variable {
                active,
                body_offset,
            } = line.role
            else {
                continue;
            };
            if active == want_active {
                continue;
            }
            edits[ord] = Some(if want_active {
                line.raw[body_offset..].to_string()
            } else {
                format!("# {}", line.raw)
            });
            touched += 1;
        }
    }

    tracing::debug!(lines = touched, "rewriting variable lines");

    let mut out = String::new();
    for line in doc.lines() {
        match &edits[line.ordinal] {
            Some(text) => out.push_str(text),
            None => out.push_str(&line.raw),
        }
        out.push_str(line.terminator.as_str());
    }
    out
}
