//! Integration tests for segmentation.

use pretty_assertions::assert_eq;
use rstest::rstest;
use senv_blocks::{BlockName, Role, segment};

const SAMPLE: &str = "NODE_ENV=Development\n\
USER=egriff38\n\
\n\
## Dev\n\
API_TOKEN=ABC123\n\
\n\
## Staging\n\
# API_TOKEN=XYZ890\n";

#[test]
fn test_sample_file_block_structure() {
    let doc = segment(SAMPLE);

    assert_eq!(doc.blocks().len(), 3);
    assert_eq!(doc.blocks()[0].name, BlockName::Default);
    assert_eq!(doc.blocks()[1].name, BlockName::Named("Dev".into()));
    assert_eq!(doc.blocks()[2].name, BlockName::Named("Staging".into()));

    // The default block holds the two assignments and the blank line.
    assert_eq!(doc.blocks()[0].lines, vec![0, 1, 2]);
    // Dev owns its variable and the blank line before the next header.
    assert_eq!(doc.blocks()[1].lines, vec![4, 5]);
    assert_eq!(doc.blocks()[2].lines, vec![7]);
}

#[test]
fn test_sample_file_roles() {
    let doc = segment(SAMPLE);

    assert!(matches!(
        doc.lines()[0].role,
        Role::Variable { active: true, .. }
    ));
    assert_eq!(doc.lines()[2].role, Role::Other);
    assert_eq!(doc.lines()[3].role, Role::Header);
    assert!(matches!(
        doc.lines()[7].role,
        Role::Variable { active: false, .. }
    ));
}

#[test]
fn test_headers_belong_to_no_block() {
    let doc = segment(SAMPLE);
    for block in doc.blocks() {
        for &ord in &block.lines {
            assert_ne!(doc.lines()[ord].role, Role::Header);
        }
    }
}

#[test]
fn test_raw_text_preserved_exactly() {
    let doc = segment(SAMPLE);
    let rebuilt: String = doc
        .lines()
        .iter()
        .map(|l| format!("{}{}", l.raw, l.terminator.as_str()))
        .collect();
    assert_eq!(rebuilt, SAMPLE);
}

#[rstest]
#[case::active("API_TOKEN=ABC123", true)]
#[case::active_indented("  API_TOKEN=ABC123", true)]
#[case::inactive("# API_TOKEN=ABC123", false)]
#[case::inactive_indented("  #  API_TOKEN=ABC123", false)]
#[case::inactive_tab("#\tAPI_TOKEN=ABC123", false)]
fn test_variable_forms(#[case] text: &str, #[case] expected_active: bool) {
    let doc = segment(&format!("{text}\n"));
    let Role::Variable { active, .. } = doc.lines()[0].role else {
        panic!("{text:?} should classify as a variable");
    };
    assert_eq!(active, expected_active);
}

#[rstest]
#[case::blank("")]
#[case::whitespace("   ")]
#[case::free_comment("# not an assignment")]
#[case::hash_glued_to_key("#API_TOKEN=ABC123")]
#[case::double_hash_no_space("##Dev")]
#[case::double_hash_tab("##\tDev")]
#[case::missing_equals("API_TOKEN")]
#[case::bad_identifier("API TOKEN=x")]
#[case::unicode_garbage("\u{fffd}\u{fffd}\u{fffd}")]
fn test_other_forms(#[case] text: &str) {
    let doc = segment(&format!("{text}\n"));
    assert_eq!(doc.lines()[0].role, Role::Other);
}

#[test]
fn test_header_beats_comment_classification() {
    // `## Dev` could also read as a commented line; it must be a header.
    let doc = segment("## Dev\n");
    assert_eq!(doc.lines()[0].role, Role::Header);
    assert_eq!(doc.blocks()[1].name, BlockName::Named("Dev".into()));
}

#[test]
fn test_header_name_can_contain_equals() {
    let doc = segment("## FOO=1\n");
    assert_eq!(doc.blocks()[1].name, BlockName::Named("FOO=1".into()));
}

#[test]
fn test_binary_looking_input_is_total() {
    let text = "\u{0}\u{1}\u{2}\nFOO=1\n\u{7f}";
    let doc = segment(text);
    assert_eq!(doc.lines().len(), 3);
    assert_eq!(doc.lines()[0].role, Role::Other);
    assert!(matches!(
        doc.lines()[1].role,
        Role::Variable { active: true, .. }
    ));
}
