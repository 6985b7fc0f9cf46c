// Tests for output formatting
//
// Writers are backed by a shared in-memory buffer so the rendered text can
// be inspected after the writer is done with it.

use super::*;
use std::cell::RefCell;
use std::rc::Rc;
use verprec_core::{check_pairs, compare_explained, AcceptancePair, VersionIdentifier};

#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

fn writer(format: OutputFormat, quiet: bool, verbose: u8) -> (OutputWriter, SharedBuffer) {
    let buffer = SharedBuffer::default();
    let writer = OutputWriter::with_writer(format, false, quiet, verbose, Box::new(buffer.clone()));
    (writer, buffer)
}

fn comparison(left: &str, right: &str, explain: bool) -> ComparisonReport {
    let left = VersionIdentifier::parse(left);
    let right = VersionIdentifier::parse(right);
    let decision = compare_explained(left.as_str(), right.as_str()).unwrap();
    ComparisonReport::new(&left, &right, decision, explain)
}

#[test]
fn test_comparison_human() {
    let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
    out.comparison(&comparison("1.0.1b", "1.0.10-alpha.beta", true)).unwrap();

    let text = buffer.contents();
    assert!(text.starts_with("1.0.1b < 1.0.10-alpha.beta\n"));
    assert!(text.contains("textually equal: no"));
    assert!(text.contains("decided at segment 2: \"1b\" vs \"10-alpha\" (leading numbers differ)"));
}

#[test]
fn test_comparison_human_undecided() {
    let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
    out.comparison(&comparison("1.0.0", "1.0.0.0", true)).unwrap();

    let text = buffer.contents();
    assert!(text.starts_with("1.0.0 = 1.0.0.0\n"));
    assert!(text.contains("textually equal: yes"));
    assert!(text.contains("undecided"));
}

#[test]
fn test_comparison_json() {
    let (mut out, buffer) = writer(OutputFormat::Json, false, 0);
    out.comparison(&comparison("beta", "2-rc", false)).unwrap();

    let text = buffer.contents();
    assert!(text.ends_with('\n'));
    let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
    assert_eq!(value["left"], "beta");
    assert_eq!(value["ordering"], "less");
    assert_eq!(value["equals"], false);
}

#[test]
fn test_parse_report_table() {
    let identifier = VersionIdentifier::parse("1.0b.rc-alpha");
    let tokens = identifier.tokens();
    // "rc-alpha" has a non-digit left of the dash
    assert!(tokens.is_err());

    let identifier = VersionIdentifier::parse("1-alpha.10.1b.beta");
    let report = ParseReport::new(identifier.as_str(), identifier.tokens().unwrap());
    let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
    out.parse_report(&report).unwrap();

    let text = buffer.contents();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines[0], "1-alpha.10.1b.beta (4 segment(s))");
    assert!(lines[1].starts_with("# │ segment"));
    assert!(lines[3].contains("1-alpha") && lines[3].contains("dashed"));
    assert!(lines[4].contains("10") && lines[4].contains("numeric"));
    assert!(lines[5].contains("embedded suffix"));
    assert!(lines[6].contains("-1") && lines[6].contains("label"));
}

#[test]
fn test_parse_report_yaml() {
    let identifier = VersionIdentifier::parse("1b");
    let report = ParseReport::new(identifier.as_str(), identifier.tokens().unwrap());
    let (mut out, buffer) = writer(OutputFormat::Yaml, false, 0);
    out.parse_report(&report).unwrap();

    let value: serde_yaml::Value = serde_yaml::from_str(&buffer.contents()).unwrap();
    assert_eq!(value["identifier"].as_str(), Some("1b"));
    assert_eq!(value["segments"][0]["kind"].as_str(), Some("embedded_suffix"));
    assert_eq!(value["segments"][0]["numeric"].as_u64(), Some(1));
}

#[test]
fn test_check_report_human_lists_failures() {
    let pairs = vec![
        AcceptancePair::new("1.0", "1.1"),
        AcceptancePair::new("1.1", "1.0"),
    ];
    let report = CheckReport::new("builtin", check_pairs(&pairs));
    let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
    out.check_report(&report).unwrap();

    let text = buffer.contents();
    assert!(text.contains("pass"));
    assert!(text.contains("FAIL"));
    assert!(text.contains("1 of 2 pair(s) passed (builtin)"));
    assert!(text.contains("1.1 < 1.0: expected less/greater and textual inequality"));
}

#[test]
fn test_check_report_json_is_flat() {
    let report = CheckReport::new("pairs.json", check_pairs(&AcceptancePair::builtin()));
    let (mut out, buffer) = writer(OutputFormat::JsonPretty, false, 0);
    out.check_report(&report).unwrap();

    let value: serde_json::Value = serde_json::from_str(&buffer.contents()).unwrap();
    assert_eq!(value["source"], "pairs.json");
    assert_eq!(value["passed"], 7);
    assert_eq!(value["failed"], 0);
    assert_eq!(value["outcomes"].as_array().unwrap().len(), 7);
}

#[test]
fn test_quiet_suppresses_messages_not_data() {
    let (mut out, buffer) = writer(OutputFormat::Human, true, 0);
    out.info("hidden").unwrap();
    out.success("hidden").unwrap();
    out.data(&serde_json::json!({"shown": true})).unwrap();

    let text = buffer.contents();
    assert!(!text.contains("hidden"));
    assert!(text.contains("\"shown\": true"));
}

#[test]
fn test_machine_formats_skip_messages() {
    let (mut out, buffer) = writer(OutputFormat::Json, false, 2);
    out.info("info").unwrap();
    out.warning("warning").unwrap();
    out.debug("debug").unwrap();
    assert!(buffer.contents().is_empty());
}

#[test]
fn test_plain_message_prefixes() {
    let (mut out, buffer) = writer(OutputFormat::Human, false, 1);
    out.info("a").unwrap();
    out.warning("b").unwrap();
    out.debug("d").unwrap();

    assert_eq!(
        buffer.contents(),
        "INFO: a\nWARNING: b\nDEBUG: d\n"
    );
}

#[test]
fn test_table_alignment() {
    let (mut out, buffer) = writer(OutputFormat::Human, false, 0);
    out.table(
        &["a", "bb"],
        vec![
            vec!["long".to_string(), "x".to_string()],
            vec!["y".to_string(), "z".to_string()],
        ],
    )
    .unwrap();

    assert_eq!(
        buffer.contents(),
        "a    │ bb\n─────┼───\nlong │ x\ny    │ z\n"
    );
}
