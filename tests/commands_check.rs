use std::path::PathBuf;

use strman::commands::check::collect_reports;
use strman::profile::{Profile, Value};

fn document(yaml: &str) -> Profile {
    let value: Value = serde_yaml::from_str(yaml).expect("yaml fixture");
    match value {
        Value::Map(root) => Profile {
            path: PathBuf::from("fixture.yaml"),
            root,
        },
        _ => panic!("fixture root must be a mapping"),
    }
}

#[test]
fn reports_every_leaf_tag() {
    let doc = document(
        "greeting: hello\nflavor:\n  lines:\n    - one\n    - two\nnested:\n  deep:\n    value: ok\n",
    );

    let reports = collect_reports(&doc);
    let tags: Vec<&str> = reports.iter().map(|report| report.tag.as_str()).collect();

    assert_eq!(tags, ["greeting", "flavor.lines", "nested.deep.value"]);
    assert!(reports.iter().all(|report| report.usable));
}

#[test]
fn labels_choice_lists_with_their_size() {
    let doc = document("flavor:\n  - one\n  - two\n  - three\n");

    let reports = collect_reports(&doc);

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].detail, "3 choices");
}

#[test]
fn flags_unsupported_shapes() {
    let doc = document(
        "ok: fine\nbad_null: null\nbad_empty: []\nbad_mixed:\n  - plain\n  - [nested]\nbad_map: {}\n",
    );

    let reports = collect_reports(&doc);
    let broken: Vec<&str> = reports
        .iter()
        .filter(|report| !report.usable)
        .map(|report| report.tag.as_str())
        .collect();

    assert_eq!(broken, ["bad_null", "bad_empty", "bad_mixed", "bad_map"]);
}
