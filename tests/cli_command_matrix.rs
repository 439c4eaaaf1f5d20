//! Every subcommand must emit the stable `{"ok": true, "data": ...}` envelope
//! under `--json`.

mod common;
use common::TestEnv;

#[test]
fn json_envelope_is_stable_across_subcommands() {
    let env = TestEnv::new();

    // `new` first so that `check` passes.
    let matrix: [&[&str]; 5] = [
        &["new"],
        &["plan"],
        &["check"],
        &["template", "list"],
        &["template", "show", "extension/manifest.json"],
    ];

    for args in matrix {
        let out = env.run_json(args);
        assert_eq!(out["ok"], true, "ok=true for {:?}", args);
        assert!(!out["data"].is_null(), "data present for {:?}", args);
    }
}
