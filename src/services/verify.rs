use crate::domain::models::{CheckItem, CheckReport};
use crate::templates::TEMPLATES;
use std::path::Path;

/// Compares an on-disk scaffold against the template catalog.
///
/// A missing project directory is not an error: every file simply reports
/// `missing` and the overall status is `incomplete`.
pub fn check_project(base: &Path, name: &str) -> anyhow::Result<CheckReport> {
    let root = base.join(name);

    let mut items = Vec::new();
    for t in &TEMPLATES {
        let path = root.join(t.rel_path);
        let status = if !path.is_file() {
            "missing"
        } else if std::fs::read(&path)? == t.contents.as_bytes() {
            "ok"
        } else {
            "modified"
        };
        items.push(CheckItem {
            path: format!("{}/{}", name, t.rel_path),
            status: status.to_string(),
        });
    }

    let overall = if items.iter().all(|i| i.status == "ok") {
        "ok"
    } else {
        "incomplete"
    };
    Ok(CheckReport {
        project: name.to_string(),
        overall: overall.to_string(),
        items,
    })
}
