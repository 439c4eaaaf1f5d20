use crate::domain::models::{PlanEntry, ScaffoldReport};
use crate::templates::{PROJECT_DIRS, TEMPLATES};
use std::path::Path;

/// Creates the project tree under `base` and writes every template file.
///
/// Directories first, then files in catalog order. The first failing step
/// aborts the rest; earlier writes are left in place. Existing files are
/// overwritten with identical bytes, unrelated files are never touched.
pub fn scaffold_project(base: &Path, name: &str) -> anyhow::Result<ScaffoldReport> {
    let root = base.join(name);

    let mut created_dirs = Vec::new();
    for dir in PROJECT_DIRS {
        std::fs::create_dir_all(root.join(dir))?;
        created_dirs.push(format!("{}/{}", name, dir));
    }

    let mut written_files = Vec::new();
    for t in &TEMPLATES {
        std::fs::write(root.join(t.rel_path), t.contents)?;
        written_files.push(format!("{}/{}", name, t.rel_path));
    }

    Ok(ScaffoldReport {
        project: name.to_string(),
        root: root.to_string_lossy().to_string(),
        created_dirs,
        written_files,
    })
}

/// Lists everything `scaffold_project` would create, without touching disk.
pub fn plan_project(name: &str) -> Vec<PlanEntry> {
    let mut entries = Vec::new();
    for dir in PROJECT_DIRS {
        entries.push(PlanEntry {
            path: format!("{}/{}", name, dir),
            kind: "dir".to_string(),
            bytes: None,
        });
    }
    for t in &TEMPLATES {
        entries.push(PlanEntry {
            path: format!("{}/{}", name, t.rel_path),
            kind: "file".to_string(),
            bytes: Some(t.contents.len()),
        });
    }
    entries
}
