use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// What a `new` run actually created, in execution order.
#[derive(Serialize)]
pub struct ScaffoldReport {
    pub project: String,
    pub root: String,
    pub created_dirs: Vec<String>,
    pub written_files: Vec<String>,
}

#[derive(Serialize)]
pub struct PlanEntry {
    pub path: String,
    pub kind: String,
    pub bytes: Option<usize>,
}

#[derive(Serialize)]
pub struct CheckItem {
    pub path: String,
    /// "ok", "modified", or "missing".
    pub status: String,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub project: String,
    /// "ok" only when every item is "ok", otherwise "incomplete".
    pub overall: String,
    pub items: Vec<CheckItem>,
}

#[derive(Serialize)]
pub struct TemplateInfo {
    pub path: String,
    pub bytes: usize,
}
