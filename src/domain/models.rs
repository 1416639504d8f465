use serde::Serialize;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// One cross-reference problem found by `check`.
///
/// `kind` is one of `undefined_reference`, `unused_definition`,
/// `duplicate_definition`.
#[derive(Serialize, Clone)]
pub struct Diagnostic {
    pub kind: String,
    pub label: String,
    pub line: usize,
}

#[derive(Serialize)]
pub struct CheckReport {
    pub overall: String,
    pub items: usize,
    pub definitions: usize,
    pub usages: usize,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
pub struct ItemRow {
    pub line: usize,
    pub label: String,
    pub description: Option<String>,
    pub url: Option<String>,
}

#[derive(Serialize)]
pub struct RefRow {
    pub line: usize,
    pub label: String,
    pub url: String,
    pub used: bool,
}

#[derive(Serialize)]
pub struct RemoveReport {
    pub label: String,
    pub items_removed: usize,
    pub definitions_removed: usize,
}

#[derive(Serialize)]
pub struct AddReport {
    pub label: String,
    pub url: String,
    pub item_line: usize,
    pub definition_line: usize,
}
