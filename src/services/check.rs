use crate::document::{label_key, Document, LinkDef};
use crate::domain::models::{CheckReport, Diagnostic, ItemRow, RefRow};
use std::collections::{HashMap, HashSet};

/// Cross-references body usages against the reference table.
///
/// Every usage must resolve to exactly one definition, and every definition
/// must be referenced from the body. Anything else becomes a diagnostic.
pub fn check_document(doc: &Document) -> CheckReport {
    let mut diagnostics = Vec::new();

    let mut first_def: HashMap<String, usize> = HashMap::new();
    for def in &doc.definitions {
        let key = label_key(&def.label);
        if first_def.contains_key(&key) {
            diagnostics.push(Diagnostic {
                kind: "duplicate_definition".to_string(),
                label: def.label.clone(),
                line: def.line,
            });
        } else {
            first_def.insert(key, def.line);
        }
    }

    let used: HashSet<String> = doc.usages.iter().map(|u| label_key(&u.label)).collect();

    for u in &doc.usages {
        if !first_def.contains_key(&label_key(&u.label)) {
            diagnostics.push(Diagnostic {
                kind: "undefined_reference".to_string(),
                label: u.label.clone(),
                line: u.line,
            });
        }
    }

    let mut reported: HashSet<String> = HashSet::new();
    for def in &doc.definitions {
        let key = label_key(&def.label);
        if !used.contains(&key) && reported.insert(key) {
            diagnostics.push(Diagnostic {
                kind: "unused_definition".to_string(),
                label: def.label.clone(),
                line: def.line,
            });
        }
    }

    diagnostics.sort_by_key(|d| d.line);

    let overall = if diagnostics.is_empty() {
        "valid"
    } else {
        "invalid"
    };
    CheckReport {
        overall: overall.to_string(),
        items: doc.items.len(),
        definitions: doc.definitions.len(),
        usages: doc.usages.len(),
        diagnostics,
    }
}

/// Bullet items with their labels resolved against the reference table.
pub fn item_rows(doc: &Document) -> Vec<ItemRow> {
    let mut defs: HashMap<String, &LinkDef> = HashMap::new();
    for def in &doc.definitions {
        defs.entry(label_key(&def.label)).or_insert(def);
    }
    doc.items
        .iter()
        .map(|i| ItemRow {
            line: i.line,
            label: i.label.clone(),
            description: i.description.clone(),
            url: defs.get(&label_key(&i.label)).map(|d| d.url.clone()),
        })
        .collect()
}

/// The reference table with per-definition usage status.
pub fn ref_rows(doc: &Document) -> Vec<RefRow> {
    let used: HashSet<String> = doc.usages.iter().map(|u| label_key(&u.label)).collect();
    doc.definitions
        .iter()
        .map(|d| RefRow {
            line: d.line,
            label: d.label.clone(),
            url: d.url.clone(),
            used: used.contains(&label_key(&d.label)),
        })
        .collect()
}
