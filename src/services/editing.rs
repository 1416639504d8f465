use crate::document::{label_key, parse_document, DocError};
use crate::domain::models::{AddReport, RemoveReport};
use std::collections::HashSet;

/// Removes every bullet whose primary label matches, then the label's
/// definition if nothing else still references it. The bullet and its
/// table entry go together so the page never ends up with a dangling or
/// freshly-unused definition.
pub fn remove_item(text: &str, label: &str) -> anyhow::Result<(String, RemoveReport)> {
    let key = label_key(label);
    let doc = parse_document(text);

    let spans: Vec<(usize, usize)> = doc
        .items
        .iter()
        .filter(|i| label_key(&i.label) == key)
        .map(|i| (i.line, i.end_line))
        .collect();
    if spans.is_empty() {
        return Err(DocError::ItemNotFound(label.to_string()).into());
    }
    let items_removed = spans.len();

    let mut out = drop_lines(text, |n| {
        spans.iter().any(|(s, e)| n >= *s && n <= *e)
    });

    // Only drop the definition once no surviving bullet references it.
    let reparsed = parse_document(&out);
    let still_used = reparsed.usages.iter().any(|u| label_key(&u.label) == key);
    let mut definitions_removed = 0;
    if !still_used {
        let def_lines: HashSet<usize> = reparsed
            .definitions
            .iter()
            .filter(|d| label_key(&d.label) == key)
            .map(|d| d.line)
            .collect();
        definitions_removed = def_lines.len();
        if definitions_removed > 0 {
            out = drop_lines(&out, |n| def_lines.contains(&n));
        }
    }

    Ok((
        out,
        RemoveReport {
            label: label.to_string(),
            items_removed,
            definitions_removed,
        },
    ))
}

/// Appends a bullet after the existing list and a definition at the end of
/// the reference table, as one operation.
pub fn add_item(
    text: &str,
    label: &str,
    url: &str,
    description: Option<&str>,
) -> anyhow::Result<(String, AddReport)> {
    let key = label_key(label);
    let doc = parse_document(text);

    if doc
        .definitions
        .iter()
        .any(|d| label_key(&d.label) == key)
    {
        return Err(DocError::DuplicateLabel(label.to_string()).into());
    }

    let mut bullet = format!("- [{}]", label);
    if let Some(d) = description {
        let d = d.trim();
        if !d.is_empty() {
            bullet.push_str(" - ");
            bullet.push_str(d);
        }
    }
    let def = format!("[{}]: {}", label, url);

    let mut lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();

    // 0-based insertion positions; the bullet goes after the last bullet
    // block (or just before the table when the list is empty), the
    // definition after the last table entry.
    let bullet_at = doc
        .items
        .last()
        .map(|i| i.end_line)
        .unwrap_or_else(|| {
            doc.definitions
                .first()
                .map(|d| d.line.saturating_sub(1))
                .unwrap_or(lines.len())
        });
    let def_at = doc.definitions.last().map(|d| d.line).unwrap_or(lines.len());

    // Insert at the higher index first so the other position stays valid,
    // whichever order the list and the table appear in.
    if def_at >= bullet_at {
        if doc.definitions.is_empty() {
            lines.insert(def_at, String::new());
            lines.insert(def_at + 1, def);
        } else {
            lines.insert(def_at, def);
        }
        lines.insert(bullet_at, bullet);
    } else {
        lines.insert(bullet_at, bullet);
        lines.insert(def_at, def);
    }

    let mut out = lines.join("\n");
    out.push('\n');

    let reparsed = parse_document(&out);
    let item_line = reparsed
        .items
        .iter()
        .find(|i| label_key(&i.label) == key)
        .map(|i| i.line)
        .unwrap_or(0);
    let definition_line = reparsed
        .definitions
        .iter()
        .find(|d| label_key(&d.label) == key)
        .map(|d| d.line)
        .unwrap_or(0);

    Ok((
        out,
        AddReport {
            label: label.to_string(),
            url: url.to_string(),
            item_line,
            definition_line,
        },
    ))
}

fn drop_lines(text: &str, dropped: impl Fn(usize) -> bool) -> String {
    let kept: Vec<&str> = text
        .lines()
        .enumerate()
        .filter(|(i, _)| !dropped(i + 1))
        .map(|(_, l)| l)
        .collect();
    let mut out = kept.join("\n");
    if text.ends_with('\n') {
        out.push('\n');
    }
    out
}
