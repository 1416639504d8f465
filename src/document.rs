use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

/// Parsed view of one reference page.
///
/// The page is an ordered bullet list (each bullet naming a feature via a
/// reference label) followed by a trailing reference-link table. Parsing is
/// total: a malformed page yields fewer items or definitions, and `check`
/// reports on whatever was found.
#[derive(Debug, Clone)]
pub struct Document {
    pub text: String,
    pub items: Vec<BulletItem>,
    pub definitions: Vec<LinkDef>,
    pub usages: Vec<LabelUsage>,
}

/// A top-level bullet, including its indented continuation lines.
#[derive(Debug, Clone)]
pub struct BulletItem {
    /// First line of the bullet (1-based).
    pub line: usize,
    /// Last line of the bullet block (1-based, inclusive).
    pub end_line: usize,
    /// The first reference label in the bullet.
    pub label: String,
    /// Clause following the label, if any.
    pub description: Option<String>,
}

/// A `[label]: url` line from the reference table.
#[derive(Debug, Clone)]
pub struct LinkDef {
    pub line: usize,
    pub label: String,
    pub url: String,
}

/// One inline use of a reference label in the body.
#[derive(Debug, Clone)]
pub struct LabelUsage {
    pub line: usize,
    pub label: String,
}

#[derive(thiserror::Error, Debug)]
pub enum DocError {
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("item not found: {0}")]
    ItemNotFound(String),
    #[error("label already defined: {0}")]
    DuplicateLabel(String),
}

impl DocError {
    pub fn code(&self) -> &'static str {
        match self {
            DocError::NotFound(_) => "DOC_NOT_FOUND",
            DocError::ItemNotFound(_) => "ITEM_NOT_FOUND",
            DocError::DuplicateLabel(_) => "DUPLICATE_LABEL",
        }
    }
}

/// A link-definition line. Deliberately line-based rather than a full
/// markdown parse; fenced code blocks are masked out before this runs.
static DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^ {0,3}\[(?<label>[^\[\]]+)\]:\s*(?<dest>.*)$").unwrap()
});

/// A bracketed span that may be a reference usage: shortcut `[label]`,
/// collapsed `[label][]`, full `[text][label]`, or an inline link (which is
/// not a usage and is filtered by the `inline` group).
static USAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
          (?<bang> ! )?
          \[ (?<text> [^\[\]]+ ) \]
          (?:
              (?<inline> \( [^)]* \) )
            | \[ (?<second> [^\[\]]* ) \]
          )?
        ",
    )
    .unwrap()
});

/// Canonical form for label matching: trimmed, internal whitespace
/// collapsed, case-folded. Mirrors markdown reference-link semantics.
pub fn label_key(label: &str) -> String {
    label
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn load_document(path: &str) -> anyhow::Result<Document> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(DocError::NotFound(path.to_string()).into());
    }
    let text = std::fs::read_to_string(p)?;
    Ok(parse_document(&text))
}

pub fn parse_document(text: &str) -> Document {
    let masked = mask_fenced_blocks(text);

    let mut definitions = Vec::new();
    let mut body: Vec<String> = Vec::new();
    for (idx, line) in masked.lines().enumerate() {
        // Footnote definitions ([^1]: ...) are not link definitions, matching
        // the usage scanner's footnote exclusion.
        if let Some(cap) = DEF_RE.captures(line) {
            if !cap["label"].starts_with('^') {
                definitions.push(LinkDef {
                    line: idx + 1,
                    label: cap["label"].to_string(),
                    url: cap["dest"].trim().to_string(),
                });
                body.push(String::new());
                continue;
            }
        }
        body.push(line.to_string());
    }

    let mut usages = Vec::new();
    for (idx, line) in body.iter().enumerate() {
        for label in usage_labels(line) {
            usages.push(LabelUsage {
                line: idx + 1,
                label,
            });
        }
    }

    let items = collect_items(&body);

    Document {
        text: text.to_string(),
        items,
        definitions,
        usages,
    }
}

/// Blanks out fenced code blocks while preserving line numbering.
fn mask_fenced_blocks(text: &str) -> String {
    let mut in_fence = false;
    let mut out: Vec<&str> = Vec::new();
    for line in text.lines() {
        let t = line.trim_start();
        if t.starts_with("```") || t.starts_with("~~~") {
            in_fence = !in_fence;
            out.push("");
        } else if in_fence {
            out.push("");
        } else {
            out.push(line);
        }
    }
    out.join("\n")
}

/// Reference labels used on one line. Images and footnotes are not usages.
fn usage_labels(line: &str) -> Vec<String> {
    let mut labels = Vec::new();
    for cap in USAGE_RE.captures_iter(line) {
        if cap.name("bang").is_some() || cap.name("inline").is_some() {
            continue;
        }
        let text = &cap["text"];
        if text.starts_with('^') {
            continue;
        }
        let label = match cap.name("second") {
            Some(s) if !s.as_str().is_empty() => s.as_str(),
            _ => text,
        };
        labels.push(label.to_string());
    }
    labels
}

fn collect_items(lines: &[String]) -> Vec<BulletItem> {
    let mut items = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = &lines[i];
        if !(line.starts_with("- ") || line.starts_with("* ")) {
            i += 1;
            continue;
        }
        let start = i;
        let mut text = line[2..].trim().to_string();
        i += 1;
        while i < lines.len() {
            let l = &lines[i];
            let t = l.trim_start();
            if l.starts_with(' ') && !t.is_empty() && !t.starts_with("- ") && !t.starts_with("* ") {
                text.push(' ');
                text.push_str(t);
                i += 1;
            } else {
                break;
            }
        }
        if let Some((label, rest)) = first_label(&text) {
            items.push(BulletItem {
                line: start + 1,
                end_line: i,
                label,
                description: clean_description(&rest),
            });
        }
    }
    items
}

/// The first reference label in a bullet, plus the text after it.
fn first_label(text: &str) -> Option<(String, String)> {
    for cap in USAGE_RE.captures_iter(text) {
        if cap.name("bang").is_some() || cap.name("inline").is_some() {
            continue;
        }
        let t = &cap["text"];
        if t.starts_with('^') {
            continue;
        }
        let label = match cap.name("second") {
            Some(s) if !s.as_str().is_empty() => s.as_str(),
            _ => t,
        };
        let m = cap.get(0).expect("whole match");
        return Some((label.to_string(), text[m.end()..].to_string()));
    }
    None
}

fn clean_description(rest: &str) -> Option<String> {
    let cleaned = rest
        .trim_start()
        .trim_start_matches(&['-', ':', ','][..])
        .trim();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}
