use crate::domain::models::JsonOut;
use serde::Serialize;

/// One payload, rendered as the `JsonOut` envelope or a single text line.
pub fn emit<T: Serialize>(
    json: bool,
    data: T,
    text: impl FnOnce(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data: &data })?
        );
    } else {
        println!("{}", text(&data));
    }
    Ok(())
}

/// A row set, rendered as one envelope or one text line per row.
pub fn emit_rows<T: Serialize>(
    json: bool,
    rows: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: rows
            })?
        );
    } else {
        for r in rows {
            println!("{}", row(r));
        }
    }
    Ok(())
}

/// Failure envelope with a stable machine code, mirroring `JsonOut`.
pub fn print_error(json: bool, code: &str, message: &str) {
    if json {
        println!(
            "{}",
            serde_json::json!({"ok": false, "error": {"code": code, "message": message}})
        );
    } else {
        eprintln!("error: {}", message);
    }
}
