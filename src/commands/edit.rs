use crate::*;

pub fn handle_edit_commands(cli: &Cli, doc: &Document) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Add {
            label,
            url,
            description,
        } => {
            let (text, report) = add_item(&doc.text, label, url, description.as_deref())?;
            std::fs::write(&cli.doc, text)?;
            emit(cli.json, report, |r| {
                format!("added [{}] at line {}", r.label, r.item_line)
            })?;
        }
        Commands::Remove { label } => {
            let (text, report) = remove_item(&doc.text, label)?;
            std::fs::write(&cli.doc, text)?;
            emit(cli.json, report, |r| {
                format!(
                    "removed [{}] ({} items, {} definitions)",
                    r.label, r.items_removed, r.definitions_removed
                )
            })?;
        }
        _ => return Ok(false),
    }

    Ok(true)
}
