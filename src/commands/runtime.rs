use crate::*;

pub fn handle_runtime_commands(cli: &Cli, doc: &Document) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check => {
            let report = check_document(doc);
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.overall == "valid",
                        data: &report
                    })?
                );
            } else {
                for d in &report.diagnostics {
                    println!("{}\t[{}]\tline {}", d.kind, d.label, d.line);
                }
                println!(
                    "check: {} ({} items, {} definitions, {} usages)",
                    report.overall, report.items, report.definitions, report.usages
                );
            }
            if report.overall != "valid" {
                std::process::exit(1);
            }
        }
        Commands::List => {
            let rows = item_rows(doc);
            emit_rows(cli.json, &rows, |r| {
                format!(
                    "{}\t[{}]\t{}",
                    r.line,
                    r.label,
                    r.url.as_deref().unwrap_or("unresolved")
                )
            })?;
        }
        Commands::Refs { unused } => {
            let mut rows = ref_rows(doc);
            if *unused {
                rows.retain(|r| !r.used);
            }
            emit_rows(cli.json, &rows, |r| {
                format!(
                    "{}\t[{}]\t{}\t{}",
                    r.line,
                    r.label,
                    r.url,
                    if r.used { "used" } else { "unused" }
                )
            })?;
        }
        Commands::Show { label } => {
            let key = label_key(label);
            let row = item_rows(doc)
                .into_iter()
                .find(|r| label_key(&r.label) == key)
                .ok_or_else(|| DocError::ItemNotFound(label.clone()))?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &row
                    })?
                );
            } else {
                println!("label: {}", row.label);
                println!("line: {}", row.line);
                println!("url: {}", row.url.as_deref().unwrap_or("unresolved"));
                if let Some(d) = &row.description {
                    println!("description: {}", d);
                }
            }
        }
        Commands::Add { .. } | Commands::Remove { .. } => {
            unreachable!("handled by the edit handler")
        }
    }

    Ok(())
}
