use clap::Parser;

mod cli;
mod commands;
mod document;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use document::*;
pub use domain::models::*;
pub use services::check::*;
pub use services::editing::*;
pub use services::output::*;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        let code = e
            .downcast_ref::<DocError>()
            .map(DocError::code)
            .unwrap_or("ERROR");
        print_error(cli.json, code, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let doc = load_document(&cli.doc)?;
    if handle_edit_commands(cli, &doc)? {
        return Ok(());
    }
    handle_runtime_commands(cli, &doc)
}
