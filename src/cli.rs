use clap::{Parser, Subcommand};

pub const DEFAULT_DOC_PATH: &str = "docs/undocumented.md";

#[derive(Parser, Debug)]
#[command(name = "refdoc", version, about = "Reference-page link maintainer")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_DOC_PATH,
        help = "Path to the reference page to operate on"
    )]
    pub doc: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Cross-reference body labels against the reference-link table
    Check,
    /// List the bullet items with resolved URLs
    List,
    /// List the reference-link table entries
    Refs {
        #[arg(long, default_value_t = false, help = "Only entries no bullet references")]
        unused: bool,
    },
    /// Show one item in detail
    Show { label: String },
    /// Add a bullet and its table entry together
    Add {
        label: String,
        #[arg(long)]
        url: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove a bullet and, when nothing else uses it, its table entry
    Remove { label: String },
}
