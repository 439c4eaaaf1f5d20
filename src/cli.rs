use clap::{Parser, Subcommand};

/// Project name used when none is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "my-extension";

#[derive(Parser, Debug)]
#[command(name = "crxgen", version, about = "Browser-extension test project scaffolder")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Base directory the project tree is created under"
    )]
    pub dir: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project tree and write all template files
    New {
        #[arg(default_value = DEFAULT_PROJECT_NAME)]
        name: String,
    },
    /// List what `new` would create, without writing anything
    Plan {
        #[arg(default_value = DEFAULT_PROJECT_NAME)]
        name: String,
    },
    /// Verify an existing scaffold against the template catalog
    Check {
        #[arg(default_value = DEFAULT_PROJECT_NAME)]
        name: String,
    },
    Template {
        #[command(subcommand)]
        command: TemplateCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    List,
    Show { path: String },
}
