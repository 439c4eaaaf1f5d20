use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;
mod templates;

pub use cli::{Cli, Commands, TemplateCommands, DEFAULT_PROJECT_NAME};
pub use domain::models::*;
pub use services::audit::audit;
pub use services::output::{print_error, print_out};
pub use services::scaffold::{plan_project, scaffold_project};
pub use services::verify::check_project;
pub use templates::{find_template, TemplateError, PROJECT_DIRS, TEMPLATES};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        print_error(cli.json, error_code(&err), &format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if commands::handle_runtime_commands(cli)? {
        return Ok(());
    }
    if commands::handle_template_commands(cli)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(TemplateError::NotFound(_)) = err.downcast_ref::<TemplateError>() {
        "TEMPLATE_NOT_FOUND"
    } else if err.downcast_ref::<std::io::Error>().is_some() {
        "IO_ERROR"
    } else {
        "INTERNAL"
    }
}
