use crate::*;
use std::path::Path;

pub fn handle_runtime_commands(cli: &Cli) -> anyhow::Result<bool> {
    let base = Path::new(&cli.dir);

    match &cli.command {
        Commands::New { name } => {
            let report = scaffold_project(base, name)?;
            audit(
                "new",
                serde_json::json!({
                    "project": report.project,
                    "files": report.written_files.len()
                }),
            );
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: &report
                    })?
                );
            } else {
                for d in &report.created_dirs {
                    println!("created {}/", d);
                }
                for f in &report.written_files {
                    println!("wrote {}", f);
                }
                println!();
                println!("next steps:");
                println!("  cd {}", report.project);
                println!("  npm install");
                println!("  npx playwright test");
            }
        }
        Commands::Plan { name } => {
            let entries = plan_project(name);
            print_out(cli.json, &entries, |e| format!("{}\t{}", e.kind, e.path))?;
        }
        Commands::Check { name } => {
            let report = check_project(base, name)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: report.overall == "ok",
                        data: &report
                    })?
                );
            } else {
                println!("check: {}", report.overall);
                for i in &report.items {
                    println!("{}\t{}", i.path, i.status);
                }
            }
            if report.overall != "ok" {
                std::process::exit(1);
            }
        }
        _ => return Ok(false),
    }

    Ok(true)
}
