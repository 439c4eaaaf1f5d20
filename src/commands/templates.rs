use crate::*;

pub fn handle_template_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Template { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        TemplateCommands::List => {
            let infos: Vec<TemplateInfo> = TEMPLATES
                .iter()
                .map(|t| TemplateInfo {
                    path: t.rel_path.to_string(),
                    bytes: t.contents.len(),
                })
                .collect();
            print_out(cli.json, &infos, |t| format!("{}\t{}", t.path, t.bytes))?;
        }
        TemplateCommands::Show { path } => {
            let t = find_template(path)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: serde_json::json!({
                            "path": t.rel_path,
                            "contents": t.contents
                        })
                    })?
                );
            } else {
                // Exact bytes, no trailing newline added: `show` output must
                // match what `new` writes to disk.
                print!("{}", t.contents);
            }
        }
    }

    Ok(true)
}
