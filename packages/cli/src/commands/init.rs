use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Source directory
    #[arg(short, long, default_value = "content")]
    pub src_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

const EXAMPLE_PAGE: &str = r#"<h1>Hello, codeframe</h1>
<p>The widget below runs live in a sandboxed frame:</p>

{{ preview title="Red box" }}
{{ snippet lang="css" }}
.box { width: 80px; height: 80px; background: crimson; }
{{ /snippet }}
{{ snippet lang="html" }}
<div class="box"></div>
{{ /snippet }}
{{ /preview }}
"#;

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "!".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "Initializing Codeframe project...".bright_blue().bold());

    let src_dir = PathBuf::from(cwd).join(&args.src_dir);
    if !src_dir.exists() {
        fs::create_dir_all(&src_dir)?;
        println!("  {} Created {}/", "✓".green(), args.src_dir);
    }

    let example_file = src_dir.join("example.cf");
    if !example_file.exists() {
        fs::write(&example_file, EXAMPLE_PAGE)?;
        println!("  {} Created example.cf", "✓".green());
    }

    let config = Config {
        src_dir: args.src_dir.clone(),
        ..Default::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit {}/example.cf", args.src_dir);
    println!("  2. Run: codeframe compile");
    println!("  3. Open the output in public/");

    Ok(())
}
