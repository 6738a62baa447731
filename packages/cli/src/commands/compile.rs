use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use codeframe_compiler_html::{compile_page, CompileOptions};
use codeframe_parser::parse_with_path;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// File or directory to compile (defaults to the configured source dir)
    pub path: Option<PathBuf>,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let input = args
        .path
        .clone()
        .unwrap_or_else(|| config.get_src_dir(cwd));
    if !input.exists() {
        return Err(anyhow!("Input path does not exist: {:?}", input));
    }

    println!("{}", "Compiling codeframe pages...".bright_blue().bold());

    let cf_files = if input.is_file() {
        vec![input.clone()]
    } else {
        find_cf_files(&input)?
    };

    if cf_files.is_empty() {
        println!("{}", "No .cf files found".yellow());
        return Ok(());
    }

    println!("Found {} files", cf_files.len());

    let src_root = if input.is_file() {
        input.parent().map(Path::to_path_buf).unwrap_or_default()
    } else {
        input.clone()
    };

    let mut success_count = 0;
    let mut error_count = 0;

    for cf_file in &cf_files {
        match compile_file(cf_file, &args, &config, &src_root, cwd) {
            Ok(output_path) => {
                success_count += 1;
                let relative_path = cf_file.strip_prefix(&src_root).unwrap_or(cf_file);
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path
                );
            }
            Err(e) => {
                error_count += 1;
                let relative_path = cf_file.strip_prefix(&src_root).unwrap_or(cf_file);
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    e.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "OK".green(),
            success_count
        );
        Ok(())
    } else {
        Err(anyhow!(
            "compiled {} files, {} failed",
            success_count,
            error_count
        ))
    }
}

fn find_cf_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("cf") {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    Ok(files)
}

fn compile_file(
    file_path: &Path,
    args: &CompileArgs,
    config: &Config,
    src_root: &Path,
    cwd: &str,
) -> Result<String> {
    let source = fs::read_to_string(file_path)?;

    let document = parse_with_path(&source, &file_path.to_string_lossy()).map_err(|e| {
        use codeframe_parser::error::pretty;
        let file_name = file_path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown");
        anyhow!("\n{}", pretty::format_error(&e, file_name, &source))
    })?;

    let title = file_path
        .file_stem()
        .and_then(|s| s.to_str())
        .map(String::from);
    let options = CompileOptions {
        standalone: config.standalone,
        title,
        stylesheet: config.stylesheet.clone(),
        open_listing: config.open_listing,
        ..Default::default()
    };
    let output = compile_page(&document, options);
    debug!(file = %file_path.display(), bytes = output.len(), "compiled page");

    if args.stdout {
        println!("{}", output);
        return Ok("stdout".to_string());
    }

    let relative_path = file_path.strip_prefix(src_root).unwrap_or(file_path);
    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(cwd).join(out),
        None => config.get_out_dir(cwd),
    };
    let output_file = out_dir.join(relative_path).with_extension("html");

    if let Some(parent) = output_file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_file, output)?;

    Ok(output_file.display().to_string())
}
