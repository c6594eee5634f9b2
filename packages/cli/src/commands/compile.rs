use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use walkdir::WalkDir;

use blockpress_compiler_css::{compile_to_css, Viewport};
use blockpress_model::Document;
use blockpress_store::PersistedPage;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Page file or directory to compile (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Device preview mode (desktop, tablet, mobile)
    #[arg(short, long, default_value = "desktop")]
    pub viewport: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (defaults to next to each page file)
    #[arg(short, long)]
    pub out_dir: Option<String>,
}

pub fn compile(args: CompileArgs) -> Result<()> {
    let viewport = Viewport::parse(&args.viewport)
        .ok_or_else(|| anyhow!("Invalid viewport: {}. Use: mobile, tablet, or desktop", args.viewport))?;

    let page_files = find_page_files(Path::new(&args.path))?;
    if page_files.is_empty() {
        println!("{}", "⚠️  No .page.json files found".yellow());
        return Ok(());
    }

    println!("{}", "🔨 Compiling pages...".bright_blue().bold());

    let mut success_count = 0;
    let mut error_count = 0;

    for page_file in &page_files {
        match compile_file(page_file, viewport, &args) {
            Ok(output) => {
                success_count += 1;
                println!("  {} {} → {}", "✓".green(), page_file.display(), output);
            }
            Err(err) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    page_file.display(),
                    err.to_string().red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} pages successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        println!(
            "{} Compiled {} pages, {} errors",
            "⚠️".yellow(),
            success_count,
            error_count
        );
        Err(anyhow!("{} pages failed to compile", error_count))
    }
}

fn compile_file(path: &Path, viewport: Viewport, args: &CompileArgs) -> Result<String> {
    let source = fs::read_to_string(path)?;
    let page: PersistedPage = serde_json::from_str(&source)?;
    let document = Document::from_sections(page.sections);

    let mut css = compile_to_css(&document, viewport);
    // A page's custom CSS rides along verbatim after the derived rules
    if let Some(custom) = &page.metadata.custom_css {
        css.push_str(custom);
        css.push('\n');
    }

    if args.stdout {
        println!("{}", css);
        return Ok("stdout".to_string());
    }

    let out_path = output_path(path, args.out_dir.as_deref())?;
    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&out_path, css)?;
    Ok(out_path.display().to_string())
}

fn output_path(page_file: &Path, out_dir: Option<&str>) -> Result<PathBuf> {
    let file_name = page_file
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow!("unreadable file name: {}", page_file.display()))?;
    let css_name = file_name.replace(".page.json", ".css");

    Ok(match out_dir {
        Some(dir) => Path::new(dir).join(css_name),
        None => page_file.with_file_name(css_name),
    })
}

fn find_page_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let entry_path = entry.path();
        if entry_path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.ends_with(".page.json"))
        {
            files.push(entry_path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}
