use anyhow::Result;
use clap::Args;
use colored::Colorize;

use blockpress_catalog::builtin;
use blockpress_editor::ops;
use blockpress_model::{IdGenerator, PageMetadata};
use blockpress_store::{DocumentStore, FileStore, PersistedPage};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Directory to create the page in (defaults to current directory)
    #[arg(default_value = ".")]
    pub dir: String,

    /// Page slug (also the output file name)
    #[arg(short, long, default_value = "home")]
    pub slug: String,
}

pub fn init(args: InitArgs) -> Result<()> {
    let catalog = builtin();
    let mut ids = IdGenerator::new(&args.slug);
    let document = ops::load_template_page(&catalog, &mut ids);

    let mut metadata = PageMetadata::with_slug(&args.slug);
    metadata.title = Some(titlecase(&args.slug));
    metadata.status = Some("draft".to_string());
    metadata.theme = Some("default".to_string());

    let page = PersistedPage::new(document.into_sections(), metadata);
    let mut store = FileStore::new(&args.dir);
    let receipt = store.save(Some(&args.slug), &page)?;

    println!(
        "{} Created {}/{}.page.json ({} sections)",
        "✓".green(),
        args.dir,
        receipt.id,
        page.sections.len()
    );
    Ok(())
}

fn titlecase(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
