use anyhow::Result;
use clap::Args;
use colored::Colorize;

use blockpress_catalog::{builtin, TemplateCategory};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Only list one category (hero, content, social, commerce, media, cta, footer)
    #[arg(short, long)]
    pub category: Option<String>,
}

const ALL_CATEGORIES: [TemplateCategory; 7] = [
    TemplateCategory::Hero,
    TemplateCategory::Content,
    TemplateCategory::Social,
    TemplateCategory::Commerce,
    TemplateCategory::Media,
    TemplateCategory::Cta,
    TemplateCategory::Footer,
];

pub fn templates(args: TemplatesArgs) -> Result<()> {
    let catalog = builtin();

    let categories: Vec<TemplateCategory> = match args.category.as_deref() {
        Some(name) => vec![parse_category(name)?],
        None => ALL_CATEGORIES.to_vec(),
    };

    for category in categories {
        let entries: Vec<_> = catalog.list_by_category(category).collect();
        if entries.is_empty() {
            continue;
        }

        println!("{}", format!("{:?}", category).bold());
        for template in entries {
            println!("  {}  {}", template.id.cyan(), template.name.dimmed());
        }
        println!();
    }

    Ok(())
}

fn parse_category(name: &str) -> Result<TemplateCategory> {
    match name {
        "hero" => Ok(TemplateCategory::Hero),
        "content" => Ok(TemplateCategory::Content),
        "social" => Ok(TemplateCategory::Social),
        "commerce" => Ok(TemplateCategory::Commerce),
        "media" => Ok(TemplateCategory::Media),
        "cta" => Ok(TemplateCategory::Cta),
        "footer" => Ok(TemplateCategory::Footer),
        other => anyhow::bail!("Unknown category: {}", other),
    }
}
