use clap::Parser;
use simple_index::{LinkSource, Pages, ParsedPage, Result};
use std::io::Read;
use std::process::ExitCode;

mod args;
use args::Args;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Failed to process {}: {}", args.url, e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let content = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut content = String::new();
            std::io::stdin().read_to_string(&mut content)?;
            content
        }
    };
    ::log::info!("Read {} bytes for {}", content.len(), args.url);

    let mut pages = Pages::new(args.kind.into(), args.url.as_str());
    if let Some(config) = &args.config {
        pages = pages.with_config_file(config)?;
    }

    match pages.parse(&content)? {
        ParsedPage::Index(page) => match &args.package {
            Some(name) => println!("{}", page.serves_package(name)),
            None => {
                for name in page.links() {
                    println!("{}", serde_json::to_string(&name)?);
                }
            }
        },
        ParsedPage::Repository(page) => print_links(&page, args.package.as_deref())?,
        ParsedPage::Html(page) => print_links(&page, args.package.as_deref())?,
    }

    Ok(())
}

fn print_links(page: &impl LinkSource, package: Option<&str>) -> Result<()> {
    if let Some(name) = package {
        for version in page.versions(name)? {
            println!("{}", serde_json::to_string(&version.to_string())?);
        }
        return Ok(());
    }

    let mut count = 0;
    for link in page.links() {
        println!("{}", serde_json::to_string(&link?)?);
        count += 1;
    }
    ::log::debug!("Page {} has {} links", page.url(), count);

    Ok(())
}
