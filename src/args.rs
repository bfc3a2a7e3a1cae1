use clap::{Parser, ValueEnum};
use simple_index::PageKind;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "simple-index")]
#[command(about = "Lists the links or projects of a saved PEP 503 repository page")]
#[command(version)]
pub struct Args {
    /// URL the page was fetched from (hrefs are resolved against it)
    pub url: String,

    /// Saved HTML page to read (defaults to stdin)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Kind of page
    #[arg(short, long, value_enum, default_value_t = PageKindArg::Repository)]
    pub kind: PageKindArg,

    /// Project to look up: served check on index pages, versions otherwise
    #[arg(short, long)]
    pub package: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PageKindArg {
    Repository,
    Index,
    Html,
}

impl From<PageKindArg> for PageKind {
    fn from(arg: PageKindArg) -> Self {
        match arg {
            PageKindArg::Repository => PageKind::Repository,
            PageKindArg::Index => PageKind::Index,
            PageKindArg::Html => PageKind::Html,
        }
    }
}
