use std::path::PathBuf;

use clap::{ArgAction, Parser};
use url::Url;

/// Collect unique commonsense.org review links from a saved search-results page.
#[derive(Parser, Debug)]
#[command(name = "nodelinks", version, about, long_about = None)]
pub(crate) struct Args {
    /// HTML document to scan; reads standard input when omitted or `-`
    pub input: Option<PathBuf>,

    /// Address the page was loaded from; relative hrefs resolve against it
    #[arg(short = 'u', long, value_parser = clap::value_parser!(Url))]
    pub base_url: Option<Url>,

    /// Character encoding of the document (e.g. utf-8, windows-1252)
    #[arg(long, value_name = "LABEL")]
    pub charset: Option<String>,

    /// Also write the URL list, one per line, to this file
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the list without touching the system clipboard
    #[arg(long)]
    pub no_clipboard: bool,

    /// On Linux, keep serving the copied list for up to this many seconds
    /// unless another application takes the clipboard first
    #[arg(long, value_name = "SECONDS", default_value_t = 0)]
    pub clipboard_hold: u64,

    /// More diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also write diagnostics to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
