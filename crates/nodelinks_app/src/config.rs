use std::path::PathBuf;
use std::time::Duration;

use log::LevelFilter;
use nodelinks_engine::DocumentSource;
use url::Url;

use crate::cli::Args;
use crate::logging::{LogDestination, LogSettings};

/// Everything one run needs, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RunConfig {
    pub source: DocumentSource,
    pub base_url: Option<Url>,
    pub charset: Option<String>,
    pub list_file: Option<PathBuf>,
    pub copy_to_clipboard: bool,
    pub clipboard_hold: Option<Duration>,
    pub log: LogSettings,
}

impl RunConfig {
    pub fn from_args(args: Args) -> Self {
        let destination = match args.log_file {
            Some(path) => LogDestination::Both(path),
            None => LogDestination::Terminal,
        };
        Self {
            source: DocumentSource::from_arg(args.input),
            base_url: args.base_url,
            charset: args.charset,
            list_file: args.output,
            copy_to_clipboard: !args.no_clipboard,
            clipboard_hold: (args.clipboard_hold > 0)
                .then(|| Duration::from_secs(args.clipboard_hold)),
            log: LogSettings {
                level: level_for(args.verbose),
                destination,
            },
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
