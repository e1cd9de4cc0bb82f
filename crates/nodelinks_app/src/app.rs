use anyhow::{Context, Result};
use engine_logging::{engine_info, engine_trace};
use nodelinks_core::{update, Msg, ScanState, ScanSummary};
use nodelinks_engine::{
    load_document, AnchorScanner, ClipboardSink, ConsoleSink, ListFileSink, LoadedDocument,
};

use crate::config::RunConfig;
use crate::effects::EffectRunner;

/// One full invocation: load, scan, deliver.
pub(crate) fn run(config: &RunConfig) -> Result<ScanSummary> {
    let document = load_document(&config.source, config.charset.as_deref())
        .with_context(|| format!("could not load {}", config.source.label()))?;
    engine_info!(
        "Loaded {} ({} bytes, {})",
        config.source.label(),
        document.byte_len,
        document.encoding_label
    );

    let mut runner = EffectRunner::new(Box::new(ConsoleSink::stdout()));
    if config.copy_to_clipboard {
        let mut clipboard = ClipboardSink::new();
        if let Some(hold) = config.clipboard_hold {
            clipboard = clipboard.with_hold(hold);
        }
        runner = runner.with_clipboard(Box::new(clipboard));
    }
    if let Some(path) = &config.list_file {
        runner = runner.with_list_file(Box::new(ListFileSink::new(path)));
    }

    extract(config, &document, &mut runner)
}

/// Feed every anchor through the core state machine and execute the
/// resulting effects.
pub(crate) fn extract(
    config: &RunConfig,
    document: &LoadedDocument,
    runner: &mut EffectRunner,
) -> Result<ScanSummary> {
    let document_url = config
        .base_url
        .clone()
        .or_else(|| document.document_url.clone());
    let scanner = AnchorScanner::with_document_url(document_url);

    let mut state = if config.copy_to_clipboard {
        ScanState::new()
    } else {
        ScanState::without_clipboard()
    };

    for href in scanner.scan(&document.html) {
        engine_trace!("anchor {}", href);
        let (next, effects) = update(state, Msg::AnchorFound(href));
        state = next;
        runner.run(effects)?;
    }

    let (state, effects) = update(state, Msg::ScanFinished);
    runner.run(effects).context("could not deliver the URL list")?;

    let summary = state.view();
    engine_info!(
        "Scanned {} anchors: {} qualifying, {} duplicates, {} rejected, {} unique",
        summary.anchors_seen,
        summary.qualifying,
        summary.duplicates,
        summary.rejected,
        summary.unique
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;

    use log::LevelFilter;
    use nodelinks_engine::{load_document_from_reader, DocumentSource, OutputSink, SinkError};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;
    use url::Url;

    use super::*;
    use crate::logging::{LogDestination, LogSettings};

    const SEARCH_PAGE: &str = r#"
    <html><head><title>site:commonsense.org/node - Google Search</title></head>
    <body>
      <a href="/search?q=next">Next</a>
      <a href="/url?q=https://www.commonsense.org/node/1234&amp;sa=U&amp;ved=2ah">Review one</a>
      <a href="https://www.commonsense.org/node/5678#reviews">Review two</a>
      <a href="https://example.com/other">Elsewhere</a>
      <a href="/url?q=https://www.commonsense.org/node/1234&amp;sa=U&amp;ved=9zz">Review one again</a>
      <a href="https://www.commonsense.org/node/999">Three</a>
      <a href="https://www.commonsense.org/node/999">Three again</a>
    </body></html>
    "#;

    #[derive(Clone, Default)]
    struct RecordingSink {
        deliveries: Rc<RefCell<Vec<String>>>,
    }

    impl OutputSink for RecordingSink {
        fn deliver(&mut self, text: &str) -> Result<(), SinkError> {
            self.deliveries.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct UnavailableClipboard;

    impl OutputSink for UnavailableClipboard {
        fn deliver(&mut self, _text: &str) -> Result<(), SinkError> {
            Err(SinkError::Clipboard("no display".to_string()))
        }

        fn name(&self) -> &str {
            "clipboard"
        }
    }

    fn test_config(copy_to_clipboard: bool) -> RunConfig {
        RunConfig {
            source: DocumentSource::Stdin,
            base_url: Some(Url::parse("https://www.google.com/search?q=site").unwrap()),
            charset: None,
            list_file: None,
            copy_to_clipboard,
            clipboard_hold: None,
            log: LogSettings {
                level: LevelFilter::Warn,
                destination: LogDestination::Terminal,
            },
        }
    }

    fn document(html: &str) -> LoadedDocument {
        load_document_from_reader(html.as_bytes(), Some("utf-8")).unwrap()
    }

    #[test]
    fn search_page_yields_unique_clean_urls_on_every_sink() {
        engine_logging::initialize_for_tests();
        let console = RecordingSink::default();
        let clipboard = RecordingSink::default();
        let mut runner = EffectRunner::new(Box::new(console.clone()))
            .with_clipboard(Box::new(clipboard.clone()));

        let summary = extract(&test_config(true), &document(SEARCH_PAGE), &mut runner).unwrap();

        let list = "https://www.commonsense.org/node/1234\n\
                    https://www.commonsense.org/node/5678\n\
                    https://www.commonsense.org/node/999";
        assert_eq!(
            *console.deliveries.borrow(),
            vec![
                list.to_string(),
                "Found 3 unique URLs - copied to clipboard!".to_string(),
            ]
        );
        assert_eq!(*clipboard.deliveries.borrow(), vec![list.to_string()]);
        assert_eq!(summary.anchors_seen, 7);
        assert_eq!(summary.qualifying, 5);
        assert_eq!(summary.duplicates, 2);
        assert_eq!(summary.unique, 3);
    }

    #[test]
    fn page_without_qualifying_links_reports_zero() {
        engine_logging::initialize_for_tests();
        let console = RecordingSink::default();
        let clipboard = RecordingSink::default();
        let mut runner = EffectRunner::new(Box::new(console.clone()))
            .with_clipboard(Box::new(clipboard.clone()));

        let html = r#"<a href="https://example.com/other">x</a>"#;
        let summary = extract(&test_config(true), &document(html), &mut runner).unwrap();

        assert_eq!(summary.unique, 0);
        assert_eq!(
            *console.deliveries.borrow(),
            vec![
                String::new(),
                "Found 0 unique URLs - copied to clipboard!".to_string(),
            ]
        );
        assert_eq!(*clipboard.deliveries.borrow(), vec![String::new()]);
    }

    #[test]
    fn clipboard_failure_aborts_before_the_count_line() {
        engine_logging::initialize_for_tests();
        let console = RecordingSink::default();
        let mut runner = EffectRunner::new(Box::new(console.clone()))
            .with_clipboard(Box::new(UnavailableClipboard));

        let result = extract(&test_config(true), &document(SEARCH_PAGE), &mut runner);

        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("clipboard unavailable"));
        assert_eq!(console.deliveries.borrow().len(), 1);
    }

    #[test]
    fn disabled_clipboard_changes_only_the_count_line() {
        engine_logging::initialize_for_tests();
        let console = RecordingSink::default();
        let mut runner = EffectRunner::new(Box::new(console.clone()));

        extract(&test_config(false), &document(SEARCH_PAGE), &mut runner).unwrap();

        assert_eq!(
            console.deliveries.borrow().last().map(String::as_str),
            Some("Found 3 unique URLs")
        );
    }

    #[test]
    fn file_run_writes_the_list_file() {
        engine_logging::initialize_for_tests();
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("results.html");
        fs::write(&input, SEARCH_PAGE).unwrap();
        let list_file = temp.path().join("out").join("kahoot_review_urls.txt");

        let config = RunConfig {
            source: DocumentSource::Path(input),
            list_file: Some(list_file.clone()),
            ..test_config(false)
        };
        let summary = run(&config).unwrap();

        assert_eq!(summary.unique, 3);
        assert_eq!(
            fs::read_to_string(&list_file).unwrap(),
            "https://www.commonsense.org/node/1234\n\
             https://www.commonsense.org/node/5678\n\
             https://www.commonsense.org/node/999\n"
        );
    }

    #[test]
    fn missing_input_is_reported_with_its_path() {
        let temp = TempDir::new().unwrap();
        let config = RunConfig {
            source: DocumentSource::Path(temp.path().join("absent.html")),
            ..test_config(false)
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("absent.html"));
    }
}
