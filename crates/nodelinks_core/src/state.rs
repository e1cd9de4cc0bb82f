use crate::collection::LinkCollection;
use crate::href::{normalize_href, qualifies};
use crate::view_model::ScanSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanPhase {
    #[default]
    Scanning,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanState {
    links: LinkCollection,
    phase: ScanPhase,
    copy_to_clipboard: bool,
    anchors_seen: usize,
    qualifying: usize,
    duplicates: usize,
    rejected: usize,
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanState {
    pub fn new() -> Self {
        Self {
            links: LinkCollection::new(),
            phase: ScanPhase::Scanning,
            copy_to_clipboard: true,
            anchors_seen: 0,
            qualifying: 0,
            duplicates: 0,
            rejected: 0,
        }
    }

    /// A scan whose result is only printed, never copied.
    pub fn without_clipboard() -> Self {
        Self {
            copy_to_clipboard: false,
            ..Self::new()
        }
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    pub fn links(&self) -> &LinkCollection {
        &self.links
    }

    pub fn copies_to_clipboard(&self) -> bool {
        self.copy_to_clipboard
    }

    pub fn view(&self) -> ScanSummary {
        ScanSummary {
            phase: self.phase,
            anchors_seen: self.anchors_seen,
            qualifying: self.qualifying,
            duplicates: self.duplicates,
            rejected: self.rejected,
            unique: self.links.len(),
        }
    }

    pub(crate) fn record_anchor(&mut self, href: &str) {
        self.anchors_seen += 1;
        if !qualifies(href) {
            return;
        }
        self.qualifying += 1;
        // Qualified on the raw href but lost the pattern after unwrap/strip.
        let Some(url) = normalize_href(href) else {
            self.rejected += 1;
            return;
        };
        if !self.links.insert(url) {
            self.duplicates += 1;
        }
    }

    pub(crate) fn finish(&mut self) {
        self.phase = ScanPhase::Finished;
    }
}
