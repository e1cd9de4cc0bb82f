use crate::state::ScanPhase;

/// Counters describing a scan, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanSummary {
    pub phase: ScanPhase,
    pub anchors_seen: usize,
    pub qualifying: usize,
    pub duplicates: usize,
    pub rejected: usize,
    pub unique: usize,
}

/// The closing console line.
pub fn summary_line(count: usize, copied: bool) -> String {
    if copied {
        format!("Found {count} unique URLs - copied to clipboard!")
    } else {
        format!("Found {count} unique URLs")
    }
}
