#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write the newline-joined list to the console (and any list file).
    EmitList { text: String },
    /// Place the same text on the system clipboard.
    CopyToClipboard { text: String },
    /// Print the closing count line.
    ReportCount { count: usize, copied: bool },
}
