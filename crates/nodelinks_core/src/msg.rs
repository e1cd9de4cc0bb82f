#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Resolved href of the next anchor, in document order.
    AnchorFound(String),
    /// Document traversal finished; no further anchors follow.
    ScanFinished,
}
