//! Nodelinks core: pure href rules, the ordered link set and the scan state machine.
mod collection;
mod effect;
mod href;
mod msg;
mod state;
mod update;
mod view_model;

pub use collection::LinkCollection;
pub use effect::Effect;
pub use href::{
    normalize_href, qualifies, strip_fragment, unwrap_redirect, NODE_PATTERN, REDIRECT_MARKER,
};
pub use msg::Msg;
pub use state::{ScanPhase, ScanState};
pub use update::update;
pub use view_model::{summary_line, ScanSummary};
