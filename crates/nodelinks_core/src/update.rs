use crate::{Effect, Msg, ScanPhase, ScanState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ScanState, msg: Msg) -> (ScanState, Vec<Effect>) {
    if state.phase() == ScanPhase::Finished {
        // The run has already reported; later input cannot change the result.
        return (state, Vec::new());
    }

    let effects = match msg {
        Msg::AnchorFound(href) => {
            state.record_anchor(&href);
            Vec::new()
        }
        Msg::ScanFinished => {
            state.finish();
            let text = state.links().joined();
            let count = state.links().len();
            let copied = state.copies_to_clipboard();

            let mut effects = Vec::with_capacity(3);
            effects.push(Effect::EmitList { text: text.clone() });
            if copied {
                effects.push(Effect::CopyToClipboard { text });
            }
            effects.push(Effect::ReportCount { count, copied });
            effects
        }
    };

    (state, effects)
}
