use engine_logging::{engine_debug, engine_error};
use nodelinks_core::{summary_line, Effect};
use nodelinks_engine::{OutputSink, SinkError};

/// Executes core effects against the run's sinks, in the order given.
pub(crate) struct EffectRunner {
    console: Box<dyn OutputSink>,
    clipboard: Option<Box<dyn OutputSink>>,
    list_file: Option<Box<dyn OutputSink>>,
}

impl EffectRunner {
    pub fn new(console: Box<dyn OutputSink>) -> Self {
        Self {
            console,
            clipboard: None,
            list_file: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn OutputSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_list_file(mut self, list_file: Box<dyn OutputSink>) -> Self {
        self.list_file = Some(list_file);
        self
    }

    /// Stops at the first failing effect; later effects are not run.
    pub fn run(&mut self, effects: Vec<Effect>) -> Result<(), SinkError> {
        for effect in effects {
            self.apply(effect)?;
        }
        Ok(())
    }

    fn apply(&mut self, effect: Effect) -> Result<(), SinkError> {
        match effect {
            Effect::EmitList { text } => {
                deliver(self.console.as_mut(), &text)?;
                if let Some(list_file) = self.list_file.as_mut() {
                    deliver(list_file.as_mut(), &text)?;
                }
            }
            Effect::CopyToClipboard { text } => match self.clipboard.as_mut() {
                Some(clipboard) => deliver(clipboard.as_mut(), &text)?,
                None => engine_debug!("Clipboard effect without a clipboard sink; skipped"),
            },
            Effect::ReportCount { count, copied } => {
                deliver(self.console.as_mut(), &summary_line(count, copied))?;
            }
        }
        Ok(())
    }
}

fn deliver(sink: &mut dyn OutputSink, text: &str) -> Result<(), SinkError> {
    engine_debug!("Delivering {} bytes to {}", text.len(), sink.name());
    sink.deliver(text).inspect_err(|err| {
        engine_error!("Delivery to {} failed: {}", sink.name(), err);
    })
}
