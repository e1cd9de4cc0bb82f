//! Nodelinks engine: document loading, anchor traversal and output sinks.
mod anchors;
mod decode;
mod document;
mod persist;
mod sink;

pub use anchors::AnchorScanner;
pub use decode::{decode_document, DecodeError, DecodedDocument};
pub use document::{
    load_document, load_document_from_reader, DocumentError, DocumentSource, LoadedDocument,
};
pub use persist::{ensure_output_dir, write_atomic, PersistError};
pub use sink::{ClipboardSink, ConsoleSink, ListFileSink, OutputSink, SinkError};
