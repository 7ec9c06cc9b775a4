//! Vector rendering of Swiss QR-bill payment slips.
//!
//! The renderer composes a 210mm x 105mm SVG document (Receipt + Payment Part)
//! from a [`qrbill_payload::BillPayload`]. The QR matrix itself comes from an
//! external [`QrSymbolProducer`]; this crate never depends on a concrete QR
//! library.

pub mod cross;
pub mod document;
pub mod layout;
pub mod renderer;
pub mod svg;
pub mod symbol;

pub use document::RenderedDocument;
pub use renderer::LayoutRenderer;
pub use symbol::{QrSymbol, QrSymbolProducer};
