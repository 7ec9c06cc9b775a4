//! Capability interface to an external QR matrix generator.

use qrbill_core::{QrBillError, QrBillResult};

use crate::layout::QR_SIZE;

/// A QR symbol as vector path data in the producer's native units.
///
/// `native_units` is the edge length of the square the path is drawn in
/// (typically the module count including quiet zone).
#[derive(Debug, Clone, PartialEq)]
pub struct QrSymbol {
    pub path: String,
    pub native_units: u32,
}

/// External QR matrix generator.
///
/// Implementations encode with error correction level M and report capacity
/// overflow and similar rejections as [`QrBillError::MatrixGeneration`].
/// The call is the only suspension point of a render; it is never retried.
pub trait QrSymbolProducer {
    fn encode(&self, text: &str) -> QrBillResult<QrSymbol>;
}

impl<P: QrSymbolProducer + ?Sized> QrSymbolProducer for &P {
    fn encode(&self, text: &str) -> QrBillResult<QrSymbol> {
        (**self).encode(text)
    }
}

impl<P: QrSymbolProducer + ?Sized> QrSymbolProducer for Box<P> {
    fn encode(&self, text: &str) -> QrBillResult<QrSymbol> {
        (**self).encode(text)
    }
}

/// A symbol fitted into the fixed 46mm square.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaledSymbol {
    pub path: String,
    /// Uniform scale from native units to millimeters.
    pub scale: f64,
}

/// Encode `text` and fit the result into the QR square.
pub fn render_qr_symbol<P: QrSymbolProducer + ?Sized>(
    producer: &P,
    text: &str,
) -> QrBillResult<ScaledSymbol> {
    let symbol = producer.encode(text)?;
    if symbol.native_units == 0 {
        return Err(QrBillError::matrix_generation(
            "producer returned a symbol with zero native units",
        ));
    }
    if symbol.path.trim().is_empty() {
        return Err(QrBillError::matrix_generation("producer returned an empty path"));
    }
    Ok(ScaledSymbol {
        scale: QR_SIZE / f64::from(symbol.native_units),
        path: symbol.path,
    })
}
