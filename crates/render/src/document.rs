use qrbill_core::ValueObject;

use crate::layout::{PAGE_HEIGHT, PAGE_WIDTH};

/// A finished, self-contained payment slip as an SVG string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    svg: String,
}

impl ValueObject for RenderedDocument {}

impl RenderedDocument {
    pub const WIDTH_MM: f64 = PAGE_WIDTH;
    pub const HEIGHT_MM: f64 = PAGE_HEIGHT;

    pub(crate) fn new(svg: String) -> Self {
        Self { svg }
    }

    pub fn as_str(&self) -> &str {
        &self.svg
    }

    pub fn into_string(self) -> String {
        self.svg
    }
}

impl core::fmt::Display for RenderedDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.svg)
    }
}

impl AsRef<str> for RenderedDocument {
    fn as_ref(&self) -> &str {
        &self.svg
    }
}
