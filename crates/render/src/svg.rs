//! Minimal SVG element writer.

/// Text anchoring.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Anchor {
    Start,
    End,
}

/// Font weight.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Weight {
    Regular,
    Bold,
}

/// Append-only SVG body builder. Every attribute value passes through
/// [`escape_xml`] or [`num`].
#[derive(Debug, Default)]
pub struct SvgWriter {
    out: String,
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: &str) {
        self.out.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            num(x),
            num(y),
            num(width),
            num(height),
            escape_xml(fill)
        ));
        self.out.push('\n');
    }

    pub fn dashed_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        self.out.push_str(&format!(
            r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#000" stroke-width="{}" stroke-dasharray="1 1"/>"##,
            num(x1),
            num(y1),
            num(x2),
            num(y2),
            num(width)
        ));
        self.out.push('\n');
    }

    pub fn path(&mut self, d: &str, fill: &str) {
        self.out.push_str(&format!(
            r#"<path d="{}" fill="{}"/>"#,
            escape_xml(d),
            escape_xml(fill)
        ));
        self.out.push('\n');
    }

    /// Path in a local coordinate system translated to `(x, y)` and scaled uniformly.
    pub fn placed_path(&mut self, x: f64, y: f64, scale: f64, d: &str, fill: &str) {
        self.out.push_str(&format!(
            r#"<g transform="translate({} {}) scale({})">"#,
            num(x),
            num(y),
            num_precise(scale)
        ));
        self.out.push_str(&format!(
            r#"<path d="{}" fill="{}" shape-rendering="crispEdges"/>"#,
            escape_xml(d),
            escape_xml(fill)
        ));
        self.out.push_str("</g>\n");
    }

    pub fn text(&mut self, x: f64, baseline: f64, size: f64, weight: Weight, anchor: Anchor, content: &str) {
        let weight = match weight {
            Weight::Regular => "",
            Weight::Bold => r#" font-weight="bold""#,
        };
        let anchor = match anchor {
            Anchor::Start => "",
            Anchor::End => r#" text-anchor="end""#,
        };
        self.out.push_str(&format!(
            r#"<text x="{}" y="{}" font-size="{}"{weight}{anchor}>{}</text>"#,
            num(x),
            num(baseline),
            num(size),
            escape_xml(content)
        ));
        self.out.push('\n');
    }

    pub fn finish(self) -> String {
        self.out
    }
}

/// Millimeter value with at most three decimals and no trailing zeros.
pub fn num(value: f64) -> String {
    trim_decimals(format!("{value:.3}"))
}

fn num_precise(value: f64) -> String {
    trim_decimals(format!("{value:.6}"))
}

fn trim_decimals(formatted: String) -> String {
    let trimmed = if formatted.contains('.') {
        formatted.trim_end_matches('0').trim_end_matches('.')
    } else {
        formatted.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}

/// Escape text for use in XML content and attribute values.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
