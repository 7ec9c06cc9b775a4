//! Two-panel slip composition.

use tracing::{debug, instrument};

use qrbill_core::QrBillResult;
use qrbill_payload::{
    BillPayload, BillingPolicy, CompanySettings, Invoice, assemble_address_block,
    format_amount_display, format_reference_display,
};

use crate::cross::draw_swiss_cross;
use crate::document::RenderedDocument;
use crate::layout::*;
use crate::svg::{Anchor, SvgWriter, Weight, num};
use crate::symbol::{QrSymbolProducer, render_qr_symbol};

const FONT_FAMILY: &str = "Helvetica, Arial, Liberation Sans, sans-serif";

/// Average glyph width as a fraction of the font size, for line wrapping.
const GLYPH_WIDTH_RATIO: f64 = 0.5;

/// Renders bills into slips, delegating the QR matrix to `producer`.
#[derive(Debug, Clone)]
pub struct LayoutRenderer<P> {
    producer: P,
}

impl<P: QrSymbolProducer> LayoutRenderer<P> {
    pub fn new(producer: P) -> Self {
        Self { producer }
    }

    pub fn producer(&self) -> &P {
        &self.producer
    }

    /// Build the bill for `invoice` and render it.
    #[instrument(skip_all, fields(invoice_id = %invoice.id))]
    pub fn render_invoice(
        &self,
        invoice: &Invoice,
        settings: &CompanySettings,
        policy: &BillingPolicy,
    ) -> QrBillResult<RenderedDocument> {
        let bill = BillPayload::from_invoice(invoice, settings, policy)?;
        self.render(&bill)
    }

    /// Compose the slip. All-or-nothing: any failure yields no document.
    #[instrument(skip_all, fields(reference_kind = %bill.reference().kind()))]
    pub fn render(&self, bill: &BillPayload) -> QrBillResult<RenderedDocument> {
        let symbol = render_qr_symbol(&self.producer, bill.encoded_text())?;
        let content = SlipContent::from_bill(bill);

        let mut svg = SvgWriter::new();
        svg.rect(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT, "#fff");
        svg.dashed_line(RECEIPT_WIDTH, 0.0, RECEIPT_WIDTH, PAGE_HEIGHT, CUT_LINE_WIDTH);

        draw_receipt(&mut svg, &content);

        svg.text(PAYMENT_X, TITLE_BASELINE_Y, TITLE_FONT, Weight::Bold, Anchor::Start, "Payment part");
        svg.placed_path(PAYMENT_X, QR_TOP_Y, symbol.scale, &symbol.path, "#000");
        draw_swiss_cross(&mut svg, PAYMENT_X + QR_SIZE / 2.0, QR_TOP_Y + QR_SIZE / 2.0);
        draw_amount(&mut svg, PAYMENT_X, AMOUNT_TOP_Y, PAYMENT_TEXT, &content);
        draw_payment_information(&mut svg, &content);
        draw_alternative_schemes(&mut svg, &content);

        let body = svg.finish();
        let document = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}mm\" height=\"{h}mm\" viewBox=\"0 0 {w} {h}\" font-family=\"{FONT_FAMILY}\">\n{body}</svg>\n",
            w = num(PAGE_WIDTH),
            h = num(PAGE_HEIGHT),
        );
        debug!(bytes = document.len(), "rendered payment slip");
        Ok(RenderedDocument::new(document))
    }
}

/// Display strings shared by the receipt and the payment part, derived once
/// per bill so both panels always show the same data.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SlipContent {
    creditor: Vec<String>,
    reference: String,
    additional_information: Vec<String>,
    debtor: Vec<String>,
    currency: String,
    amount: String,
    alternative_schemes: Vec<String>,
}

impl SlipContent {
    fn from_bill(bill: &BillPayload) -> Self {
        let reference = bill.reference();
        Self {
            creditor: assemble_address_block(bill.creditor()),
            reference: format_reference_display(reference.value(), reference.kind()),
            additional_information: [bill.unstructured_message(), bill.billing_information()]
                .into_iter()
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            debtor: assemble_address_block(bill.debtor()),
            currency: bill.currency().to_string(),
            amount: format_amount_display(bill.amount()),
            alternative_schemes: bill.alternative_schemes().to_vec(),
        }
    }
}

/// Top-down text cursor for one column. Empty fields are skipped entirely.
///
/// No baseline goes below `bottom`. When a field does not fit, its last
/// shown line ends with an ellipsis and every later field is dropped.
struct TextColumn<'a> {
    svg: &'a mut SvgWriter,
    style: TextStyle,
    x: f64,
    y: f64,
    bottom: f64,
    max_chars: usize,
    full: bool,
}

impl<'a> TextColumn<'a> {
    fn new(svg: &'a mut SvgWriter, style: TextStyle, x: f64, y: f64, width: f64, bottom: f64) -> Self {
        let max_chars = (width / (style.value_font * GLYPH_WIDTH_RATIO)).floor() as usize;
        Self {
            svg,
            style,
            x,
            y,
            bottom,
            max_chars: max_chars.max(2),
            full: false,
        }
    }

    fn field(&mut self, label: &str, values: &[String]) {
        if self.full {
            return;
        }
        let lines: Vec<String> = values.iter().flat_map(|v| wrap(v, self.max_chars)).collect();
        if lines.is_empty() {
            return;
        }
        let style = self.style;
        let first_baseline = self.y + style.label_advance + style.value_font;
        if first_baseline > self.bottom {
            self.full = true;
            debug!(label, "text column full, field dropped");
            return;
        }
        let fitting = 1 + ((self.bottom - first_baseline) / style.value_advance).floor() as usize;
        let shown = lines.len().min(fitting);

        self.svg.text(self.x, self.y + style.label_font, style.label_font, Weight::Bold, Anchor::Start, label);
        self.y += style.label_advance;
        for (i, line) in lines.iter().take(shown).enumerate() {
            let text = if i + 1 == shown && shown < lines.len() {
                ellipsize(line, self.max_chars)
            } else {
                line.clone()
            };
            self.svg.text(self.x, self.y + style.value_font, style.value_font, Weight::Regular, Anchor::Start, &text);
            self.y += style.value_advance;
        }
        if shown < lines.len() {
            self.full = true;
            debug!(label, hidden = lines.len() - shown, "text column full, field truncated");
        }
        self.y += style.block_gap;
    }
}

fn draw_receipt(svg: &mut SvgWriter, content: &SlipContent) {
    svg.text(RECEIPT_X, TITLE_BASELINE_Y, TITLE_FONT, Weight::Bold, Anchor::Start, "Receipt");

    let mut column = TextColumn::new(
        svg,
        RECEIPT_TEXT,
        RECEIPT_X,
        RECEIPT_TOP_Y,
        RECEIPT_RIGHT_X - RECEIPT_X,
        RECEIPT_TEXT_BOTTOM,
    );
    column.field("Account / Payable to", &content.creditor);
    column.field("Reference", std::slice::from_ref(&content.reference));
    column.field("Payable by", &content.debtor);

    draw_amount(svg, RECEIPT_X, AMOUNT_TOP_Y, RECEIPT_TEXT, content);
    svg.text(
        RECEIPT_RIGHT_X,
        ACCEPTANCE_POINT_Y + RECEIPT_TEXT.label_font,
        RECEIPT_TEXT.label_font,
        Weight::Bold,
        Anchor::End,
        "Acceptance point",
    );
}

fn draw_payment_information(svg: &mut SvgWriter, content: &SlipContent) {
    let mut column = TextColumn::new(
        svg,
        PAYMENT_TEXT,
        INFO_X,
        INFO_TOP_Y,
        PAGE_WIDTH - MARGIN - INFO_X,
        INFO_TEXT_BOTTOM,
    );
    column.field("Account / Payable to", &content.creditor);
    column.field("Reference", std::slice::from_ref(&content.reference));
    column.field("Additional information", &content.additional_information);
    column.field("Payable by", &content.debtor);
}

fn draw_amount(svg: &mut SvgWriter, x: f64, top: f64, style: TextStyle, content: &SlipContent) {
    let amount_x = x + AMOUNT_COLUMN_OFFSET;
    svg.text(x, top + style.label_font, style.label_font, Weight::Bold, Anchor::Start, "Currency");
    svg.text(amount_x, top + style.label_font, style.label_font, Weight::Bold, Anchor::Start, "Amount");
    let value_baseline = top + style.label_advance + style.value_font;
    svg.text(x, value_baseline, style.value_font, Weight::Regular, Anchor::Start, &content.currency);
    svg.text(amount_x, value_baseline, style.value_font, Weight::Regular, Anchor::Start, &content.amount);
}

fn draw_alternative_schemes(svg: &mut SvgWriter, content: &SlipContent) {
    let mut baseline = ALTERNATIVE_SCHEMES_Y + PAYMENT_TEXT.label_font;
    for scheme in &content.alternative_schemes {
        svg.text(PAYMENT_X, baseline, PAYMENT_TEXT.label_font, Weight::Regular, Anchor::Start, scheme);
        baseline += PAYMENT_TEXT.label_advance;
    }
}

/// Cut `line` so that it ends with an ellipsis and still fits `max_chars`.
fn ellipsize(line: &str, max_chars: usize) -> String {
    let mut out: String = line.chars().take(max_chars.saturating_sub(1)).collect();
    out.truncate(out.trim_end().len());
    out.push('\u{2026}');
    out
}

/// Greedy word wrap; words longer than a line are split.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }
        let needed = if current.is_empty() { word.len() } else { current.chars().count() + 1 + word.len() };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
