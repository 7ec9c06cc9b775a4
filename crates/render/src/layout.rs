//! Fixed slip geometry, in millimeters.

pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 105.0;

/// Receipt width; the dashed cut line sits here.
pub const RECEIPT_WIDTH: f64 = 62.0;
pub const MARGIN: f64 = 5.0;

pub const RECEIPT_X: f64 = MARGIN;
/// Right edge of the receipt's text area.
pub const RECEIPT_RIGHT_X: f64 = RECEIPT_WIDTH - MARGIN;
pub const PAYMENT_X: f64 = RECEIPT_WIDTH + MARGIN;

pub const TITLE_BASELINE_Y: f64 = MARGIN + 5.0;
pub const QR_TOP_Y: f64 = TITLE_BASELINE_Y + 5.0;
pub const QR_SIZE: f64 = 46.0;
pub const AMOUNT_TOP_Y: f64 = QR_TOP_Y + QR_SIZE + 5.0;

pub const INFO_X: f64 = PAYMENT_X + QR_SIZE + 5.0;
pub const INFO_TOP_Y: f64 = MARGIN;
pub const RECEIPT_TOP_Y: f64 = QR_TOP_Y;

/// Offset of the "Amount" column from the "Currency" column.
pub const AMOUNT_COLUMN_OFFSET: f64 = 14.0;

pub const ACCEPTANCE_POINT_Y: f64 = 82.0;
pub const ALTERNATIVE_SCHEMES_Y: f64 = 92.0;

pub const TITLE_FONT: f64 = 3.9;

/// Font sizes and row advances of one panel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub label_font: f64,
    pub value_font: f64,
    pub label_advance: f64,
    pub value_advance: f64,
    pub block_gap: f64,
}

pub const RECEIPT_TEXT: TextStyle = TextStyle {
    label_font: 2.1,
    value_font: 2.8,
    label_advance: 2.9,
    value_advance: 3.3,
    block_gap: 2.0,
};

pub const PAYMENT_TEXT: TextStyle = TextStyle {
    label_font: 2.3,
    value_font: 3.2,
    label_advance: 3.2,
    value_advance: 3.8,
    block_gap: 2.5,
};

/// Lowest text baseline of the receipt column; the amount block starts below.
pub const RECEIPT_TEXT_BOTTOM: f64 = AMOUNT_TOP_Y - 1.0;
/// Lowest text baseline of the information column.
pub const INFO_TEXT_BOTTOM: f64 = ALTERNATIVE_SCHEMES_Y - 1.0;

pub const CUT_LINE_WIDTH: f64 = 0.2;
