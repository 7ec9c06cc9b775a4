//! Swiss cross overlay at the center of the QR symbol.

use crate::svg::SvgWriter;

const WHITE: &str = "#fff";
const BLACK: &str = "#000";
const RED: &str = "#f00";

/// Concentric squares, outermost first: edge length (mm) and fill.
pub const CROSS_LAYERS: [(f64, &str); 4] = [(7.0, WHITE), (6.6, BLACK), (6.0, WHITE), (5.2, RED)];

/// Thickness of each cross bar.
pub const BAR_THICKNESS: f64 = 1.15;

/// Full length of each cross bar (arms are 7/6 as long as the bar is thick).
pub const BAR_LENGTH: f64 = 3.85;

/// Draw the cross centered on `(cx, cy)`.
pub fn draw_swiss_cross(svg: &mut SvgWriter, cx: f64, cy: f64) {
    for (size, fill) in CROSS_LAYERS {
        svg.rect(cx - size / 2.0, cy - size / 2.0, size, size, fill);
    }
    svg.path(&plus_path(cx, cy), WHITE);
}

fn plus_path(cx: f64, cy: f64) -> String {
    let t = BAR_THICKNESS / 2.0;
    let l = BAR_LENGTH / 2.0;
    let n = crate::svg::num;
    format!(
        "M{} {}H{}V{}H{}V{}H{}V{}H{}V{}H{}V{}Z",
        n(cx - t),
        n(cy - l),
        n(cx + t),
        n(cy - t),
        n(cx + l),
        n(cy + t),
        n(cx + t),
        n(cy + l),
        n(cx - t),
        n(cy + t),
        n(cx - l),
        n(cy - t),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_shrink_inwards() {
        let sizes: Vec<f64> = CROSS_LAYERS.iter().map(|(size, _)| *size).collect();
        assert!(sizes.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(sizes, vec![7.0, 6.6, 6.0, 5.2]);
    }

    #[test]
    fn arms_follow_seven_to_six_ratio() {
        let arm = (BAR_LENGTH - BAR_THICKNESS) / 2.0;
        assert!((arm / BAR_THICKNESS - 7.0 / 6.0).abs() < 0.01);
        assert!(BAR_LENGTH < 5.2);
    }

    #[test]
    fn cross_is_centered() {
        let mut svg = SvgWriter::new();
        draw_swiss_cross(&mut svg, 90.0, 38.0);
        let out = svg.finish();
        assert!(out.contains(r##"<rect x="86.5" y="34.5" width="7" height="7" fill="#fff"/>"##));
        assert!(out.contains(r##"<rect x="87.4" y="35.4" width="5.2" height="5.2" fill="#f00"/>"##));
        assert!(out.contains("M89.425 36.075H90.575"));
    }
}
