//! SVG visualization of a resolved placement.
//!
//! Draws the viewport as the background panel, the anchor (outlined rect or
//! crosshair point), and the overlay rectangle, with labels for the overlay
//! geometry and the chosen directions.
//!
//! # Example
//!
//! ```
//! use zenplace::{Anchor, Rect, svg::render_placement_svg};
//!
//! let viewport = Rect::new(0, 0, 1280, 720);
//! let anchor = Anchor::around_bounds_horizontal(Rect::new(1200, 680, 60, 24));
//! let placed = anchor.resolve(240, 320, viewport);
//!
//! let svg = render_placement_svg(&anchor, viewport, &placed);
//! assert!(svg.starts_with("<svg"));
//! ```

use crate::geometry::Rect;
use crate::placement::{Anchor, Placement};

/// Maximum pixel width of the viewport panel.
const MAX_PANEL_W: f64 = 400.0;
/// Maximum pixel height of the viewport panel.
const MAX_PANEL_H: f64 = 300.0;
/// Horizontal margin.
const MARGIN_X: f64 = 50.0;
/// Top margin.
const MARGIN_TOP: f64 = 30.0;
/// Height of label text area above the panel.
const LABEL_H: f64 = 22.0;
/// Height of the annotation area below the panel.
const ANNOTATION_H: f64 = 36.0;
/// Half-length of the crosshair arms drawn for point anchors.
const MARKER_R: f64 = 6.0;

/// Render an SVG document showing `placement` for `anchor` inside `viewport`.
///
/// Geometry outside the viewport is drawn as-is, overflowing the panel, so
/// anchors placed off-screen are still visible in the diagram.
pub fn render_placement_svg(anchor: &Anchor, viewport: Rect, placement: &Placement) -> String {
    let (pw, ph, scale) = scale_to_fit(viewport);
    let total_w = MAX_PANEL_W + 2.0 * MARGIN_X;
    let total_h = MARGIN_TOP + LABEL_H + MAX_PANEL_H + ANNOTATION_H + MARGIN_TOP;
    let center_x = total_w / 2.0;
    let panel_x = center_x - pw / 2.0;
    let panel_y = MARGIN_TOP + LABEL_H;

    // Screen coordinates relative to the viewport origin, scaled into the panel.
    let map_x = |x: i64| panel_x + (x - viewport.x as i64) as f64 * scale;
    let map_y = |y: i64| panel_y + (y - viewport.y as i64) as f64 * scale;

    let mut svg = String::with_capacity(4096);

    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        total_w as u32, total_h as u32, total_w, total_h
    ));
    svg.push('\n');

    svg.push_str(
        r##"<style>
  text { font-family: "Consolas", "DejaVu Sans Mono", "Courier New", monospace; }
  .label { font-size: 13px; font-weight: bold; fill: #333; }
  .annotation { font-size: 11px; fill: #666; }
  .viewport { fill: #e8e8e8; stroke: #999; stroke-width: 1; }
  .anchor { fill: none; stroke: #c0392b; stroke-width: 1.5; stroke-dasharray: 4,2; }
  .overlay { fill: #6ba3d6; fill-opacity: 0.8; stroke: #2c6faa; stroke-width: 1.5; }
  @media (prefers-color-scheme: dark) {
    .label { fill: #e0e0e0; }
    .annotation { fill: #aaa; }
    .viewport { fill: #2d2d2d; stroke: #555; }
    .anchor { stroke: #e57368; }
    .overlay { fill: #3a72a4; stroke: #5a9fd4; }
  }
</style>
"##,
    );

    // Label
    svg.push_str(&format!(
        r#"<text x="{}" y="{}" class="label" text-anchor="middle">{}</text>"#,
        center_x,
        MARGIN_TOP + 14.0,
        escape_xml(&format!(
            "Viewport  {}×{} at ({}, {})",
            viewport.width, viewport.height, viewport.x, viewport.y
        ))
    ));
    svg.push('\n');

    // Viewport
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="viewport" rx="2"/>"#,
        panel_x, panel_y, pw, ph
    ));
    svg.push('\n');

    // Overlay, drawn before the anchor so the anchor outline stays visible
    let r = placement.rect;
    svg.push_str(&format!(
        r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="overlay" rx="1"/>"#,
        map_x(r.x as i64),
        map_y(r.y as i64),
        r.width as f64 * scale,
        r.height as f64 * scale
    ));
    svg.push('\n');

    // Anchor
    match anchor.bounds() {
        Some(b) => {
            svg.push_str(&format!(
                r#"<rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" class="anchor"/>"#,
                map_x(b.x as i64),
                map_y(b.y as i64),
                b.width as f64 * scale,
                b.height as f64 * scale
            ));
            svg.push('\n');
        }
        None => {
            let p = anchor.pivots();
            let (cx, cy) = (map_x(p.right_start), map_y(p.bottom_start));
            svg.push_str(&format!(
                r#"<path d="M {:.1} {:.1} H {:.1} M {:.1} {:.1} V {:.1}" class="anchor"/>"#,
                cx - MARKER_R,
                cy,
                cx + MARKER_R,
                cx,
                cy - MARKER_R,
                cy + MARKER_R
            ));
            svg.push('\n');
        }
    }

    // Annotations
    let annotations = [
        format!("Overlay  {}×{} at ({}, {})", r.width, r.height, r.x, r.y),
        format!(
            "{:?} / {:?}, {} anchor",
            placement.horizontal,
            placement.vertical,
            anchor_label(anchor)
        ),
    ];
    let mut ay = panel_y + MAX_PANEL_H + 14.0;
    for line in &annotations {
        svg.push_str(&format!(
            r#"<text x="{}" y="{:.1}" class="annotation" text-anchor="middle">{}</text>"#,
            center_x,
            ay,
            escape_xml(line)
        ));
        svg.push('\n');
        ay += 14.0;
    }

    svg.push_str("</svg>\n");
    svg
}

fn anchor_label(anchor: &Anchor) -> &'static str {
    match anchor {
        Anchor::Position(_) => "position",
        Anchor::BoundsHorizontal(_) => "bounds-horizontal",
        Anchor::BoundsVertical(_) => "bounds-vertical",
    }
}

/// Scale the viewport to fit within MAX_PANEL_W × MAX_PANEL_H, preserving aspect ratio.
fn scale_to_fit(viewport: Rect) -> (f64, f64, f64) {
    let w = viewport.width as f64;
    let h = viewport.height as f64;
    if w == 0.0 || h == 0.0 {
        return (w.min(MAX_PANEL_W), h.min(MAX_PANEL_H), 1.0);
    }
    let scale = (MAX_PANEL_W / w).min(MAX_PANEL_H / h);
    (w * scale, h * scale, scale)
}

/// Escape special characters for XML text content.
fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    const SCREEN: Rect = Rect::new(0, 0, 800, 600);

    #[test]
    fn svg_bounds_anchor() {
        let anchor = Anchor::around_bounds_horizontal(Rect::new(40, 0, 60, 20));
        let placed = anchor.resolve(200, 300, SCREEN);

        let svg = render_placement_svg(&anchor, SCREEN, &placed);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Viewport  800×600"));
        assert!(svg.contains("Overlay  200×580 at (40, 20)"));
        assert!(svg.contains("Right / Down, bounds-horizontal anchor"));
        assert!(svg.contains(r#"class="anchor""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn svg_position_anchor_draws_crosshair() {
        let anchor = Anchor::around_position(Point::new(750, 580));
        let placed = anchor.resolve(120, 200, SCREEN);

        let svg = render_placement_svg(&anchor, SCREEN, &placed);
        assert!(svg.contains("<path d=\"M "));
        assert!(svg.contains("Left / Up, position anchor"));
    }

    #[test]
    fn svg_panel_scales_viewport() {
        // 800×600 into 400×300 → scale 0.5
        let anchor = Anchor::around_bounds_vertical(Rect::new(100, 100, 100, 20));
        let placed = anchor.resolve(100, 100, SCREEN);

        let svg = render_placement_svg(&anchor, SCREEN, &placed);
        assert!(svg.contains(r#"width="400.0" height="300.0" class="viewport""#));
        assert!(svg.contains(r#"width="50.0" height="10.0" class="anchor""#));
    }

    #[test]
    fn svg_degenerate_viewport() {
        let viewport = Rect::new(0, 0, 0, 0);
        let anchor = Anchor::around_position(Point::new(0, 0));
        let placed = anchor.resolve(10, 10, viewport);

        let svg = render_placement_svg(&anchor, viewport, &placed);
        assert!(svg.contains("Viewport  0×0"));
        assert!(svg.contains("</svg>"));
    }

    #[test]
    fn svg_offset_viewport_maps_to_panel_origin() {
        let viewport = Rect::new(-400, -300, 800, 600);
        let anchor = Anchor::around_bounds_horizontal(Rect::new(-400, -300, 80, 20));
        let placed = anchor.resolve(100, 100, viewport);

        let svg = render_placement_svg(&anchor, viewport, &placed);
        // Anchor at the viewport's top-left lands on the panel's top-left.
        let expected = r#"<rect x="50.0" y="52.0" width="40.0" height="10.0" class="anchor"/>"#;
        assert!(svg.contains(expected));
    }

    #[test]
    fn escape_xml_text() {
        assert_eq!(escape_xml(r#"a<b>&"c""#), "a&lt;b&gt;&amp;&quot;c&quot;");
    }

    #[test]
    #[ignore] // run with: cargo test --features svg -- --ignored generate_sample_svgs --nocapture
    fn generate_sample_svgs() {
        let out = concat!(env!("CARGO_MANIFEST_DIR"), "/doc/svg");
        std::fs::create_dir_all(out).unwrap();

        let screen = Rect::new(0, 0, 1280, 720);
        let cases: Vec<(&str, Anchor, u32, u32)> = vec![
            // Menu-bar item with room below
            ("menu_bar", Anchor::around_bounds_horizontal(Rect::new(80, 0, 64, 24)), 240, 320),
            // Combo box near the bottom edge, opens upward
            (
                "combo_flip_up",
                Anchor::around_bounds_horizontal(Rect::new(300, 660, 200, 28)),
                200,
                240,
            ),
            // Sub-menu near the right edge, opens to the left
            (
                "submenu_flip_left",
                Anchor::around_bounds_vertical(Rect::new(1000, 200, 220, 24)),
                260,
                180,
            ),
            // Context menu at the cursor, corner case
            ("context_corner", Anchor::around_position(Point::new(1250, 700)), 180, 260),
            // Oversized request, shrinks on both axes
            ("oversized", Anchor::around_position(Point::new(700, 300)), 2000, 2000),
        ];

        for (name, anchor, w, h) in &cases {
            let placed = anchor.resolve(*w, *h, screen);
            let svg = render_placement_svg(anchor, screen, &placed);
            std::fs::write(format!("{out}/{name}.svg"), svg).unwrap();
        }

        println!("Generated {} SVGs in {out}", cases.len());
    }
}
