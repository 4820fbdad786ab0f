use crate::compose::engine::FrameDoodle;

/// Serialize a composed frame as a standalone SVG document.
///
/// One `<path>` per stroke, grouped per feature, stroked in the feature color.
pub fn frame_to_svg(frame: &FrameDoodle, width: u32, height: u32, stroke_width: f64) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));
    for feature in &frame.features {
        out.push_str(&format!(
            "  <g data-feature=\"{:?}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{}\" \
             stroke-width=\"{stroke_width}\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n",
            feature.feature,
            feature.color.to_hex_rgb(),
            feature.color.opacity(),
        ));
        for stroke in &feature.strokes {
            let d = stroke.to_bez_path(false).to_svg();
            if d.is_empty() {
                continue;
            }
            out.push_str(&format!("    <path d=\"{d}\"/>\n"));
        }
        out.push_str("  </g>\n");
    }
    out.push_str("</svg>\n");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/compose/svg.rs"]
mod tests;
