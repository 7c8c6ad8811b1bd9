//! Standalone SVG export of a single blob frame

use std::io::Cursor;

use anyhow::Result;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, Event};

use super::config::BlobConfig;
use super::driver::BlobFrame;
use super::gradient::{self, GradientKind};

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const GLOW_DEVIATION: &str = "3";

/// Write `frame` as an SVG document whose gradient is referenced as `url(#id)`
pub fn render_document(config: &BlobConfig, frame: &BlobFrame, id: &str) -> Result<String> {
    let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
    let size = frame.size.to_string();
    let view_box = format!("0 0 {} {}", frame.size, frame.size);

    writer.write_event(Event::Start(BytesStart::new("svg").with_attributes([
        ("xmlns", SVG_NAMESPACE),
        ("width", size.as_str()),
        ("height", size.as_str()),
        ("viewBox", view_box.as_str()),
    ])))?;

    writer.write_event(Event::Start(BytesStart::new("defs")))?;
    write_gradient(&mut writer, frame.gradient, &config.resolved_colors(), id)?;
    if config.glow {
        write_glow_filter(&mut writer, id)?;
    }
    if config.drop_shadow {
        write_shadow_filter(&mut writer, id)?;
    }
    writer.write_event(Event::End(BytesEnd::new("defs")))?;

    let shadow_ref = format!("url(#shadow-{})", id);
    if config.drop_shadow {
        writer.write_event(Event::Start(
            BytesStart::new("g").with_attributes([("filter", shadow_ref.as_str())]),
        ))?;
    }

    let path_data = frame.curve.to_svg_path_data();
    let fill = format!("url(#{})", id);
    let glow_ref = format!("url(#glow-{})", id);
    let mut path = BytesStart::new("path")
        .with_attributes([("d", path_data.as_str()), ("fill", fill.as_str())]);
    if config.glow {
        path.push_attribute(("filter", glow_ref.as_str()));
    }
    writer.write_event(Event::Empty(path))?;

    if config.drop_shadow {
        writer.write_event(Event::End(BytesEnd::new("g")))?;
    }
    writer.write_event(Event::End(BytesEnd::new("svg")))?;

    let mut document = String::from_utf8(writer.into_inner().into_inner())?;
    document.push('\n');
    Ok(document)
}

fn write_gradient<W: std::io::Write>(
    writer: &mut Writer<W>,
    kind: GradientKind,
    colors: &[String],
    id: &str,
) -> Result<()> {
    let coords = gradient::coords(kind);
    let percent = |v: f32| format!("{}%", v);

    let (tag, attributes) = match coords.r {
        Some(r) => (
            "radialGradient",
            vec![
                ("cx", percent(coords.x1)),
                ("cy", percent(coords.y1)),
                ("r", percent(r)),
            ],
        ),
        None => (
            "linearGradient",
            vec![
                ("x1", percent(coords.x1)),
                ("y1", percent(coords.y1)),
                ("x2", percent(coords.x2)),
                ("y2", percent(coords.y2)),
            ],
        ),
    };

    let mut start = BytesStart::new(tag).with_attributes([("id", id)]);
    for (name, value) in &attributes {
        start.push_attribute((*name, value.as_str()));
    }
    writer.write_event(Event::Start(start))?;

    for (color, offset) in colors.iter().zip(gradient::stop_offsets(colors.len())) {
        let offset = percent(offset * 100.0);
        writer.write_event(Event::Empty(BytesStart::new("stop").with_attributes([
            ("offset", offset.as_str()),
            ("stop-color", color.as_str()),
        ])))?;
    }

    writer.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

fn write_glow_filter<W: std::io::Write>(writer: &mut Writer<W>, id: &str) -> Result<()> {
    let filter_id = format!("glow-{}", id);
    writer.write_event(Event::Start(
        BytesStart::new("filter").with_attributes([("id", filter_id.as_str())]),
    ))?;
    writer.write_event(Event::Empty(BytesStart::new("feGaussianBlur").with_attributes([
        ("stdDeviation", GLOW_DEVIATION),
        ("result", "coloredBlur"),
    ])))?;
    writer.write_event(Event::Start(BytesStart::new("feMerge")))?;
    for input in ["coloredBlur", "SourceGraphic"] {
        writer.write_event(Event::Empty(
            BytesStart::new("feMergeNode").with_attributes([("in", input)]),
        ))?;
    }
    writer.write_event(Event::End(BytesEnd::new("feMerge")))?;
    writer.write_event(Event::End(BytesEnd::new("filter")))?;
    Ok(())
}

/// Two stacked soft shadows, a wide faint one and a tight darker one
fn write_shadow_filter<W: std::io::Write>(writer: &mut Writer<W>, id: &str) -> Result<()> {
    let filter_id = format!("shadow-{}", id);
    writer.write_event(Event::Start(BytesStart::new("filter").with_attributes([
        ("id", filter_id.as_str()),
        ("x", "-50%"),
        ("y", "-50%"),
        ("width", "200%"),
        ("height", "200%"),
    ])))?;
    for (dy, deviation, opacity) in [("10", "4", "0.04"), ("4", "1.5", "0.1")] {
        writer.write_event(Event::Empty(BytesStart::new("feDropShadow").with_attributes([
            ("dx", "0"),
            ("dy", dy),
            ("stdDeviation", deviation),
            ("flood-color", "#000000"),
            ("flood-opacity", opacity),
        ])))?;
    }
    writer.write_event(Event::End(BytesEnd::new("filter")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::gradient::GradientType;

    fn render(config: &BlobConfig) -> String {
        let frame = BlobFrame::at(config, 0.0);
        render_document(config, &frame, "blob-test").unwrap()
    }

    #[test]
    fn document_has_viewbox_and_path() {
        let svg = render(&BlobConfig::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 200 200""#));
        assert!(svg.contains(r#"fill="url(#blob-test)""#));
        assert!(svg.contains(r#"d="M "#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn linear_gradient_uses_percent_coords() {
        let config = BlobConfig::default().gradient_angle(0.0);
        let svg = render(&config);
        assert!(svg.contains("<linearGradient"));
        assert!(svg.contains(r#"x1="0%""#), "{}", svg);
        assert!(svg.contains(r#"x2="100%""#));
        assert!(svg.contains(r#"y1="50%""#));
    }

    #[test]
    fn radial_gradient_has_center_and_radius() {
        let config = BlobConfig::default().gradient_type(GradientType::Radial);
        let svg = render(&config);
        assert!(svg.contains("<radialGradient"));
        assert!(svg.contains(r#"cx="50%" cy="50%" r="50%""#), "{}", svg);
        assert!(!svg.contains("linearGradient"));
    }

    #[test]
    fn stops_spread_across_palette() {
        let svg = render(&BlobConfig::default());
        assert!(svg.contains(r##"offset="0%" stop-color="#6366f1""##));
        assert!(svg.contains(r##"offset="50%" stop-color="#8b5cf6""##));
        assert!(svg.contains(r##"offset="100%" stop-color="#ec4899""##));
    }

    #[test]
    fn effects_are_optional() {
        let plain = render(&BlobConfig::default().glow(false).drop_shadow(false));
        assert!(!plain.contains("<filter"));
        assert!(!plain.contains("<g"));

        let glowing = render(&BlobConfig::default().drop_shadow(false));
        assert!(glowing.contains(r#"<feGaussianBlur stdDeviation="3""#));
        assert!(glowing.contains(r#"filter="url(#glow-blob-test)""#));

        let shadowed = render(&BlobConfig::default().glow(false));
        assert!(shadowed.contains("<feDropShadow"));
        assert!(shadowed.contains(r#"<g filter="url(#shadow-blob-test)">"#));
    }

    #[test]
    fn malformed_colors_pass_through_escaped() {
        let config = BlobConfig::default().colors(&["not-a-color", "#fff"]);
        let svg = render(&config);
        assert!(svg.contains(r#"stop-color="not-a-color""#));
    }
}
