//! SVG backend: serialize a [`Scene`] into a standalone document.

use std::fmt::Write;

use crate::scene::{Primitive, Scene, TextAnchor};

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Serialize the display list. Pure function of the scene; hit targets do
/// not appear in the markup (hover is the host's concern).
pub fn scene_to_svg(scene: &Scene) -> String {
    let mut out = String::new();
    let w = scene.width;
    let h = scene.height;
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    out.push('\n');
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Circle {
                center,
                radius,
                fill,
            } => {
                let _ = writeln!(
                    out,
                    r#"  <circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    fill.hex()
                );
            }
            Primitive::Path { d, fill } => {
                let _ = writeln!(out, r#"  <path d="{}" fill="{}"/>"#, d, fill.hex());
            }
            Primitive::Rect { rect, fill } => {
                let _ = writeln!(
                    out,
                    r#"  <rect x="{:.2}" y="{:.2}" width="{}" height="{:.2}" fill="{}"/>"#,
                    rect.x,
                    rect.y,
                    rect.w,
                    rect.h,
                    fill.hex()
                );
            }
            Primitive::Line { from, to, stroke } => {
                let _ = writeln!(
                    out,
                    r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    stroke.hex()
                );
            }
            Primitive::Text {
                pos,
                size,
                fill,
                anchor,
                content,
            } => {
                let anchor = match anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let _ = writeln!(
                    out,
                    r#"  <text x="{}" y="{}" font-size="{}" text-anchor="{}" fill="{}">{}</text>"#,
                    pos.x,
                    pos.y,
                    size,
                    anchor,
                    fill.hex(),
                    escape(content)
                );
            }
        }
    }
    out.push_str("</svg>\n");
    out
}
