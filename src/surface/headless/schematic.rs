use std::fmt::{self, Write};

use crate::{
    artifact::Artifact,
    schematic::{Primitive, Schematic, StyleKey},
    surface::SchematicSurface,
};

use super::HeadlessSurface;

const WALL_GRADIENT_ID: &str = "wall";
const BORE_FILL: &str = "#1f2933";
const OUTLINE: &str = "#374151";

impl SchematicSurface for HeadlessSurface {
    type Error = fmt::Error;

    fn draw_schematic(&mut self, schematic: &Schematic) -> Result<Artifact, Self::Error> {
        let mut out = String::new();
        write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.width,
            h = self.height,
        )?;
        write!(
            out,
            r##"<defs><linearGradient id="{WALL_GRADIENT_ID}" x1="0" y1="0" x2="1" y2="1"><stop offset="0" stop-color="#d1d5db"/><stop offset="1" stop-color="#6b7280"/></linearGradient></defs>"##
        )?;

        for primitive in &schematic.primitives {
            match *primitive {
                Primitive::Circle {
                    center,
                    radius,
                    style,
                } => write!(
                    out,
                    r#"<circle cx="{:.3}" cy="{:.3}" r="{:.3}" fill="{}" stroke="{OUTLINE}"/>"#,
                    center.x,
                    center.y,
                    radius,
                    paint(style),
                )?,
                Primitive::RectPair {
                    outer_origin,
                    outer_size,
                    inner_origin,
                    inner_size,
                    outer_style,
                    inner_style,
                } => write!(
                    out,
                    r#"<rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="{}" stroke="{OUTLINE}"/><rect x="{:.3}" y="{:.3}" width="{:.3}" height="{:.3}" fill="{}"/>"#,
                    outer_origin.x,
                    outer_origin.y,
                    outer_size.width,
                    outer_size.height,
                    paint(outer_style),
                    inner_origin.x,
                    inner_origin.y,
                    inner_size.width,
                    inner_size.height,
                    paint(inner_style),
                )?,
            }
        }

        if schematic.truncated {
            let (rx, ry) = schematic.rendered_dims;
            let (nx, ny) = schematic.true_dims;
            write!(
                out,
                r#"<text x="8" y="{}" font-size="12">Showing {rx} × {ry} of {nx} × {ny} tubes</text>"#,
                self.height.saturating_sub(8),
            )?;
        }

        out.push_str("</svg>");
        Ok(Artifact::svg(out))
    }
}

fn paint(style: StyleKey) -> String {
    match style {
        StyleKey::WallGradient => format!("url(#{WALL_GRADIENT_ID})"),
        StyleKey::Bore => BORE_FILL.to_owned(),
    }
}
