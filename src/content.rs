//! Content stream rendering for recorded pages.

use crate::canvas::{DrawCommand, PageRecording, Paint};
use crate::colour::Colour;
use crate::font::{encode_winansi, BuiltinFont, FontHandle};
use crate::fontset::FontSet;
use crate::rect::Rect;
use crate::units::Pt;
use std::io::Write;

// control point offset for approximating a quarter circle with a cubic bezier
const KAPPA: f32 = 0.552_284_8;

/// The name a font is registered under in each page's resource dictionary
pub(crate) fn resource_name(font: FontHandle) -> String {
    match font {
        FontHandle::Embedded(id) => format!("F{}", id.index()),
        FontHandle::Builtin(BuiltinFont::Helvetica) => "Helv".to_string(),
        FontHandle::Builtin(BuiltinFont::HelveticaBold) => "HelvB".to_string(),
        FontHandle::Builtin(BuiltinFont::Courier) => "Cour".to_string(),
    }
}

/// Renders a page's drawing commands to PDF content stream operators.
///
/// Layout coordinates grow downwards from the top of the page; PDF user space grows
/// upwards from the bottom, so every y is flipped against the page height. Each
/// primitive is wrapped in its own `q`/`Q` pair so no graphics state leaks between them.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_page(
    page: &PageRecording,
    fonts: &FontSet,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    let flip = |y: Pt| page.height - y;

    for command in page.commands.iter() {
        write!(&mut content, "q\n")?;
        match command {
            DrawCommand::Rect {
                rect,
                paint,
                corner_radius,
            } => {
                match paint {
                    Paint::Fill(colour) => write_fill_colour(&mut content, *colour)?,
                    Paint::Stroke { colour, width } => {
                        write_stroke_colour(&mut content, *colour)?;
                        write!(&mut content, "{} w\n", width.0)?;
                    }
                }
                let flipped = Rect {
                    x1: rect.x1,
                    y1: flip(rect.y2),
                    x2: rect.x2,
                    y2: flip(rect.y1),
                };
                write_rect_path(&mut content, flipped, *corner_radius)?;
                match paint {
                    Paint::Fill(_) => write!(&mut content, "f\n")?,
                    Paint::Stroke { .. } => write!(&mut content, "S\n")?,
                }
            }
            DrawCommand::Line {
                from,
                to,
                colour,
                width,
            } => {
                write_stroke_colour(&mut content, *colour)?;
                write!(&mut content, "{} w\n", width.0)?;
                write!(&mut content, "{} {} m\n", from.0 .0, flip(from.1).0)?;
                write!(&mut content, "{} {} l\n", to.0 .0, flip(to.1).0)?;
                write!(&mut content, "S\n")?;
            }
            DrawCommand::Text {
                text,
                origin,
                font,
                size,
                colour,
            } => {
                write_fill_colour(&mut content, *colour)?;
                write!(&mut content, "BT\n")?;
                write!(&mut content, "/{} {} Tf\n", resource_name(*font), size.0)?;
                write!(&mut content, "{} {} Td\n", origin.0 .0, flip(origin.1).0)?;
                write!(&mut content, "<")?;
                for byte in encode_text(text, *font, fonts) {
                    write!(&mut content, "{byte:02x}")?;
                }
                write!(&mut content, "> Tj\n")?;
                write!(&mut content, "ET\n")?;
            }
        }
        write!(&mut content, "Q\n")?;
    }

    Ok(content)
}

fn encode_text(text: &str, font: FontHandle, fonts: &FontSet) -> Vec<u8> {
    match font {
        FontHandle::Embedded(id) => match fonts.get(id) {
            Some(face) => {
                if let Some(missing) = text
                    .chars()
                    .find(|ch| !ch.is_whitespace() && face.glyph_id(*ch).is_none())
                {
                    log::warn!("font F{} has no glyph for {missing:?} in {text:?}", id.index());
                }
                face.encode(text)
            }
            None => {
                log::warn!(
                    "font F{} is not part of the document, drawing {text:?} with Helvetica",
                    id.index()
                );
                encode_winansi(text)
            }
        },
        FontHandle::Builtin(builtin) => {
            let bytes = encode_winansi(text);
            let replaced = bytes.iter().filter(|b| **b == b'?').count();
            if replaced > text.matches('?').count() {
                log::warn!(
                    "{} cannot encode every character of {text:?}, replacing them with '?'",
                    builtin.base_font()
                );
            }
            bytes
        }
    }
}

#[allow(clippy::write_with_newline)]
fn write_rect_path(content: &mut Vec<u8>, rect: Rect, radius: Pt) -> Result<(), std::io::Error> {
    let (x0, y0, x1, y1) = (rect.x1.0, rect.y1.0, rect.x2.0, rect.y2.0);
    let r = radius.0.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
    if r <= 0.0 {
        return write!(content, "{} {} {} {} re\n", x0, y0, x1 - x0, y1 - y0);
    }

    let k = r * KAPPA;
    write!(content, "{} {} m\n", x0 + r, y0)?;
    write!(content, "{} {} l\n", x1 - r, y0)?;
    write!(content, "{} {} {} {} {} {} c\n", x1 - r + k, y0, x1, y0 + r - k, x1, y0 + r)?;
    write!(content, "{} {} l\n", x1, y1 - r)?;
    write!(content, "{} {} {} {} {} {} c\n", x1, y1 - r + k, x1 - r + k, y1, x1 - r, y1)?;
    write!(content, "{} {} l\n", x0 + r, y1)?;
    write!(content, "{} {} {} {} {} {} c\n", x0 + r - k, y1, x0, y1 - r + k, x0, y1 - r)?;
    write!(content, "{} {} l\n", x0, y0 + r)?;
    write!(content, "{} {} {} {} {} {} c\n", x0, y0 + r - k, x0 + r - k, y0, x0 + r, y0)?;
    write!(content, "h\n")
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} k\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[allow(clippy::write_with_newline)]
fn write_stroke_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n"),
        Colour::CMYK { c, m, y, k } => write!(content, "{c} {m} {y} {k} K\n"),
        Colour::Grey { g } => write!(content, "{g} G\n"),
    }
}
