use crate::canvas::{DrawCommand, PageRecording};
use crate::content::{render_page, resource_name};
use crate::font::{BuiltinFont, FontHandle};
use crate::fontset::FontSet;
use crate::info::Info;
use crate::refs::{ObjectReferences, RefType};
use crate::ReportError;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Rect, Ref};
use std::collections::BTreeSet;
use std::io::Write;

/// Serialize recorded pages into a PDF and write it to `w`.
///
/// The entire document is assembled in memory before anything is written.
pub(crate) fn write_pdf<W: Write>(
    pages: &[PageRecording],
    fonts: &FontSet,
    info: &Info,
    mut w: W,
) -> Result<(), ReportError> {
    let mut refs = ObjectReferences::new();

    let catalog_id = refs.gen(RefType::Catalog);
    let page_tree_id = refs.gen(RefType::PageTree);

    let mut writer = Pdf::new();
    info.write(&mut refs, &mut writer);

    let page_refs: Vec<Ref> = (0..pages.len())
        .map(|i| refs.gen(RefType::Page(i)))
        .collect();
    writer
        .pages(page_tree_id)
        .count(page_refs.len() as i32)
        .kids(page_refs.iter().copied());

    for (id, font) in fonts.fonts.iter() {
        font.write(&mut refs, id, &mut writer);
    }

    // standard fonts are only written when something is drawn with them
    let builtins: BTreeSet<BuiltinFont> = pages
        .iter()
        .flat_map(|page| page.commands.iter())
        .filter_map(|command| match command {
            DrawCommand::Text {
                font: FontHandle::Builtin(builtin),
                ..
            } => Some(*builtin),
            _ => None,
        })
        .collect();
    for builtin in builtins.iter() {
        let id = refs.gen(RefType::BuiltinFont(*builtin));
        writer
            .type1_font(id)
            .base_font(Name(builtin.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }

    let font_resources: Vec<(String, Ref)> = fonts
        .fonts
        .iter()
        .filter_map(|(id, _)| {
            refs.get(RefType::Font(id.index()))
                .map(|r| (resource_name(FontHandle::Embedded(id)), r))
        })
        .chain(builtins.iter().filter_map(|builtin| {
            refs.get(RefType::BuiltinFont(*builtin))
                .map(|r| (resource_name(FontHandle::Builtin(*builtin)), r))
        }))
        .collect();

    for (page_index, (page, page_id)) in pages.iter().zip(page_refs.iter()).enumerate() {
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut pdf_page = writer.page(*page_id);
        pdf_page.media_box(Rect::new(0.0, 0.0, page.width.0, page.height.0));
        pdf_page.parent(page_tree_id);

        let mut resources = pdf_page.resources();
        let mut resource_fonts = resources.fonts();
        for (name, font_ref) in font_resources.iter() {
            resource_fonts.pair(Name(name.as_bytes()), *font_ref);
        }
        resource_fonts.finish();
        resources.finish();

        pdf_page.contents(content_id);
        pdf_page.finish();

        let rendered = render_page(page, fonts)?;
        let compressed = compress_to_vec_zlib(&rendered, CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);
    }

    let mut catalog = writer.catalog(catalog_id);
    catalog.pages(page_tree_id);
    catalog.finish();

    w.write_all(writer.finish().as_slice()).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, Recorder};
    use crate::colour::colours;
    use crate::units::Pt;

    #[test]
    fn writes_a_page_per_recording() {
        let mut canvas = Recorder::new();
        for _ in 0..3 {
            canvas.begin_page(Pt(595.0), Pt(842.0));
            canvas.draw_text(
                "Hello",
                (Pt(48.0), Pt(60.0)),
                FontHandle::Builtin(BuiltinFont::Courier),
                Pt(12.0),
                colours::BLACK,
            );
        }

        let mut bytes: Vec<u8> = Vec::new();
        write_pdf(canvas.pages(), &FontSet::builtin(), &Info::default(), &mut bytes).unwrap();
        let pdf = String::from_utf8_lossy(&bytes);

        assert!(pdf.starts_with("%PDF-1.7"));
        assert!(pdf.contains("/Count 3"));
        assert!(pdf.contains("/BaseFont /Courier"));
        assert!(pdf.contains("/Encoding /WinAnsiEncoding"));
        // only fonts that were used are written
        assert!(!pdf.contains("/Helvetica"));
        assert!(pdf.contains("/Cour "));
    }
}
