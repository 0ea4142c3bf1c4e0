//! The renderable units of a document.
//!
//! Every element knows how tall it will be ([Element::required_height], which never
//! touches the cursor or the canvas) and how to draw itself at the cursor
//! ([Element::render]), breaking pages through the [RenderContext] as it goes.

mod info_header;
mod line;
mod list;
mod paragraph;
mod section;
mod spacer;
mod table;

pub use info_header::*;
pub use line::*;
pub use list::*;
pub use paragraph::*;
pub use section::*;
pub use spacer::*;
pub use table::*;

use crate::context::RenderContext;
use crate::units::Pt;
use derive_more::From;

/// One unit of document content
#[derive(Debug, Clone, PartialEq, From)]
pub enum Element {
    Section(Section),
    Paragraph(Paragraph),
    List(List),
    Table(Table),
    Line(Line),
    Spacer(Spacer),
    InfoHeader(InfoHeader),
}

impl Element {
    /// Vertical space the element needs when rendered in `ctx`
    pub fn required_height(&self, ctx: &RenderContext) -> Pt {
        match self {
            Element::Section(section) => section.required_height(),
            Element::Paragraph(paragraph) => paragraph.required_height(ctx),
            Element::List(list) => list.required_height(),
            Element::Table(table) => table.required_height(),
            Element::Line(line) => line.required_height(),
            Element::Spacer(spacer) => spacer.required_height(),
            Element::InfoHeader(info) => info.required_height(),
        }
    }

    /// Draw the element at the cursor and move the cursor past it
    pub fn render(&self, ctx: &mut RenderContext) {
        match self {
            Element::Section(section) => section.render(ctx),
            Element::Paragraph(paragraph) => paragraph.render(ctx),
            Element::List(list) => list.render(ctx),
            Element::Table(table) => table.render(ctx),
            Element::Line(line) => line.render(ctx),
            Element::Spacer(spacer) => spacer.render(ctx),
            Element::InfoHeader(info) => info.render(ctx),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::with_context;
    use super::*;

    #[test]
    fn dispatches_heights() {
        let elements: Vec<Element> = vec![
            Section::new("Heading").into(),
            Section::new("Heading").pill(true).into(),
            Line::default().into(),
            Spacer::new(Pt(30.0)).into(),
            List::new(["a", "b", "c"]).into(),
        ];
        let (heights, _) = with_context(|ctx| {
            elements
                .iter()
                .map(|element| element.required_height(ctx))
                .collect::<Vec<_>>()
        });
        assert_eq!(
            heights,
            vec![Pt(24.0), Pt(48.0), Pt(8.0), Pt(30.0), Pt(72.0)]
        );
    }

    #[test]
    fn rendering_advances_by_the_required_height() {
        let element: Element = Table::new(["A", "B"], [["1", "2"]]).into();
        let (moved, _) = with_context(|ctx| {
            let before = ctx.cursor_y();
            let height = element.required_height(ctx);
            element.render(ctx);
            (ctx.cursor_y() - before, height)
        });
        assert_eq!(moved.0, moved.1);
    }
}
