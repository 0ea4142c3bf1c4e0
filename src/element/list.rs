use crate::context::RenderContext;
use crate::fontset::FontRole;
use crate::rect::Rect;
use crate::style::{self, typography};
use crate::units::Pt;

// gap between the row's left edge and the prefix
const TEXT_INSET: Pt = Pt(8.0);

/// A bulleted, numbered or custom-prefixed list, one item per row
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub items: Vec<String>,
    pub numbered: bool,
    /// Drawn before every item instead of a bullet or number
    pub custom_prefix: Option<String>,
    pub with_margin: bool,
    /// Indent applied when `with_margin` is set
    pub left_margin: Pt,
    /// Shade every other row, starting with the first
    pub alternate_rows: bool,
    pub monospace: bool,
    /// Number items as `"{base}.{i}"`, as in an outline
    pub outline_base: Option<u32>,
}

impl List {
    pub fn new<I>(items: I) -> List
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        List {
            items: items.into_iter().map(Into::into).collect(),
            numbered: false,
            custom_prefix: None,
            with_margin: false,
            left_margin: style::LIST_INDENT,
            alternate_rows: false,
            monospace: false,
            outline_base: None,
        }
    }

    pub fn numbered(mut self) -> List {
        self.numbered = true;
        self
    }

    pub fn prefix<S: Into<String>>(mut self, prefix: S) -> List {
        self.custom_prefix = Some(prefix.into());
        self
    }

    pub fn indented(mut self) -> List {
        self.with_margin = true;
        self
    }

    pub fn alternate_rows(mut self) -> List {
        self.alternate_rows = true;
        self
    }

    pub fn monospace(mut self) -> List {
        self.monospace = true;
        self
    }

    pub fn outline(mut self, base: u32) -> List {
        self.outline_base = Some(base);
        self
    }

    /// The prefix drawn before the item at `index` (0-based)
    pub fn prefix_for(&self, index: usize) -> String {
        if let Some(prefix) = &self.custom_prefix {
            return prefix.clone();
        }
        match self.outline_base {
            Some(base) => format!("{base}.{} ", index + 1),
            None if self.numbered => format!("{}. ", index + 1),
            None => "• ".to_string(),
        }
    }

    pub fn required_height(&self) -> Pt {
        style::LIST_ROW_HEIGHT * self.items.len() as f32
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        let indent = if self.with_margin {
            self.left_margin
        } else {
            Pt::ZERO
        };
        let left = ctx.page_margin() + indent;
        let width = ctx.available_width() - indent;

        let colours = ctx.colours();
        let (font, colour) = if self.monospace {
            (ctx.font(FontRole::Monospace), colours.text_primary())
        } else {
            (ctx.font(FontRole::Regular), colours.text_secondary())
        };
        let row_height = style::LIST_ROW_HEIGHT;

        for (index, item) in self.items.iter().enumerate() {
            ctx.ensure_space(row_height);
            let top = ctx.cursor_y();

            if self.alternate_rows && index % 2 == 0 {
                let row = Rect::from_xywh(left, top, width, row_height);
                ctx.fill_rect(row, colours.background_alt(), Pt::ZERO);
            }

            let text = format!("{}{item}", self.prefix_for(index));
            ctx.draw_text(
                &text,
                (left + TEXT_INSET, top + Pt(16.0)),
                font,
                typography::BODY,
                colour,
            );
            ctx.advance(row_height);
        }
    }
}

impl<S: Into<String>> From<Vec<S>> for List {
    fn from(items: Vec<S>) -> Self {
        List::new(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::DrawCommand;
    use crate::element::testing::with_context;
    use crate::font::{BuiltinFont, FontHandle};

    #[test]
    fn prefixes() {
        let bullets = List::new(["a", "b"]);
        assert_eq!(bullets.prefix_for(0), "• ");

        let numbered = List::new(["a", "b"]).numbered();
        assert_eq!(numbered.prefix_for(1), "2. ");

        let outline = List::new(["a", "b"]).numbered().outline(3);
        assert_eq!(outline.prefix_for(0), "3.1 ");

        let custom = List::new(["a"]).numbered().prefix("> ");
        assert_eq!(custom.prefix_for(0), "> ");
    }

    #[test]
    fn height_is_rows_times_row_height() {
        assert_eq!(List::new(["a", "b", "c"]).required_height(), Pt(72.0));
        assert_eq!(List::new(Vec::<String>::new()).required_height(), Pt::ZERO);
    }

    #[test]
    fn alternate_rows_shade_even_indices() {
        let list = List::new(["one", "two", "three"]).alternate_rows().indented();
        let (_, pages) = with_context(|ctx| list.render(ctx));
        let shaded: Vec<Rect> = pages[0]
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect { rect, .. } => Some(*rect),
                _ => None,
            })
            .collect();
        assert_eq!(
            shaded,
            vec![
                Rect::from_xywh(Pt(72.0), Pt(48.0), Pt(475.0), Pt(24.0)),
                Rect::from_xywh(Pt(72.0), Pt(96.0), Pt(475.0), Pt(24.0)),
            ]
        );
        assert_eq!(pages[0].count_text("• two"), 1);
    }

    #[test]
    fn monospace_lists_use_the_monospace_font() {
        let list = List::new(["$ cargo doc"]).monospace();
        let (_, pages) = with_context(|ctx| list.render(ctx));
        let font = pages[0].commands.iter().find_map(|command| match command {
            DrawCommand::Text { text, font, .. } if text == "• $ cargo doc" => Some(*font),
            _ => None,
        });
        assert_eq!(font, Some(FontHandle::Builtin(BuiltinFont::Courier)));
    }

    #[test]
    fn long_lists_break_between_rows() {
        let items: Vec<String> = (1..=60).map(|i| format!("item {i}")).collect();
        let list = List::new(items).numbered();
        let (_, pages) = with_context(|ctx| list.render(ctx));
        // (746 - 48) / 24 = 29 rows per page
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].count_text("29. item 29"), 1);
        assert_eq!(pages[1].count_text("30. item 30"), 1);
    }
}
