use crate::colour::{colours, Colour};
use crate::context::RenderContext;
use crate::fontset::FontRole;
use crate::rect::Rect;
use crate::style::{self, typography};
use crate::theme::ColourProvider;
use crate::units::Pt;

const SEPARATOR_WIDTH: Pt = Pt(0.5);
const SEPARATOR_TINT: f32 = 0.5;
const MINIMAL_RULE_WIDTH: Pt = Pt(2.0);

/// How a table's header band is painted
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum TableHeaderStyle {
    /// Neutral light grey band with dark text
    #[default]
    Light,
    /// Near-black band with white text
    Dark,
    /// Rounded band in the theme's primary colour
    Primary,
    /// Rounded band in the theme's secondary colour
    Secondary,
    /// No band, only a rule under the header text
    Minimal,
}

impl TableHeaderStyle {
    pub const ALL: [TableHeaderStyle; 5] = [
        TableHeaderStyle::Light,
        TableHeaderStyle::Dark,
        TableHeaderStyle::Primary,
        TableHeaderStyle::Secondary,
        TableHeaderStyle::Minimal,
    ];

    pub fn fill(self, theme: &dyn ColourProvider) -> Option<Colour> {
        match self {
            TableHeaderStyle::Light => Some(Colour::hex(0xF5F5F5)),
            TableHeaderStyle::Dark => Some(Colour::hex(0x2C2C2C)),
            TableHeaderStyle::Primary => Some(theme.primary()),
            TableHeaderStyle::Secondary => Some(theme.secondary()),
            TableHeaderStyle::Minimal => None,
        }
    }

    pub fn text_colour(self, theme: &dyn ColourProvider) -> Colour {
        match self {
            TableHeaderStyle::Light | TableHeaderStyle::Minimal => theme.text_primary(),
            TableHeaderStyle::Dark | TableHeaderStyle::Primary | TableHeaderStyle::Secondary => {
                colours::WHITE
            }
        }
    }

    pub fn corner_radius(self) -> Pt {
        match self {
            TableHeaderStyle::Primary | TableHeaderStyle::Secondary => style::CARD_RADIUS,
            _ => Pt::ZERO,
        }
    }
}

/// A grid of text cells with an optional header band. Columns share the table width
/// equally.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    /// Rows shorter than the column count leave blank cells; extra cells are ignored
    pub rows: Vec<Vec<String>>,
    pub header_style: TableHeaderStyle,
    /// Shade odd rows with the theme's alternate background
    pub alternate_rows: bool,
    pub left_margin: Pt,
    pub right_margin: Pt,
    /// Redraw the header band at the top of each page the table continues onto
    pub repeat_header_on_break: bool,
    pub show_headers: bool,
}

/// Horizontal placement of a table's columns, fixed for the whole table
#[derive(Debug, Copy, Clone, PartialEq)]
struct Columns {
    left: Pt,
    width: Pt,
    count: usize,
}

impl Columns {
    fn column_width(&self) -> Pt {
        self.width / self.count as f32
    }

    fn column_left(&self, column: usize) -> Pt {
        self.left + self.column_width() * column as f32
    }
}

impl Table {
    pub fn new<H, R, C>(headers: H, rows: R) -> Table
    where
        H: IntoIterator,
        H::Item: Into<String>,
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Table {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
            header_style: TableHeaderStyle::default(),
            alternate_rows: true,
            left_margin: Pt::ZERO,
            right_margin: Pt::ZERO,
            repeat_header_on_break: false,
            show_headers: true,
        }
    }

    pub fn header_style(mut self, style: TableHeaderStyle) -> Table {
        self.header_style = style;
        self
    }

    pub fn alternate_rows(mut self, alternate: bool) -> Table {
        self.alternate_rows = alternate;
        self
    }

    pub fn margins(mut self, left: Pt, right: Pt) -> Table {
        self.left_margin = left;
        self.right_margin = right;
        self
    }

    pub fn repeat_header_on_break(mut self, repeat: bool) -> Table {
        self.repeat_header_on_break = repeat;
        self
    }

    pub fn show_headers(mut self, show: bool) -> Table {
        self.show_headers = show;
        self
    }

    /// Whether the header band is drawn: it must be enabled and have a non-blank first
    /// header
    pub fn headers_shown(&self) -> bool {
        self.show_headers
            && self
                .headers
                .first()
                .is_some_and(|header| !header.trim().is_empty())
    }

    /// Number of columns: one per header, or the widest row for a header-less table
    pub fn column_count(&self) -> usize {
        if self.headers.is_empty() {
            self.rows.iter().map(Vec::len).max().unwrap_or(0).max(1)
        } else {
            self.headers.len()
        }
    }

    pub fn required_height(&self) -> Pt {
        let header = if self.headers_shown() {
            style::TABLE_HEADER_HEIGHT
        } else {
            Pt::ZERO
        };
        header + style::TABLE_ROW_HEIGHT * self.rows.len() as f32 + style::TABLE_BOTTOM_SPACING
    }

    fn columns(&self, ctx: &RenderContext) -> Columns {
        Columns {
            left: ctx.page_margin() + self.left_margin,
            width: ctx.available_width() - self.left_margin - self.right_margin,
            count: self.column_count(),
        }
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        let columns = self.columns(ctx);
        let shown = self.headers_shown();
        let row_height = style::TABLE_ROW_HEIGHT;

        if shown {
            // never leave a header alone at the bottom of a page
            let first_row = if self.rows.is_empty() {
                Pt::ZERO
            } else {
                row_height
            };
            ctx.ensure_space(style::TABLE_HEADER_HEIGHT + first_row);
            self.render_header(ctx, &columns);
        }

        for (index, row) in self.rows.iter().enumerate() {
            if !ctx.fits(row_height) {
                let page = ctx.current_page();
                ctx.ensure_space(row_height);
                if ctx.current_page() > page && self.repeat_header_on_break && shown {
                    log::debug!("repeating table header on page {}", ctx.current_page());
                    self.render_header(ctx, &columns);
                }
            }
            self.render_row(ctx, &columns, index, row);
        }

        ctx.advance(style::TABLE_BOTTOM_SPACING);
    }

    fn render_header(&self, ctx: &mut RenderContext, columns: &Columns) {
        let colours = ctx.colours();
        let font = ctx.font(FontRole::Medium);
        let text_colour = self.header_style.text_colour(colours);
        let top = ctx.cursor_y();
        let height = style::TABLE_HEADER_HEIGHT;

        let baseline = match self.header_style.fill(colours) {
            Some(fill) => {
                let band = Rect::from_xywh(columns.left, top, columns.width, height);
                ctx.fill_rect(band, fill, self.header_style.corner_radius());
                top + Pt(24.0)
            }
            None => {
                let rule_y = top + height - Pt(4.0);
                ctx.stroke_line(
                    (columns.left, rule_y),
                    (columns.left + columns.width, rule_y),
                    colours.border(),
                    MINIMAL_RULE_WIDTH,
                );
                top + Pt(16.0)
            }
        };

        for (column, header) in self.headers.iter().enumerate() {
            let x = columns.column_left(column) + style::TABLE_CELL_PADDING;
            ctx.draw_text(header, (x, baseline), font, typography::BODY, text_colour);
        }

        ctx.advance(height);
    }

    fn render_row(&self, ctx: &mut RenderContext, columns: &Columns, index: usize, row: &[String]) {
        let colours = ctx.colours();
        let font = ctx.font(FontRole::Regular);
        let top = ctx.cursor_y();
        let height = style::TABLE_ROW_HEIGHT;

        let background = if self.alternate_rows && index % 2 == 1 {
            colours.background_alt()
        } else {
            colours.background()
        };
        let band = Rect::from_xywh(columns.left, top, columns.width, height);
        ctx.fill_rect(band, background, Pt::ZERO);

        let separator = colours.border().tint(SEPARATOR_TINT);
        for column in 0..columns.count {
            if let Some(cell) = row.get(column) {
                let x = columns.column_left(column) + style::TABLE_CELL_PADDING;
                ctx.draw_text(
                    cell,
                    (x, top + Pt(20.0)),
                    font,
                    typography::BODY,
                    colours.text_secondary(),
                );
            }
            if column + 1 < columns.count {
                let x = columns.column_left(column + 1);
                ctx.stroke_line((x, top), (x, top + height), separator, SEPARATOR_WIDTH);
            }
        }

        ctx.advance(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, PageRecording, Paint};
    use crate::element::testing::with_context;
    use crate::theme::Theme;

    fn rows(count: usize) -> Vec<Vec<String>> {
        (1..=count)
            .map(|i| vec![format!("item {i}"), format!("{}", i * 10)])
            .collect()
    }

    fn row_rects(page: &PageRecording) -> Vec<Rect> {
        page.commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect { rect, .. } if rect.height() == Pt(32.0) => Some(*rect),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn heights() {
        let table = Table::new(["Name", "Qty"], rows(2));
        assert_eq!(table.required_height(), Pt(112.0));

        let hidden = Table::new(["Name", "Qty"], rows(1)).show_headers(false);
        assert_eq!(hidden.required_height(), Pt(40.0));

        let empty = Table::new(["Name", "Qty"], Vec::<Vec<String>>::new());
        assert_eq!(empty.required_height(), Pt(48.0));

        let blank_header = Table::new([""], rows(1));
        assert!(!blank_header.headers_shown());
        assert_eq!(blank_header.required_height(), Pt(40.0));
    }

    #[test]
    fn header_styles() {
        let theme = Theme::default();
        assert_eq!(
            TableHeaderStyle::Light.fill(&theme),
            Some(Colour::hex(0xF5F5F5))
        );
        assert_eq!(TableHeaderStyle::Light.text_colour(&theme), theme.text_primary);
        assert_eq!(TableHeaderStyle::Dark.text_colour(&theme), colours::WHITE);
        assert_eq!(TableHeaderStyle::Primary.fill(&theme), Some(theme.primary));
        assert_eq!(TableHeaderStyle::Secondary.corner_radius(), Pt(8.0));
        assert_eq!(TableHeaderStyle::Minimal.fill(&theme), None);
        assert_eq!(TableHeaderStyle::Dark.corner_radius(), Pt::ZERO);
    }

    #[test]
    fn every_header_style_draws_its_labels() {
        let theme = Theme::default();
        for header_style in TableHeaderStyle::ALL {
            let table = Table::new(["Name", "Qty"], [["a", "1"]]).header_style(header_style);
            let (_, pages) = with_context(|ctx| table.render(ctx));

            assert_eq!(pages[0].count_text("Name"), 1, "{header_style:?}");
            let banded = pages[0].commands.iter().any(|command| {
                matches!(command, DrawCommand::Rect { rect, .. }
                    if rect.height() == style::TABLE_HEADER_HEIGHT)
            });
            assert_eq!(banded, header_style.fill(&theme).is_some(), "{header_style:?}");
        }
    }

    #[test]
    fn columns_share_the_width() {
        let table = Table::new(["A", "B", "C", "D"], [["1", "2", "3", "4"]])
            .margins(Pt(19.0), Pt(80.0));
        let (_, pages) = with_context(|ctx| table.render(ctx));
        let xs: Vec<Pt> = pages[0]
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Text { text, origin, .. } if text.len() == 1 => Some(origin.0),
                _ => None,
            })
            .collect();
        // headers then cells, each at column left + 12 with 100pt columns from x = 67
        let expected: Vec<Pt> = [79.0, 179.0, 279.0, 379.0]
            .into_iter()
            .cycle()
            .take(8)
            .map(Pt)
            .collect();
        assert_eq!(xs, expected);
    }

    #[test]
    fn short_rows_leave_blanks_and_long_rows_are_cut() {
        let table = Table::new(["A", "B", "C"], [vec!["only"], vec!["x", "y", "z", "extra"]]);
        let (_, pages) = with_context(|ctx| table.render(ctx));
        let page = &pages[0];
        assert_eq!(page.count_text("only"), 1);
        assert_eq!(page.count_text("z"), 1);
        assert_eq!(page.count_text("extra"), 0);

        // two separators per row, none after the last column
        let separators = page
            .commands
            .iter()
            .filter(|command| {
                matches!(command, DrawCommand::Line { width, .. } if *width == Pt(0.5))
            })
            .count();
        // plus the footer rule
        assert_eq!(separators, 2 * 2 + 1);
    }

    #[test]
    fn alternate_rows_shade_odd_indices() {
        let theme = Theme::default();
        let table = Table::new(["Name", "Qty"], rows(3));
        let (_, pages) = with_context(|ctx| table.render(ctx));
        let fills: Vec<Colour> = pages[0]
            .commands
            .iter()
            .filter_map(|command| match command {
                DrawCommand::Rect {
                    rect,
                    paint: Paint::Fill(colour),
                    ..
                } if rect.height() == Pt(32.0) => Some(*colour),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![theme.background, theme.background_alt, theme.background]
        );
    }

    #[test]
    fn minimal_header_draws_a_rule_instead_of_a_band() {
        let table = Table::new(["Name"], rows(1)).header_style(TableHeaderStyle::Minimal);
        let (_, pages) = with_context(|ctx| table.render(ctx));
        let page = &pages[0];
        assert!(!page.commands.iter().any(
            |command| matches!(command, DrawCommand::Rect { rect, .. } if rect.height() == Pt(40.0))
        ));
        assert!(page.commands.iter().any(|command| matches!(
            command,
            DrawCommand::Line { from, width, .. } if *width == Pt(2.0) && from.1 == Pt(84.0)
        )));
    }

    #[test]
    fn repeats_header_once_per_page() {
        let table = Table::new(["Name", "Qty"], rows(50)).repeat_header_on_break(true);
        let (_, pages) = with_context(|ctx| table.render(ctx));
        // 20 rows fit under the header on each A4 page
        assert_eq!(pages.len(), 3);
        for page in &pages {
            assert_eq!(page.count_text("Qty"), 1);
        }
        assert_eq!(pages[1].count_text("item 21"), 1);
    }

    #[test]
    fn header_is_not_repeated_when_disabled() {
        let table = Table::new(["Name", "Qty"], rows(50));
        let (_, pages) = with_context(|ctx| table.render(ctx));
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].count_text("Qty"), 1);
        assert_eq!(pages[1].count_text("Qty"), 0);
        assert_eq!(pages[2].count_text("Qty"), 0);
        // without a header the continuation page holds more rows
        assert_eq!(row_rects(&pages[1]).len(), 21);
    }

    #[test]
    fn rows_never_cross_the_footer() {
        let table = Table::new(["Name", "Qty"], rows(75)).repeat_header_on_break(true);
        let (_, pages) = with_context(|ctx| {
            ctx.advance(Pt(300.0));
            table.render(ctx)
        });
        for page in &pages {
            for rect in row_rects(page) {
                assert!(rect.y2 <= Pt(746.0), "row ends at {}", rect.y2);
            }
        }
        let total: usize = pages.iter().map(|page| row_rects(page).len()).sum();
        assert_eq!(total, 75);
    }
}
