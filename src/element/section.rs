use crate::context::RenderContext;
use crate::fontset::FontRole;
use crate::rect::Rect;
use crate::style::{self, typography};
use crate::units::Pt;

const PILL_SECTION_HEIGHT: Pt = Pt(48.0);
const PLAIN_SECTION_HEIGHT: Pt = Pt(24.0);
// horizontal inset of text inside the pill
const PILL_INSET: Pt = Pt(24.0);
const PILL_TINT: f32 = 0.07;

/// A "label value" pair drawn right-aligned on a section heading, e.g. `Total: $1,234`
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub label: String,
    pub value: String,
}

/// A section heading, either plain text or a rounded "pill" banner
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub text: String,
    pub pill: bool,
    /// Font size of plain headings; pill headings always use [typography::HEADING3]
    pub font_size: Pt,
    /// Section number, rendered as `"{number}. {text}"`
    pub number: Option<usize>,
    pub summary: Option<Summary>,
}

impl Section {
    pub fn new<S: Into<String>>(text: S) -> Section {
        Section {
            text: text.into(),
            pill: false,
            font_size: typography::HEADING2,
            number: None,
            summary: None,
        }
    }

    pub fn pill(mut self, pill: bool) -> Section {
        self.pill = pill;
        self
    }

    pub fn numbered(mut self, number: usize) -> Section {
        self.number = Some(number);
        self
    }

    pub fn font_size(mut self, size: Pt) -> Section {
        self.font_size = size;
        self
    }

    pub fn summary<L: Into<String>, V: Into<String>>(mut self, label: L, value: V) -> Section {
        self.summary = Some(Summary {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// The heading as drawn, including the section number
    pub fn display_text(&self) -> String {
        match self.number {
            Some(number) => format!("{number}. {}", self.text),
            None => self.text.clone(),
        }
    }

    pub fn required_height(&self) -> Pt {
        if self.pill {
            PILL_SECTION_HEIGHT
        } else {
            PLAIN_SECTION_HEIGHT
        }
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        ctx.ensure_space(self.required_height());

        let text = self.display_text();
        let font = ctx.font(FontRole::Medium);
        let left = ctx.page_margin();
        let top = ctx.cursor_y();

        if self.pill {
            let colours = ctx.colours();
            let band = Rect::from_xywh(left, top, ctx.available_width(), style::PILL_HEIGHT);
            ctx.fill_rect(band, colours.primary().tint(PILL_TINT), style::PILL_RADIUS);
            ctx.draw_text(
                &text,
                (left + PILL_INSET, top + Pt(20.0)),
                font,
                typography::HEADING3,
                colours.primary(),
            );
            self.render_summary(ctx, top + Pt(20.0), PILL_INSET);
        } else {
            let colour = ctx.colours().text_primary();
            ctx.draw_text(&text, (left, top + self.font_size), font, self.font_size, colour);
            self.render_summary(ctx, top + self.font_size, Pt::ZERO);
        }

        ctx.advance(self.required_height());
    }

    fn render_summary(&self, ctx: &mut RenderContext, baseline: Pt, inset: Pt) {
        let Some(summary) = &self.summary else {
            return;
        };

        let font = ctx.font(FontRole::Bold);
        let size = typography::BODY;
        let colours = ctx.colours();
        let right = ctx.page_margin() + ctx.available_width() - inset;

        let value_x = right - ctx.measure_text(&summary.value, font, size);
        ctx.draw_text(&summary.value, (value_x, baseline), font, size, colours.text_primary());

        let label = format!("{} ", summary.label);
        let label_x = value_x - ctx.measure_text(&label, font, size);
        ctx.draw_text(&label, (label_x, baseline), font, size, colours.text_secondary());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, Paint};
    use crate::colour::Colour;
    use crate::element::testing::with_context;

    #[test]
    fn height_ignores_text() {
        assert_eq!(Section::new("").required_height(), Pt(24.0));
        assert_eq!(
            Section::new(lipsum::lipsum(200)).required_height(),
            Pt(24.0)
        );
        assert_eq!(Section::new("x").pill(true).required_height(), Pt(48.0));
    }

    #[test]
    fn numbered_sections_prefix_their_number() {
        assert_eq!(Section::new("Scope").numbered(3).display_text(), "3. Scope");
        assert_eq!(Section::new("Scope").display_text(), "Scope");
    }

    #[test]
    fn pill_draws_a_tinted_rounded_band() {
        let (_, pages) = with_context(|ctx| Section::new("Results").pill(true).render(ctx));
        let band = pages[0]
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Rect {
                    rect,
                    paint: Paint::Fill(colour),
                    corner_radius,
                } => Some((*rect, *colour, *corner_radius)),
                _ => None,
            })
            .expect("pill band");

        let (rect, colour, radius) = band;
        assert_eq!(rect, Rect::from_xywh(Pt(48.0), Pt(48.0), Pt(499.0), Pt(32.0)));
        assert_eq!(radius, Pt(16.0));
        let Colour::RGB { r, g, b } = colour else {
            panic!("expected an RGB tint, got {colour:?}");
        };
        // #FFF5F2
        assert_eq!(r, 1.0);
        assert!((g * 255.0 - 245.0).abs() < 1.0);
        assert!((b * 255.0 - 242.0).abs() < 1.5);
        assert_eq!(pages[0].count_text("Results"), 1);
    }

    #[test]
    fn summary_is_right_aligned() {
        let section = Section::new("Invoices").summary("Total:", "$1,234");
        let (cursor, pages) = with_context(|ctx| {
            section.render(ctx);
            ctx.cursor_y()
        });
        assert_eq!(cursor, Pt(72.0));

        let value = pages[0]
            .commands
            .iter()
            .find_map(|command| match command {
                DrawCommand::Text { text, origin, size, .. } if text == "$1,234" => Some(
                    origin.0 + crate::BuiltinFont::HelveticaBold.width_of_text(text, *size),
                ),
                _ => None,
            })
            .expect("summary value");
        assert!((value.0 - 547.0).abs() < 0.01);
        assert_eq!(pages[0].count_text("Total: "), 1);
    }
}
