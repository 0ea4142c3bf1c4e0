use crate::context::RenderContext;
use crate::fontset::FontRole;
use crate::style::typography;
use crate::units::Pt;
use chrono::NaiveDate;

const INFO_HEIGHT: Pt = Pt(24.0);
// alpha 80/255 of the border colour over paper
const RULE_TINT: f32 = 80.0 / 255.0;

/// A single centred "author • date" line under the title block
#[derive(Debug, Clone, PartialEq)]
pub struct InfoHeader {
    pub author: Option<String>,
    pub created: NaiveDate,
    pub visible: bool,
}

impl InfoHeader {
    pub fn new(author: Option<String>, created: NaiveDate) -> InfoHeader {
        InfoHeader {
            author,
            created,
            visible: true,
        }
    }

    /// The drawn line, if there is an author to credit
    pub fn text(&self) -> Option<String> {
        let author = self.author.as_deref().map(str::trim)?;
        if author.is_empty() {
            return None;
        }
        Some(format!(
            "{author} • Created on {}",
            self.created.format("%b %d, %Y")
        ))
    }

    pub fn required_height(&self) -> Pt {
        if self.visible {
            INFO_HEIGHT
        } else {
            Pt::ZERO
        }
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        if !self.visible {
            return;
        }
        ctx.ensure_space(INFO_HEIGHT);
        let top = ctx.cursor_y();

        if let Some(text) = self.text() {
            let colours = ctx.colours();
            let font = ctx.font(FontRole::Regular);
            let size = typography::CAPTION;
            let width = ctx.measure_text(&text, font, size);
            let left = ctx.page_margin();
            let x = left + (ctx.available_width() - width) / 2.0;
            ctx.draw_text(&text, (x, top + Pt(12.0)), font, size, colours.text_secondary());

            let rule_y = top + Pt(20.0);
            ctx.stroke_line(
                (left, rule_y),
                (left + ctx.available_width(), rule_y),
                colours.border().tint(RULE_TINT),
                Pt(0.5),
            );
        }

        ctx.advance(INFO_HEIGHT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::testing::with_context;

    fn created() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 11).unwrap()
    }

    #[test]
    fn formats_author_and_date() {
        let info = InfoHeader::new(Some("Ada Lovelace".into()), created());
        assert_eq!(
            info.text().as_deref(),
            Some("Ada Lovelace • Created on Feb 11, 2025")
        );
        assert_eq!(InfoHeader::new(Some("  ".into()), created()).text(), None);
        assert_eq!(InfoHeader::new(None, created()).text(), None);
    }

    #[test]
    fn hidden_headers_take_no_room() {
        let mut info = InfoHeader::new(Some("Ada".into()), created());
        assert_eq!(info.required_height(), Pt(24.0));
        info.visible = false;
        assert_eq!(info.required_height(), Pt::ZERO);

        let (cursor, pages) = with_context(|ctx| {
            info.render(ctx);
            ctx.cursor_y()
        });
        assert_eq!(cursor, Pt(48.0));
        assert_eq!(pages[0].texts().count(), 1);
    }

    #[test]
    fn draws_centred_text() {
        let info = InfoHeader::new(Some("Ada".into()), created());
        let (cursor, pages) = with_context(|ctx| {
            info.render(ctx);
            ctx.cursor_y()
        });
        assert_eq!(cursor, Pt(72.0));
        assert_eq!(pages[0].count_text("Ada • Created on Feb 11, 2025"), 1);
    }
}
