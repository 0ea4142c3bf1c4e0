use crate::context::RenderContext;
use crate::font::FontHandle;
use crate::fontset::FontRole;
use crate::style::{self, typography};
use crate::units::Pt;

/// A block of word-wrapped text
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub text: String,
    /// Added to the base 16pt pitch of every line
    pub line_height_extra: Pt,
    pub bold: bool,
    /// Indent from the page margin; indented paragraphs are drawn in the secondary text
    /// colour
    pub left_margin: Pt,
    pub font_size: Pt,
}

impl Paragraph {
    pub fn new<S: Into<String>>(text: S) -> Paragraph {
        Paragraph {
            text: text.into(),
            line_height_extra: Pt::ZERO,
            bold: false,
            left_margin: Pt::ZERO,
            font_size: typography::BODY,
        }
    }

    pub fn line_height_extra(mut self, extra: Pt) -> Paragraph {
        self.line_height_extra = extra;
        self
    }

    pub fn bold(mut self, bold: bool) -> Paragraph {
        self.bold = bold;
        self
    }

    pub fn indent(mut self, left_margin: Pt) -> Paragraph {
        self.left_margin = left_margin;
        self
    }

    pub fn font_size(mut self, size: Pt) -> Paragraph {
        self.font_size = size;
        self
    }

    /// Distance between consecutive baselines
    pub fn pitch(&self) -> Pt {
        style::LINE_PITCH + self.line_height_extra
    }

    fn font(&self, ctx: &RenderContext) -> FontHandle {
        ctx.font(if self.bold {
            FontRole::Bold
        } else {
            FontRole::Regular
        })
    }

    /// The wrapped lines of the paragraph as they will be drawn
    pub fn lines(&self, ctx: &RenderContext) -> Vec<String> {
        ctx.wrap_text(
            &self.text,
            ctx.available_width() - self.left_margin,
            self.font_size,
            self.font(ctx),
        )
    }

    pub fn required_height(&self, ctx: &RenderContext) -> Pt {
        self.pitch() * self.lines(ctx).len() as f32
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        let font = self.font(ctx);
        let colours = ctx.colours();
        let colour = if self.left_margin > Pt::ZERO {
            colours.text_secondary()
        } else {
            colours.text_primary()
        };
        let x = ctx.page_margin() + self.left_margin;
        let pitch = self.pitch();

        for line in self.lines(ctx) {
            // long paragraphs flow onto the next page line by line
            ctx.ensure_space(pitch);
            let baseline = ctx.cursor_y() + self.font_size;
            ctx.draw_text(&line, (x, baseline), font, self.font_size, colour);
            ctx.advance(pitch);
        }
    }
}

impl From<&str> for Paragraph {
    fn from(text: &str) -> Self {
        Paragraph::new(text)
    }
}

impl From<String> for Paragraph {
    fn from(text: String) -> Self {
        Paragraph::new(text)
    }
}
