use crate::context::RenderContext;
use crate::units::Pt;

const LINE_HEIGHT: Pt = Pt(8.0);

/// A horizontal divider in the theme's border colour
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub left_margin: Pt,
    pub right_margin: Pt,
    pub stroke_width: Pt,
}

impl Default for Line {
    fn default() -> Self {
        Line {
            left_margin: Pt::ZERO,
            right_margin: Pt::ZERO,
            stroke_width: Pt(1.0),
        }
    }
}

impl Line {
    pub fn new(left_margin: Pt, right_margin: Pt) -> Line {
        Line {
            left_margin,
            right_margin,
            ..Line::default()
        }
    }

    pub fn stroke_width(mut self, width: Pt) -> Line {
        self.stroke_width = width;
        self
    }

    pub fn required_height(&self) -> Pt {
        LINE_HEIGHT
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        ctx.ensure_space(LINE_HEIGHT);

        let y = ctx.cursor_y() + LINE_HEIGHT / 2.0;
        let x1 = ctx.page_margin() + self.left_margin;
        let x2 = ctx.page_margin() + ctx.available_width() - self.right_margin;
        let colour = ctx.colours().border();
        ctx.stroke_line((x1, y), (x2, y), colour, self.stroke_width);

        ctx.advance(LINE_HEIGHT);
    }
}
