use crate::context::RenderContext;
use crate::units::Pt;

/// Empty vertical space
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Spacer {
    pub height: Pt,
}

impl Spacer {
    pub fn new(height: Pt) -> Spacer {
        Spacer { height }
    }

    pub fn required_height(&self) -> Pt {
        self.height
    }

    pub fn render(&self, ctx: &mut RenderContext) {
        ctx.advance(self.height);
    }
}
