//! Layout and typography constants shared by the document chrome and the elements.
//!
//! Spacing follows a 4pt base unit.

use crate::units::Pt;

pub const MARGIN_DEFAULT: Pt = Pt(48.0);
pub const MARGIN_COMPACT: Pt = Pt(32.0);
pub const MARGIN_RELAXED: Pt = Pt(64.0);

/// Vertical band reserved for the title block at the top of a page
pub const HEADER_HEIGHT: Pt = Pt(72.0);
/// Vertical band reserved for the page-number footer at the bottom of a page
pub const FOOTER_HEIGHT: Pt = Pt(48.0);

pub const SPACE_XS: Pt = Pt(4.0);
pub const SPACE_SM: Pt = Pt(8.0);
pub const SPACE_MD: Pt = Pt(16.0);
pub const SPACE_LG: Pt = Pt(24.0);
pub const SPACE_XL: Pt = Pt(32.0);
pub const SPACE_2XL: Pt = Pt(48.0);

pub const PILL_HEIGHT: Pt = Pt(32.0);
pub const PILL_RADIUS: Pt = Pt(16.0);
pub const CARD_RADIUS: Pt = Pt(8.0);
pub const BORDER_RADIUS: Pt = Pt(4.0);

/// Base pitch of one line of body text, before any extra line height
pub const LINE_PITCH: Pt = Pt(16.0);

pub const LIST_ROW_HEIGHT: Pt = Pt(24.0);
pub const LIST_INDENT: Pt = Pt(24.0);

pub const TABLE_ROW_HEIGHT: Pt = Pt(32.0);
pub const TABLE_HEADER_HEIGHT: Pt = Pt(40.0);
pub const TABLE_CELL_PADDING: Pt = Pt(12.0);
pub const TABLE_BOTTOM_SPACING: Pt = Pt(8.0);

/// Font sizes of the type scale
pub mod typography {
    use crate::units::Pt;

    pub const DISPLAY: Pt = Pt(24.0);
    pub const HEADING1: Pt = Pt(20.0);
    pub const HEADING2: Pt = Pt(16.0);
    pub const HEADING3: Pt = Pt(14.0);
    pub const BODY: Pt = Pt(12.0);
    pub const CAPTION: Pt = Pt(10.0);
    pub const TINY: Pt = Pt(8.0);
}
