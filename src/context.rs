//! Per-pass layout state: the cursor, the page index and the page-break controller.

use crate::canvas::{Canvas, Paint};
use crate::colour::Colour;
use crate::font::FontHandle;
use crate::fontset::{FontProvider, FontRole, TextMeasure};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::style::{self, typography};
use crate::theme::ColourProvider;
use crate::units::Pt;
use crate::ReportError;

/// The fixed geometry of every page in one layout pass. All values are in top-down
/// page coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGeometry {
    pub width: Pt,
    pub height: Pt,
    pub margin: Pt,
    pub header_height: Pt,
    pub footer_height: Pt,
}

impl PageGeometry {
    /// Geometry for a page of the given size with the standard header and footer bands
    pub fn new(size: PageSize, margin: Pt) -> PageGeometry {
        PageGeometry {
            width: size.0,
            height: size.1,
            margin,
            header_height: style::HEADER_HEIGHT,
            footer_height: style::FOOTER_HEIGHT,
        }
    }

    /// Width between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.width - self.margin * 2.0
    }

    /// Lowest y content may reach before the footer band starts
    pub fn usable_bottom(&self) -> Pt {
        self.height - self.margin - self.footer_height
    }

    /// Check that the page leaves a usable content area: a positive width, and room
    /// below the title block for at least a table header and one row.
    pub fn validate(&self) -> Result<(), ReportError> {
        if !self.margin.is_finite() || self.margin < Pt::ZERO {
            return Err(ReportError::InvalidArgument(format!(
                "margin must be a finite, non-negative length, got {}",
                self.margin
            )));
        }
        if self.content_width() <= Pt::ZERO {
            return Err(ReportError::InvalidArgument(format!(
                "a margin of {} leaves no content width on a {} wide page",
                self.margin, self.width
            )));
        }
        let room = self.usable_bottom() - self.margin - self.header_height;
        if room < style::TABLE_HEADER_HEIGHT + style::TABLE_ROW_HEIGHT {
            return Err(ReportError::InvalidArgument(format!(
                "a margin of {} leaves only {} of content height on a {} high page",
                self.margin, room, self.height
            )));
        }
        Ok(())
    }
}

/// What gets drawn around the content of every page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageDecor {
    pub title: String,
    pub subtitle: String,
    /// Redraw the title block at the top of every page, not just the first
    pub repeat_header: bool,
    /// Total number of pages, when a previous pass has counted them
    pub total_pages: Option<usize>,
}

impl PageDecor {
    fn shown_title(&self) -> Option<&str> {
        Some(self.title.trim()).filter(|title| !title.is_empty())
    }

    fn shown_subtitle(&self) -> Option<&str> {
        Some(self.subtitle.trim()).filter(|subtitle| !subtitle.is_empty())
    }

    fn has_title_block(&self) -> bool {
        self.shown_title().is_some() || self.shown_subtitle().is_some()
    }

    fn footer_label(&self, page: usize) -> String {
        match self.total_pages {
            Some(total) => format!("Page {page} of {total}"),
            None => format!("Page {page}"),
        }
    }
}

/// Mutable state of one layout pass over a document.
///
/// The context borrows the capabilities it renders with and owns the cursor: a
/// top-down y coordinate that only grows within a page and is reset to the top margin
/// on every page break.
pub struct RenderContext<'a> {
    canvas: &'a mut dyn Canvas,
    fonts: &'a dyn FontProvider,
    measure: &'a dyn TextMeasure,
    colours: &'a dyn ColourProvider,
    geometry: PageGeometry,
    decor: PageDecor,
    cursor_y: Pt,
    page: usize,
    page_top: Pt,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        canvas: &'a mut dyn Canvas,
        fonts: &'a dyn FontProvider,
        measure: &'a dyn TextMeasure,
        colours: &'a dyn ColourProvider,
        geometry: PageGeometry,
        decor: PageDecor,
    ) -> RenderContext<'a> {
        RenderContext {
            canvas,
            fonts,
            measure,
            colours,
            geometry,
            decor,
            cursor_y: geometry.margin,
            page: 0,
            page_top: geometry.margin,
        }
    }

    /// Open page 1 and draw the title block on it
    pub fn begin(&mut self) {
        self.page = 1;
        self.start_page(true);
    }

    /// Finalize the last page and return how many pages were laid out
    pub fn finish(mut self) -> usize {
        self.draw_footer();
        log::debug!(
            "laid out {} page(s), last cursor at {}",
            self.page,
            self.cursor_y
        );
        self.page
    }

    /// Make sure `required` points fit between the cursor and the footer band, starting
    /// a new page when they don't. A page that is still empty is never broken again, so
    /// an element taller than a whole page starts at the top of a fresh page and
    /// overflows it.
    pub fn ensure_space(&mut self, required: Pt) {
        if self.fits(required) {
            return;
        }
        if self.cursor_y <= self.page_top {
            log::debug!(
                "{} does not fit on an empty page {}, letting it overflow",
                required,
                self.page
            );
            return;
        }
        self.break_page();
    }

    /// Whether `height` fits below the cursor on the current page
    pub fn fits(&self, height: Pt) -> bool {
        self.cursor_y + height <= self.geometry.usable_bottom()
    }

    fn break_page(&mut self) {
        self.draw_footer();
        self.page += 1;
        log::debug!("page break at y = {}, starting page {}", self.cursor_y, self.page);
        self.start_page(self.decor.repeat_header);
    }

    fn start_page(&mut self, with_title: bool) {
        self.canvas.begin_page(self.geometry.width, self.geometry.height);
        self.cursor_y = self.geometry.margin;
        if with_title {
            self.draw_title_block();
        }
        self.page_top = self.cursor_y;
    }

    fn draw_title_block(&mut self) {
        if !self.decor.has_title_block() {
            return;
        }

        let top = self.geometry.margin;
        let left = self.geometry.margin;
        if let Some(title) = self.decor.shown_title() {
            let font = self.font(FontRole::Bold);
            let colour = self.colours.text_primary();
            self.canvas.draw_text(
                title,
                (left, top + typography::DISPLAY),
                font,
                typography::DISPLAY,
                colour,
            );
        }
        if let Some(subtitle) = self.decor.shown_subtitle() {
            let font = self.font(FontRole::Regular);
            let colour = self.colours.text_secondary();
            self.canvas.draw_text(
                subtitle,
                (left, top + Pt(44.0)),
                font,
                typography::BODY,
                colour,
            );
        }

        let rule_y = top + Pt(60.0);
        self.canvas.draw_line(
            (left, rule_y),
            (left + self.geometry.content_width(), rule_y),
            self.colours.border(),
            Pt(1.0),
        );
        self.cursor_y = top + self.geometry.header_height;
    }

    fn draw_footer(&mut self) {
        let left = self.geometry.margin;
        let right = left + self.geometry.content_width();
        let rule_y = self.geometry.usable_bottom() + style::SPACE_MD;
        self.canvas.draw_line(
            (left, rule_y),
            (right, rule_y),
            self.colours.border(),
            Pt(0.5),
        );

        let label = self.decor.footer_label(self.page);
        let font = self.font(FontRole::Regular);
        let width = self.measure_text(&label, font, typography::CAPTION);
        self.canvas.draw_text(
            &label,
            (right - width, rule_y + style::SPACE_MD),
            font,
            typography::CAPTION,
            self.colours.text_secondary(),
        );
    }

    /// The font for `role`, falling back to a standard PDF font when the provider has none
    pub fn font(&self, role: FontRole) -> FontHandle {
        self.fonts
            .lookup(role)
            .unwrap_or(FontHandle::Builtin(role.fallback()))
    }

    pub fn measure_text(&self, text: &str, font: FontHandle, size: Pt) -> Pt {
        self.measure.measure_width(text, font, size)
    }

    /// Greedily wrap `text` into lines no wider than `max_width`
    pub fn wrap_text(&self, text: &str, max_width: Pt, size: Pt, font: FontHandle) -> Vec<String> {
        let measure = self.measure;
        crate::layout::wrap_text(text, max_width, |line| {
            measure.measure_width(line, font, size)
        })
    }

    pub fn colours(&self) -> &'a dyn ColourProvider {
        self.colours
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn page_margin(&self) -> Pt {
        self.geometry.margin
    }

    pub fn available_width(&self) -> Pt {
        self.geometry.content_width()
    }

    /// 1-based index of the page being drawn
    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn cursor_y(&self) -> Pt {
        self.cursor_y
    }

    /// Move the cursor down the page
    pub fn advance(&mut self, height: Pt) {
        self.cursor_y += height;
    }

    pub fn fill_rect(&mut self, rect: Rect, colour: Colour, corner_radius: Pt) {
        self.canvas.draw_rect(rect, Paint::Fill(colour), corner_radius);
    }

    pub fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, width: Pt) {
        self.canvas.draw_line(from, to, colour, width);
    }

    /// Draw `text` with its baseline starting at `origin`
    pub fn draw_text(
        &mut self,
        text: &str,
        origin: (Pt, Pt),
        font: FontHandle,
        size: Pt,
        colour: Colour,
    ) {
        self.canvas.draw_text(text, origin, font, size, colour);
    }
}
