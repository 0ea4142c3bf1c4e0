//! The drawing surface the layout engine renders into.
//!
//! Elements only ever talk to the [Canvas] trait. The crate's own implementation,
//! [Recorder], keeps every drawing command per page so the pages can be inspected or
//! handed to the PDF writer once layout is finished.

use crate::colour::Colour;
use crate::font::FontHandle;
use crate::rect::Rect;
use crate::units::Pt;

/// How a rectangle is painted
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Fill(Colour),
    Stroke { colour: Colour, width: Pt },
}

/// A single drawing primitive, in top-down page coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        paint: Paint,
        corner_radius: Pt,
    },
    Line {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
        width: Pt,
    },
    /// Text drawn with its baseline starting at `origin`
    Text {
        text: String,
        origin: (Pt, Pt),
        font: FontHandle,
        size: Pt,
        colour: Colour,
    },
}

/// A 2D drawing surface split into pages
pub trait Canvas {
    /// Start a new page; all following commands land on it
    fn begin_page(&mut self, width: Pt, height: Pt);

    /// Draw a rectangle, with rounded corners when `corner_radius` is positive
    fn draw_rect(&mut self, rect: Rect, paint: Paint, corner_radius: Pt);

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, width: Pt);

    fn draw_text(
        &mut self,
        text: &str,
        origin: (Pt, Pt),
        font: FontHandle,
        size: Pt,
        colour: Colour,
    );
}

/// Everything drawn on one page
#[derive(Debug, Clone, PartialEq)]
pub struct PageRecording {
    pub width: Pt,
    pub height: Pt,
    pub commands: Vec<DrawCommand>,
}

impl PageRecording {
    /// All text drawn on the page, in drawing order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// How many times exactly `needle` was drawn as a text run on this page
    pub fn count_text(&self, needle: &str) -> usize {
        self.texts().filter(|text| *text == needle).count()
    }
}

/// A [Canvas] that records commands in memory
#[derive(Debug, Default)]
pub struct Recorder {
    pages: Vec<PageRecording>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn pages(&self) -> &[PageRecording] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<PageRecording> {
        self.pages
    }

    fn push(&mut self, command: DrawCommand) {
        match self.pages.last_mut() {
            Some(page) => page.commands.push(command),
            None => log::warn!("dropping {command:?}: no page has been started"),
        }
    }
}

impl Canvas for Recorder {
    fn begin_page(&mut self, width: Pt, height: Pt) {
        self.pages.push(PageRecording {
            width,
            height,
            commands: Vec::new(),
        });
    }

    fn draw_rect(&mut self, rect: Rect, paint: Paint, corner_radius: Pt) {
        self.push(DrawCommand::Rect {
            rect,
            paint,
            corner_radius,
        });
    }

    fn draw_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, width: Pt) {
        self.push(DrawCommand::Line {
            from,
            to,
            colour,
            width,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: (Pt, Pt),
        font: FontHandle,
        size: Pt,
        colour: Colour,
    ) {
        self.push(DrawCommand::Text {
            text: text.to_string(),
            origin,
            font,
            size,
            colour,
        });
    }
}
