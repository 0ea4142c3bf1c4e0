use crate::{
    canvas::{PageRecording, Recorder},
    context::{PageDecor, RenderContext},
    element::{Element, Line, List, Paragraph, Section, Spacer, Table},
    fontset::FontSet,
    info::Info,
    options::DocumentOptions,
    style,
    theme::Theme,
    units::Pt,
    writer::write_pdf,
    ReportError,
};
use chrono::{DateTime, Local};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    time::Instant,
};

#[derive(Default)]
/// A document is an ordered script of elements that is laid out into pages and
/// written out as a PDF with a call to [Document::generate].
///
/// A document must be [initialized](Document::initialize) before anything can be added
/// to it; every other operation fails with [ReportError::InvalidOperation] until then.
///
/// ```
/// use pdf_report::{Document, DocumentOptions, Table};
///
/// let mut options = DocumentOptions::new();
/// options.title("Inventory");
///
/// let mut document = Document::new();
/// document
///     .initialize(options)?
///     .add_section("Stock", false)?
///     .add_paragraph("Counted on the first of the month.")?
///     .add_table(Table::new(["Item", "Qty"], [["Bolts", "120"], ["Nuts", "80"]]))?;
///
/// let mut pdf: Vec<u8> = Vec::new();
/// let pages = document.generate(&mut pdf)?;
/// assert_eq!(pages, 1);
/// # Ok::<(), pdf_report::ReportError>(())
/// ```
pub struct Document {
    options: Option<DocumentOptions>,
    initialized_at: Option<DateTime<Local>>,
    fonts: FontSet,
    theme: Theme,
    elements: Vec<Element>,
    section_counter: usize,
}

impl Document {
    /// Create an uninitialized document using the default [Theme]
    pub fn new() -> Document {
        Document::default()
    }

    /// Create an uninitialized document drawn with `theme`
    pub fn with_theme(theme: Theme) -> Document {
        Document {
            theme,
            ..Document::default()
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    pub fn is_initialized(&self) -> bool {
        self.options.is_some()
    }

    pub fn options(&self) -> Option<&DocumentOptions> {
        self.options.as_ref()
    }

    /// Number of numbered sections added since the document was last initialized
    pub fn section_counter(&self) -> usize {
        self.section_counter
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Configure the document, discarding any previously added content.
    ///
    /// Fails with [ReportError::InvalidArgument] if the options don't leave a usable page,
    /// or with [ReportError::FaceParsing] if one of the supplied fonts can't be parsed. A
    /// failed call leaves the document as it was.
    pub fn initialize(&mut self, options: DocumentOptions) -> Result<&mut Self, ReportError> {
        options.validate()?;
        let fonts = FontSet::load(&options.fonts)?;

        log::debug!(
            "initialized {:?} {:?} document with a {} margin",
            options.page_size,
            options.orientation,
            options.margin
        );
        self.fonts = fonts;
        self.options = Some(options);
        self.initialized_at = Some(Local::now());
        self.elements.clear();
        self.section_counter = 0;
        Ok(self)
    }

    fn require(&self, operation: &'static str) -> Result<&DocumentOptions, ReportError> {
        self.options
            .as_ref()
            .ok_or(ReportError::InvalidOperation(operation))
    }

    fn push(
        &mut self,
        operation: &'static str,
        element: Element,
    ) -> Result<&mut Self, ReportError> {
        self.require(operation)?;
        self.elements.push(element);
        Ok(self)
    }

    /// Add any element to the end of the document
    pub fn add_element<E: Into<Element>>(&mut self, element: E) -> Result<&mut Self, ReportError> {
        self.push("add_element", element.into())
    }

    /// Add a numbered section heading such as "2. Results", incrementing the section
    /// counter
    pub fn add_section<S: Into<String>>(
        &mut self,
        text: S,
        pill: bool,
    ) -> Result<&mut Self, ReportError> {
        self.require("add_section")?;
        self.section_counter += 1;
        let section = Section::new(text).pill(pill).numbered(self.section_counter);
        self.push("add_section", section.into())
    }

    /// Add an unnumbered heading
    pub fn add_subtitle<S: Into<String>>(
        &mut self,
        text: S,
        pill: bool,
    ) -> Result<&mut Self, ReportError> {
        self.push("add_subtitle", Section::new(text).pill(pill).into())
    }

    /// Add an unnumbered heading with a "label value" summary, e.g. a total, drawn on the
    /// right of the same band
    pub fn add_subtitle_with_summary<S, L, V>(
        &mut self,
        text: S,
        label: L,
        value: V,
        pill: bool,
    ) -> Result<&mut Self, ReportError>
    where
        S: Into<String>,
        L: Into<String>,
        V: Into<String>,
    {
        let section = Section::new(text).pill(pill).summary(label, value);
        self.push("add_subtitle_with_summary", section.into())
    }

    pub fn add_paragraph<P: Into<Paragraph>>(
        &mut self,
        paragraph: P,
    ) -> Result<&mut Self, ReportError> {
        self.push("add_paragraph", paragraph.into().into())
    }

    /// Add a horizontal divider, inset from the page margins by `left` and `right`
    pub fn add_line(&mut self, left: Pt, right: Pt) -> Result<&mut Self, ReportError> {
        self.push("add_line", Line::new(left, right).into())
    }

    /// Add `count` blank lines of body text
    pub fn add_blank_space(&mut self, count: usize) -> Result<&mut Self, ReportError> {
        let spacer = Spacer::new(style::LINE_PITCH * count as f32);
        self.push("add_blank_space", spacer.into())
    }

    /// Add an exact amount of vertical space
    pub fn add_space(&mut self, points: Pt) -> Result<&mut Self, ReportError> {
        self.push("add_space", Spacer::new(points).into())
    }

    pub fn add_list<L: Into<List>>(&mut self, list: L) -> Result<&mut Self, ReportError> {
        self.push("add_list", list.into().into())
    }

    pub fn add_table(&mut self, table: Table) -> Result<&mut Self, ReportError> {
        self.push("add_table", table.into())
    }

    /// Add a pill banner followed by its items numbered as an outline under
    /// `base_number` ("3.1", "3.2", ...)
    pub fn add_styled_list<T, I>(
        &mut self,
        title: T,
        items: I,
        base_number: u32,
        bottom_margin: bool,
    ) -> Result<&mut Self, ReportError>
    where
        T: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.require("add_styled_list")?;
        self.elements.push(Section::new(title).pill(true).into());
        self.elements.push(List::new(items).outline(base_number).into());
        if bottom_margin {
            self.elements.push(Spacer::new(style::SPACE_MD).into());
        }
        Ok(self)
    }

    /// Add a single numbered paragraph, optionally under a pill banner and followed by a
    /// divider
    pub fn add_styled_item<T, S>(
        &mut self,
        title: T,
        text: S,
        number: &str,
        line_separator: bool,
        bottom_margin: bool,
    ) -> Result<&mut Self, ReportError>
    where
        T: Into<String>,
        S: AsRef<str>,
    {
        self.require("add_styled_item")?;
        let title = title.into();
        if !title.trim().is_empty() {
            self.elements.push(Section::new(title).pill(true).into());
        }
        self.elements.push(Paragraph::new(format!("{number}. {}", text.as_ref())).into());
        if line_separator {
            self.elements.push(Line::default().into());
        }
        if bottom_margin {
            self.elements.push(Spacer::new(style::SPACE_MD).into());
        }
        Ok(self)
    }

    fn layout(&self, options: &DocumentOptions, total_pages: Option<usize>) -> Vec<PageRecording> {
        let mut canvas = Recorder::new();
        let decor = PageDecor {
            title: options.title.clone(),
            subtitle: options.subtitle.clone(),
            repeat_header: options.repeat_header,
            total_pages,
        };

        let mut ctx = RenderContext::new(
            &mut canvas,
            &self.fonts,
            &self.fonts,
            &self.theme,
            options.geometry(),
            decor,
        );
        ctx.begin();

        let info = options.info_header().map(Element::InfoHeader);
        for element in info.iter().chain(self.elements.iter()) {
            let required = element.required_height(&ctx);
            ctx.ensure_space(required);
            element.render(&mut ctx);
        }
        ctx.finish();

        canvas.into_pages()
    }

    /// Lay the document out and return what was drawn on each page, without producing
    /// a PDF
    pub fn render_pages(&self) -> Result<Vec<PageRecording>, ReportError> {
        let options = self.require("render_pages")?;

        // the first pass only counts pages so footers can read "Page N of M"
        let total = self.layout(options, None).len();
        let pages = self.layout(options, Some(total));
        if pages.len() != total {
            log::warn!(
                "page count changed between layout passes: {total} then {}",
                pages.len()
            );
        }
        Ok(pages)
    }

    /// Lay out the document and write it to `w` as a PDF, returning the number of pages.
    ///
    /// The document is left unchanged, so it can be generated again with identical output;
    /// the creation date is fixed when the document is initialized. Note: although this
    /// can write to arbitrary streams, the entire document is rendered in memory first.
    pub fn generate<W: Write>(&self, w: W) -> Result<usize, ReportError> {
        let options = self.require("generate")?;
        let start = Instant::now();

        let pages = self.render_pages()?;
        let info = Info::from_options(options, self.initialized_at);
        write_pdf(&pages, &self.fonts, &info, w)?;

        log::info!(
            "generated {} page(s) from {} element(s) in {:?}",
            pages.len(),
            self.elements.len(),
            start.elapsed()
        );
        Ok(pages.len())
    }

    /// Generate the document into a file at `path`, replacing any existing file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<usize, ReportError> {
        self.require("save")?;
        let file = File::create(path.as_ref())?;
        let mut w = BufWriter::new(file);
        let pages = self.generate(&mut w)?;
        w.flush()?;
        log::debug!("saved to {}", path.as_ref().display());
        Ok(pages)
    }
}
