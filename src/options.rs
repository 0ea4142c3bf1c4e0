use crate::context::PageGeometry;
use crate::element::InfoHeader;
use crate::pagesize::{Orientation, PageSize, PaperSize};
use crate::style;
use crate::units::Pt;
use crate::ReportError;
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;

/// Everything that configures a document as a whole
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    /// Drawn large at the top of the first page
    pub title: String,
    /// Drawn under the title, and written as the PDF subject
    pub subtitle: String,
    /// Author and date metadata. When present, it is written to the PDF information
    /// dictionary and, unless disabled, shown under the title block.
    pub info: Option<DocumentInfo>,
    /// Draw the title block on every page rather than only the first
    pub repeat_header: bool,
    pub fonts: FontOptions,
    pub page_size: PaperSize,
    pub orientation: Orientation,
    pub margin: Pt,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        DocumentOptions {
            title: String::new(),
            subtitle: String::new(),
            info: None,
            repeat_header: true,
            fonts: FontOptions::default(),
            page_size: PaperSize::default(),
            orientation: Orientation::default(),
            margin: style::MARGIN_DEFAULT,
        }
    }
}

impl DocumentOptions {
    /// Options for an untitled A4 portrait document with the default margin
    pub fn new() -> DocumentOptions {
        DocumentOptions::default()
    }

    /// Set the document title, modifying `self`
    pub fn title<S: ToString>(&mut self, title: S) -> &mut Self {
        self.title = title.to_string();
        self
    }

    /// Set the document subtitle, modifying `self`
    pub fn subtitle<S: ToString>(&mut self, subtitle: S) -> &mut Self {
        self.subtitle = subtitle.to_string();
        self
    }

    pub fn info(&mut self, info: DocumentInfo) -> &mut Self {
        self.info = Some(info);
        self
    }

    pub fn repeat_header(&mut self, repeat: bool) -> &mut Self {
        self.repeat_header = repeat;
        self
    }

    pub fn fonts(&mut self, fonts: FontOptions) -> &mut Self {
        self.fonts = fonts;
        self
    }

    pub fn page_size(&mut self, page_size: PaperSize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    pub fn orientation(&mut self, orientation: Orientation) -> &mut Self {
        self.orientation = orientation;
        self
    }

    pub fn margin(&mut self, margin: Pt) -> &mut Self {
        self.margin = margin;
        self
    }

    /// Width and height of every page, in points
    pub fn dimensions(&self) -> PageSize {
        self.page_size.size(self.orientation)
    }

    pub fn geometry(&self) -> PageGeometry {
        PageGeometry::new(self.dimensions(), self.margin)
    }

    /// Check that the options describe a page content can be laid out on
    pub fn validate(&self) -> Result<(), ReportError> {
        self.geometry().validate()
    }

    /// The info line shown under the title block, if there is one
    pub(crate) fn info_header(&self) -> Option<InfoHeader> {
        self.info
            .as_ref()
            .filter(|info| info.show_in_header)
            .map(DocumentInfo::header)
    }
}

/// General document metadata
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentInfo {
    /// The author(s) of the document. No prescribed format.
    pub author: Option<String>,
    /// Defaults to the day the info was created
    pub created: NaiveDate,
    /// Arbitrary extra entries for the PDF information dictionary
    pub properties: BTreeMap<String, String>,
    /// Show an "author • date" line under the title block
    pub show_in_header: bool,
}

impl Default for DocumentInfo {
    fn default() -> Self {
        DocumentInfo {
            author: None,
            created: Local::now().date_naive(),
            properties: BTreeMap::new(),
            show_in_header: true,
        }
    }
}

impl DocumentInfo {
    /// Create a new info block with no author, dated today
    pub fn new() -> DocumentInfo {
        DocumentInfo::default()
    }

    /// Set the author of the info block, modifying `self`
    pub fn author<S: ToString>(&mut self, author: S) -> &mut Self {
        self.author = Some(author.to_string());
        self
    }

    pub fn created(&mut self, created: NaiveDate) -> &mut Self {
        self.created = created;
        self
    }

    /// Add a custom property, replacing any previous value for `key`
    pub fn property<K: ToString, V: ToString>(&mut self, key: K, value: V) -> &mut Self {
        self.properties.insert(key.to_string(), value.to_string());
        self
    }

    pub fn show_in_header(&mut self, show: bool) -> &mut Self {
        self.show_in_header = show;
        self
    }

    fn header(&self) -> InfoHeader {
        InfoHeader {
            author: self.author.clone(),
            created: self.created,
            visible: self.show_in_header,
        }
    }
}

/// Raw TrueType / OpenType font files for each font role. Any role left empty is drawn
/// with a standard PDF font instead.
#[derive(Clone, Default, PartialEq)]
pub struct FontOptions {
    pub regular: Option<Vec<u8>>,
    pub bold: Option<Vec<u8>>,
    pub medium: Option<Vec<u8>>,
    pub monospace: Option<Vec<u8>>,
}

impl FontOptions {
    pub fn new() -> FontOptions {
        FontOptions::default()
    }

    pub fn regular(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.regular = Some(bytes);
        self
    }

    pub fn bold(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.bold = Some(bytes);
        self
    }

    pub fn medium(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.medium = Some(bytes);
        self
    }

    pub fn monospace(&mut self, bytes: Vec<u8>) -> &mut Self {
        self.monospace = Some(bytes);
        self
    }
}

// font files are large, only report their sizes
impl fmt::Debug for FontOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = |bytes: &Option<Vec<u8>>| bytes.as_ref().map(Vec::len);
        f.debug_struct("FontOptions")
            .field("regular", &size(&self.regular))
            .field("bold", &size(&self.bold))
            .field("medium", &size(&self.medium))
            .field("monospace", &size(&self.monospace))
            .finish()
    }
}
