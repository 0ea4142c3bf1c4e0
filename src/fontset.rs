use crate::font::{BuiltinFont, Font, FontHandle};
use crate::options::FontOptions;
use crate::{Pt, ReportError};
use id_arena::{Arena, Id};

/// The weights/styles a renderer asks for
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Bold,
    Medium,
    Monospace,
}

impl FontRole {
    /// The standard PDF font used when no font was supplied for the role
    pub fn fallback(self) -> BuiltinFont {
        match self {
            FontRole::Regular => BuiltinFont::Helvetica,
            FontRole::Bold | FontRole::Medium => BuiltinFont::HelveticaBold,
            FontRole::Monospace => BuiltinFont::Courier,
        }
    }
}

/// Resolves font roles to handles. Any role may be absent, in which case the renderer
/// falls back to [FontRole::fallback].
pub trait FontProvider {
    fn regular(&self) -> Option<FontHandle>;
    fn bold(&self) -> Option<FontHandle>;
    fn medium(&self) -> Option<FontHandle>;
    fn monospace(&self) -> Option<FontHandle>;

    fn lookup(&self, role: FontRole) -> Option<FontHandle> {
        match role {
            FontRole::Regular => self.regular(),
            FontRole::Bold => self.bold(),
            FontRole::Medium => self.medium(),
            FontRole::Monospace => self.monospace(),
        }
    }
}

/// Measures how wide a run of text will be when drawn
pub trait TextMeasure {
    fn measure_width(&self, text: &str, font: FontHandle, size: Pt) -> Pt;
}

/// The fonts of one document: an arena of parsed faces plus which face plays which role.
#[derive(Default)]
pub struct FontSet {
    pub fonts: Arena<Font>,
    regular: Option<Id<Font>>,
    bold: Option<Id<Font>>,
    medium: Option<Id<Font>>,
    monospace: Option<Id<Font>>,
}

impl FontSet {
    /// A font set with no fonts at all; every role uses a standard PDF font
    pub fn builtin() -> FontSet {
        FontSet::default()
    }

    /// Parse every font supplied in `options`
    pub fn load(options: &FontOptions) -> Result<FontSet, ReportError> {
        let mut set = FontSet::default();
        let roles = [
            (FontRole::Regular, &options.regular),
            (FontRole::Bold, &options.bold),
            (FontRole::Medium, &options.medium),
            (FontRole::Monospace, &options.monospace),
        ];
        for (role, bytes) in roles {
            if let Some(bytes) = bytes {
                set.add_font(role, Font::load(bytes.clone())?);
            } else {
                log::debug!("no {role:?} font supplied, using {:?}", role.fallback());
            }
        }
        Ok(set)
    }

    /// Add a font to the set, assigning it to `role` (replacing any previous font for
    /// the role). The returned id stays valid for the lifetime of the set.
    pub fn add_font(&mut self, role: FontRole, font: Font) -> Id<Font> {
        let id = self.fonts.alloc(font);
        match role {
            FontRole::Regular => self.regular = Some(id),
            FontRole::Bold => self.bold = Some(id),
            FontRole::Medium => self.medium = Some(id),
            FontRole::Monospace => self.monospace = Some(id),
        }
        id
    }

    pub fn get(&self, id: Id<Font>) -> Option<&Font> {
        self.fonts.get(id)
    }
}

impl FontProvider for FontSet {
    fn regular(&self) -> Option<FontHandle> {
        self.regular.map(FontHandle::Embedded)
    }

    fn bold(&self) -> Option<FontHandle> {
        self.bold.map(FontHandle::Embedded)
    }

    fn medium(&self) -> Option<FontHandle> {
        self.medium.map(FontHandle::Embedded)
    }

    fn monospace(&self) -> Option<FontHandle> {
        self.monospace.map(FontHandle::Embedded)
    }
}

impl TextMeasure for FontSet {
    fn measure_width(&self, text: &str, font: FontHandle, size: Pt) -> Pt {
        match font {
            FontHandle::Embedded(id) => match self.fonts.get(id) {
                Some(font) => font.width_of_text(text, size),
                None => BuiltinFont::Helvetica.width_of_text(text, size),
            },
            FontHandle::Builtin(builtin) => builtin.width_of_text(text, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_has_no_roles() {
        let fonts = FontSet::builtin();
        for role in [
            FontRole::Regular,
            FontRole::Bold,
            FontRole::Medium,
            FontRole::Monospace,
        ] {
            assert_eq!(fonts.lookup(role), None);
        }
        assert_eq!(FontRole::Monospace.fallback(), BuiltinFont::Courier);
    }

    #[test]
    fn measures_builtin_fonts() {
        let fonts = FontSet::builtin();
        let width = fonts.measure_width(
            "Hello",
            FontHandle::Builtin(BuiltinFont::Helvetica),
            Pt(10.0),
        );
        assert!((width.0 - 22.78).abs() < 0.001);
    }

    #[test]
    fn rejects_garbage_font_bytes() {
        let options = FontOptions {
            regular: Some(vec![0, 1, 2, 3]),
            ..FontOptions::default()
        };
        assert!(matches!(
            FontSet::load(&options),
            Err(ReportError::FaceParsing(_))
        ));
    }
}
