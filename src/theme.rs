use crate::colour::{colours, Colour};

/// Named theme colours consumed by the renderer. Elements never hard-code the
/// palette, they ask the provider for a role.
pub trait ColourProvider {
    fn primary(&self) -> Colour;
    fn secondary(&self) -> Colour;
    fn text_primary(&self) -> Colour;
    fn text_secondary(&self) -> Colour;
    fn background(&self) -> Colour;
    fn background_alt(&self) -> Colour;
    fn border(&self) -> Colour;
}

/// The default palette: a warm coral primary, an ocean blue secondary and neutral greys.
/// Fields are public so a theme can be tweaked before it is handed to a document.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub primary: Colour,
    pub secondary: Colour,
    pub text_primary: Colour,
    pub text_secondary: Colour,
    pub background: Colour,
    pub background_alt: Colour,
    pub border: Colour,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            primary: Colour::hex(0xFF6B35),
            secondary: Colour::hex(0x00A8CC),
            text_primary: Colour::hex(0x1A1A1A),
            text_secondary: Colour::hex(0x666666),
            background: colours::WHITE,
            background_alt: Colour::hex(0xF8F9FA),
            border: Colour::hex(0xE0E0E0),
        }
    }
}

impl ColourProvider for Theme {
    fn primary(&self) -> Colour {
        self.primary
    }

    fn secondary(&self) -> Colour {
        self.secondary
    }

    fn text_primary(&self) -> Colour {
        self.text_primary
    }

    fn text_secondary(&self) -> Colour {
        self.text_secondary
    }

    fn background(&self) -> Colour {
        self.background
    }

    fn background_alt(&self) -> Colour {
        self.background_alt
    }

    fn border(&self) -> Colour {
        self.border
    }
}
