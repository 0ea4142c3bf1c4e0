/// A colour, expressed in RGB or CMYK colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceCMYK colour; c, m, y, and k range from 0.0 to 1.0
    CMYK { c: f32, m: f32, y: f32, k: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new RGB colour from a packed `0xRRGGBB` value, i.e. `Colour::hex(0xFF6B35)`
    pub fn hex(rgb: u32) -> Colour {
        Colour::new_rgb_bytes((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Create a new colour in the CMYK space. c, m, y, and k range from 0.0 to 1.0
    pub fn new_cmyk(c: f32, m: f32, y: f32, k: f32) -> Colour {
        Colour::CMYK { c, m, y, k }
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }

    /// Blend the colour towards white (paper), keeping `strength` of the original colour.
    /// A strength of 1.0 returns the colour unchanged, 0.0 returns white.
    pub fn tint(self, strength: f32) -> Colour {
        let s = strength.clamp(0.0, 1.0);
        let lift = |v: f32| 1.0 - (1.0 - v) * s;
        match self {
            Colour::RGB { r, g, b } => Colour::RGB {
                r: lift(r),
                g: lift(g),
                b: lift(b),
            },
            Colour::CMYK { c, m, y, k } => Colour::CMYK {
                c: c * s,
                m: m * s,
                y: y * s,
                k: k * s,
            },
            Colour::Grey { g } => Colour::Grey { g: lift(g) },
        }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

impl<T: Into<f32>> From<(T, T, T, T)> for Colour {
    fn from(c: (T, T, T, T)) -> Self {
        Colour::CMYK {
            c: c.0.into(),
            m: c.1.into(),
            y: c.2.into(),
            k: c.3.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const RED: Colour = Colour::RGB {
        r: 1.0,
        g: 0.0,
        b: 0.0,
    };
    pub const GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 1.0,
        b: 0.0,
    };
    pub const BLUE: Colour = Colour::RGB {
        r: 0.0,
        g: 0.0,
        b: 1.0,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.005
    }

    #[test]
    fn hex_unpacks_channels() {
        let Colour::RGB { r, g, b } = Colour::hex(0xFF6B35) else {
            panic!("hex produces rgb");
        };
        assert!(close(r, 1.0));
        assert!(close(g, 107.0 / 255.0));
        assert!(close(b, 53.0 / 255.0));
    }

    #[test]
    fn tint_moves_towards_white() {
        assert_eq!(colours::BLACK.tint(1.0), colours::BLACK);
        assert_eq!(colours::BLACK.tint(0.0), colours::WHITE);

        // a 7% coral tint is the soft badge background #FFF5F2
        let Colour::RGB { r, g, b } = Colour::hex(0xFF6B35).tint(0.07) else {
            panic!("tint keeps the colour space");
        };
        assert!(close(r, 1.0));
        assert!(close(g, 245.0 / 255.0));
        assert!(close(b, 241.0 / 255.0));
    }
}
