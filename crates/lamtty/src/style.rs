//! Helper module with the terminal formatting codes.
//!
//! A [`Style`] is a pure value naming one select-graphic-rendition parameter:
//! the reset code, one of the 16 standard foreground colors, or one of their
//! background counterparts. Displaying a style writes the corresponding ANSI
//! escape sequence. [`Style::attribute`] exposes the equivalent change to a
//! Windows console attribute word, which encodes the foreground color in its
//! low nibble and the background color in its high nibble.

/// A terminal formatting code.
///
/// The discriminant of each variant is the decimal SGR parameter emitted on
/// the ANSI path, i.e., the `31` in `\x1b[31m`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Style {
    Reset = 0,

    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    LightGray = 37,
    DarkGray = 90,
    LightRed = 91,
    LightGreen = 92,
    LightYellow = 93,
    LightBlue = 94,
    LightMagenta = 95,
    LightCyan = 96,
    White = 97,

    BlackBg = 40,
    RedBg = 41,
    GreenBg = 42,
    YellowBg = 43,
    BlueBg = 44,
    MagentaBg = 45,
    CyanBg = 46,
    LightGrayBg = 47,
    DarkGrayBg = 100,
    LightRedBg = 101,
    LightGreenBg = 102,
    LightYellowBg = 103,
    LightBlueBg = 104,
    LightMagentaBg = 105,
    LightCyanBg = 106,
    WhiteBg = 107,
}

/// A change to a console attribute word.
///
/// `Foreground` carries the new low nibble, `Background` the new high nibble
/// already shifted into place. The untouched nibble of the attribute word is
/// preserved when the change is applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    /// Restore the attribute word captured before the first change.
    Reset,
    /// Replace the low nibble of the attribute word.
    Foreground(u16),
    /// Replace the high nibble of the attribute word.
    Background(u16),
}

impl Style {
    /// Get the decimal SGR parameter for this style.
    #[inline]
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Determine whether this style denotes a background color.
    pub fn is_background(&self) -> bool {
        matches!(self.code(), 40..=47 | 100..=107)
    }

    /// Get the equivalent console attribute change.
    ///
    /// The console color order differs from the ANSI order, hence the
    /// explicit table.
    pub fn attribute(&self) -> Attribute {
        use self::Style::*;

        let nibble: u16 = match *self {
            Reset => return Attribute::Reset,
            Black | BlackBg => 0x0,
            Blue | BlueBg => 0x1,
            Green | GreenBg => 0x2,
            Cyan | CyanBg => 0x3,
            Red | RedBg => 0x4,
            Magenta | MagentaBg => 0x5,
            Yellow | YellowBg => 0x6,
            LightGray | LightGrayBg => 0x7,
            DarkGray | DarkGrayBg => 0x8,
            LightBlue | LightBlueBg => 0x9,
            LightGreen | LightGreenBg => 0xa,
            LightCyan | LightCyanBg => 0xb,
            LightRed | LightRedBg => 0xc,
            LightMagenta | LightMagentaBg => 0xd,
            LightYellow | LightYellowBg => 0xe,
            White | WhiteBg => 0xf,
        };

        if self.is_background() {
            Attribute::Background(nibble << 4)
        } else {
            Attribute::Foreground(nibble)
        }
    }
}

impl core::fmt::Display for Style {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("\x1b[")?;
        <_ as core::fmt::Display>::fmt(&self.code(), f)?;
        f.write_str("m")
    }
}

// =====================================================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_codes_and_display() {
        assert_eq!(Style::Reset.code(), 0);
        assert_eq!(Style::Black.code(), 30);
        assert_eq!(Style::LightGray.code(), 37);
        assert_eq!(Style::DarkGray.code(), 90);
        assert_eq!(Style::White.code(), 97);
        assert_eq!(Style::BlackBg.code(), 40);
        assert_eq!(Style::LightGrayBg.code(), 47);
        assert_eq!(Style::DarkGrayBg.code(), 100);
        assert_eq!(Style::WhiteBg.code(), 107);

        assert_eq!(format!("{}", Style::Reset), "\x1b[0m");
        assert_eq!(format!("{}", Style::Red), "\x1b[31m");
        assert_eq!(format!("{}", Style::LightMagenta), "\x1b[95m");
        assert_eq!(format!("{}", Style::CyanBg), "\x1b[46m");
        assert_eq!(format!("{}", Style::WhiteBg), "\x1b[107m");
    }

    #[test]
    fn test_background_detection() {
        assert!(!Style::Reset.is_background());
        assert!(!Style::Yellow.is_background());
        assert!(!Style::White.is_background());
        assert!(Style::YellowBg.is_background());
        assert!(Style::DarkGrayBg.is_background());
    }

    #[test]
    fn test_attributes() {
        assert_eq!(Style::Reset.attribute(), Attribute::Reset);

        // The console swaps the red and blue bits relative to ANSI.
        assert_eq!(Style::Black.attribute(), Attribute::Foreground(0x0));
        assert_eq!(Style::Blue.attribute(), Attribute::Foreground(0x1));
        assert_eq!(Style::Red.attribute(), Attribute::Foreground(0x4));
        assert_eq!(Style::LightGray.attribute(), Attribute::Foreground(0x7));
        assert_eq!(Style::DarkGray.attribute(), Attribute::Foreground(0x8));
        assert_eq!(Style::White.attribute(), Attribute::Foreground(0xf));

        assert_eq!(Style::BlackBg.attribute(), Attribute::Background(0x00));
        assert_eq!(Style::BlueBg.attribute(), Attribute::Background(0x10));
        assert_eq!(Style::RedBg.attribute(), Attribute::Background(0x40));
        assert_eq!(Style::WhiteBg.attribute(), Attribute::Background(0xf0));
    }

    #[test]
    fn test_attribute_nibbles_disjoint() {
        use self::Style::*;

        for style in [
            Black, Red, Green, Yellow, Blue, Magenta, Cyan, LightGray, DarkGray, LightRed,
            LightGreen, LightYellow, LightBlue, LightMagenta, LightCyan, White,
        ] {
            match style.attribute() {
                Attribute::Foreground(bits) => assert_eq!(bits & !0x0f, 0),
                attribute => panic!("{:?} maps to {:?}", style, attribute),
            }
        }

        for style in [
            BlackBg,
            RedBg,
            GreenBg,
            YellowBg,
            BlueBg,
            MagentaBg,
            CyanBg,
            LightGrayBg,
            DarkGrayBg,
            LightRedBg,
            LightGreenBg,
            LightYellowBg,
            LightBlueBg,
            LightMagentaBg,
            LightCyanBg,
            WhiteBg,
        ] {
            match style.attribute() {
                Attribute::Background(bits) => assert_eq!(bits & !0xf0, 0),
                attribute => panic!("{:?} maps to {:?}", style, attribute),
            }
        }
    }
}
