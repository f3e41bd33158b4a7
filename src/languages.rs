//! The penalty list
//!
//! Each wrong guess costs one language, in list order. Losing every language
//! but the last leaves the world to Assembly.

/// A programming language chip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub name: &'static str,
    /// Chip background as RGB
    pub background: (u8, u8, u8),
    /// Chip text colour as RGB
    pub foreground: (u8, u8, u8),
}

impl Language {
    const fn new(name: &'static str, background: u32, foreground: u32) -> Self {
        Self {
            name,
            background: rgb(background),
            foreground: rgb(foreground),
        }
    }
}

const fn rgb(hex: u32) -> (u8, u8, u8) {
    ((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

const LANGUAGE_COUNT: usize = 9;

/// Languages in the order they are lost
pub static LANGUAGES: [Language; LANGUAGE_COUNT] = [
    Language::new("HTML", 0xE2_68_0F, 0xF9_F4_DA),
    Language::new("CSS", 0x32_8A_F1, 0xF9_F4_DA),
    Language::new("JavaScript", 0xF4_EB_13, 0x1E_1E_1E),
    Language::new("React", 0x2E_D3_E9, 0x1E_1E_1E),
    Language::new("TypeScript", 0x29_8E_C6, 0xF9_F4_DA),
    Language::new("Node.js", 0x59_9E_3B, 0xF9_F4_DA),
    Language::new("Python", 0xFF_D7_42, 0x1E_1E_1E),
    Language::new("Ruby", 0xD0_2B_2B, 0xF9_F4_DA),
    Language::new("Assembly", 0x2D_51_9F, 0xF9_F4_DA),
];

/// Wrong guesses tolerated before the round is lost
pub const ALLOWED_MISTAKES: usize = LANGUAGE_COUNT - 1;

/// The language lost by the `n`th wrong guess (1-based)
#[must_use]
pub fn lost_by_mistake(n: usize) -> Option<&'static Language> {
    n.checked_sub(1).and_then(|i| LANGUAGES.get(i))
}
