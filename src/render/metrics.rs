//! Text measurement used to centre strings inside cells and bands.

/// Width of a string set at `size` in the medium's units.
pub trait TextMetrics {
    fn text_width(&self, text: &str, size: f32) -> f32;
}

/// Advance widths of the standard Helvetica faces (1/1000 em), ASCII 32..=126.
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 0..?
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // P.._
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // `..o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // p..~
];

const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '../
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 0..?
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // @..O
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // P.._
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // `..o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // p..~
];

/// Built-in PDF Helvetica (regular or bold).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Helvetica {
    pub bold: bool,
}

impl Helvetica {
    pub const REGULAR: Helvetica = Helvetica { bold: false };
    pub const BOLD: Helvetica = Helvetica { bold: true };

    /// Resource name in the page's font dictionary.
    pub fn resource_name(&self) -> &'static [u8] {
        if self.bold { b"F2" } else { b"F1" }
    }

    pub fn base_font(&self) -> &'static [u8] {
        if self.bold {
            b"Helvetica-Bold"
        } else {
            b"Helvetica"
        }
    }

    fn advance(&self, c: char) -> u16 {
        let table = if self.bold {
            &HELVETICA_BOLD
        } else {
            &HELVETICA
        };
        let base = latin_base(c);
        match base as u32 {
            32..=126 => table[(base as u32 - 32) as usize],
            _ => 556,
        }
    }
}

impl TextMetrics for Helvetica {
    fn text_width(&self, text: &str, size: f32) -> f32 {
        let units: u32 = text.chars().map(|c| self.advance(c) as u32).sum();
        units as f32 * size / 1000.0
    }
}

/// Accented Latin-1 letters measure like their base letter.
fn latin_base(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        '\u{a0}' => ' ',
        other => other,
    }
}

/// Encodes text for a WinAnsi-encoded base font. Characters outside
/// Latin-1 become `?`.
pub fn win_ansi_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c as u32 {
            0x20..=0x7E | 0xA0..=0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}
