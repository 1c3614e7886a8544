//! Path separator normalization.
//!
//! Every occurrence of the foreign separator is replaced by the canonical
//! one. It runs once over the finished expansion, so substituted values are
//! normalized too.

/// The canonical path separator and the foreign one it replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub canonical: char,
    pub foreign: char,
}

impl Separators {
    pub const fn new(canonical: char, foreign: char) -> Self {
        Self { canonical, foreign }
    }

    /// `/` canonical, `\` foreign.
    pub const fn unix() -> Self {
        Self::new('/', '\\')
    }

    /// `\` canonical, `/` foreign.
    pub const fn windows() -> Self {
        Self::new('\\', '/')
    }

    /// The pair for the platform this binary was built for.
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }

    pub fn normalize(&self, s: &str) -> String {
        let mut out = s.to_string();
        self.normalize_in_place(&mut out);
        out
    }

    /// Normalize an owned string, reusing its allocation when both
    /// separators are single bytes.
    pub fn normalize_in_place(&self, s: &mut String) {
        if self.canonical == self.foreign || !s.contains(self.foreign) {
            return;
        }

        if self.canonical.is_ascii() && self.foreign.is_ascii() {
            let (canonical, foreign) = (self.canonical as u8, self.foreign as u8);
            let mut bytes = std::mem::take(s).into_bytes();
            for byte in bytes.iter_mut().filter(|b| **b == foreign) {
                *byte = canonical;
            }
            // Swapping one ASCII byte for another keeps the buffer valid UTF-8.
            *s = String::from_utf8(bytes)
                .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned());
        } else {
            let mut buf = [0u8; 4];
            *s = s.replace(self.foreign, self.canonical.encode_utf8(&mut buf));
        }
    }
}

impl Default for Separators {
    fn default() -> Self {
        Self::native()
    }
}

/// Replace every `foreign_separator` in `s` with `separator`.
pub fn normalize(s: &str, separator: char, foreign_separator: char) -> String {
    Separators::new(separator, foreign_separator).normalize(s)
}
