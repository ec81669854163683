//! Locale-aware rendering of [`UInt128`] values: native digit glyphs and
//! thousands grouping.

use alloc::string::String;
use core::iter;

use crate::IntError;
use crate::UInt128;
use crate::decimal::MAX_DIGITS;

const NBSP: char = '\u{a0}';
const ARABIC_SEPARATOR: char = '\u{66c}';

const WESTERN_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];
const ARABIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const PERSIAN_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];
const BENGALI_DIGITS: [char; 10] = ['০', '১', '২', '৩', '৪', '৫', '৬', '৭', '৮', '৯'];
const DEVANAGARI_DIGITS: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];
const MYANMAR_DIGITS: [char; 10] = ['၀', '၁', '၂', '၃', '၄', '၅', '၆', '၇', '၈', '၉'];

const THOUSANDS: &[usize] = &[3];
const LAKH: &[usize] = &[3, 2];

/// Number rendering rules for one language.
///
/// Group sizes are listed from the least significant digit; the last size
/// repeats for the rest of the number, so `[3]` gives `1,234,567` and
/// `[3, 2]` gives `12,34,567`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    separator: char,
    grouping: &'static [usize],
    digits: &'static [char; 10],
}

const fn locale(
    separator: char,
    grouping: &'static [usize],
    digits: &'static [char; 10],
) -> Locale {
    Locale {
        separator,
        grouping,
        digits,
    }
}

const DOT: Locale = locale('.', THOUSANDS, &WESTERN_DIGITS);
const COMMA: Locale = locale(',', THOUSANDS, &WESTERN_DIGITS);
const SPACE: Locale = locale(NBSP, THOUSANDS, &WESTERN_DIGITS);
const INDIAN: Locale = locale(',', LAKH, &WESTERN_DIGITS);

// sorted by tag for binary search
static LOCALES: &[(&str, Locale)] = &[
    ("af", SPACE),
    ("am", COMMA),
    ("ar", locale(ARABIC_SEPARATOR, THOUSANDS, &ARABIC_DIGITS)),
    ("az", DOT),
    ("bg", SPACE),
    ("bn", locale(',', LAKH, &BENGALI_DIGITS)),
    ("ca", DOT),
    ("cs", SPACE),
    ("da", DOT),
    ("de", DOT),
    ("el", DOT),
    ("en", COMMA),
    ("es", DOT),
    ("et", SPACE),
    ("fa", locale(ARABIC_SEPARATOR, THOUSANDS, &PERSIAN_DIGITS)),
    ("fi", SPACE),
    ("fil", COMMA),
    ("fr", SPACE),
    ("gu", INDIAN),
    ("he", COMMA),
    ("hi", INDIAN),
    ("hr", DOT),
    ("hu", SPACE),
    ("hy", SPACE),
    ("id", DOT),
    ("is", DOT),
    ("it", DOT),
    ("ja", COMMA),
    ("ka", SPACE),
    ("kk", SPACE),
    ("km", DOT),
    ("kn", COMMA),
    ("ko", COMMA),
    ("ky", SPACE),
    ("lo", DOT),
    ("lt", SPACE),
    ("lv", SPACE),
    ("mk", DOT),
    ("ml", INDIAN),
    ("mn", COMMA),
    ("mo", DOT),
    ("mr", locale(',', LAKH, &DEVANAGARI_DIGITS)),
    ("ms", COMMA),
    ("mul", COMMA),
    ("my", locale(',', THOUSANDS, &MYANMAR_DIGITS)),
    ("nb", SPACE),
    ("ne", locale(',', THOUSANDS, &DEVANAGARI_DIGITS)),
    ("nl", DOT),
    ("no", COMMA),
    ("pa", INDIAN),
    ("pl", SPACE),
    ("pt", DOT),
    ("ro", DOT),
    ("ru", SPACE),
    ("sh", DOT),
    ("si", COMMA),
    ("sk", SPACE),
    ("sl", DOT),
    ("sq", SPACE),
    ("sr", DOT),
    ("sv", SPACE),
    ("sw", COMMA),
    ("ta", INDIAN),
    ("te", COMMA),
    ("th", COMMA),
    ("tl", COMMA),
    ("tn", COMMA),
    ("tr", DOT),
    ("uk", SPACE),
    ("ur", COMMA),
    ("uz", SPACE),
    ("vi", DOT),
    ("zh", COMMA),
    ("zu", COMMA),
];

impl Locale {
    /// ASCII digits grouped in threes with a comma.
    pub const DEFAULT: Locale = COMMA;

    /// Resolves a language tag such as `de`, `pl_PL.UTF-8` or `fil-PH`.
    ///
    /// The full tag is tried first, then the two- or three-letter language
    /// prefix in front of a `_` or `-`. Unknown tags get [`Locale::DEFAULT`].
    pub fn for_tag(tag: &str) -> Locale {
        if let Some(locale) = lookup(tag) {
            return locale;
        }

        let bytes = tag.as_bytes();
        let prefix = match bytes {
            [_, _, b'_' | b'-', ..] => Some(&tag[..2]),
            [_, _, _, b'_' | b'-', ..] => Some(&tag[..3]),
            _ => None,
        };
        prefix.and_then(lookup).unwrap_or(Self::DEFAULT)
    }

    #[inline(always)]
    pub const fn separator(&self) -> char {
        self.separator
    }

    #[inline(always)]
    pub const fn grouping(&self) -> &'static [usize] {
        self.grouping
    }

    #[inline(always)]
    pub const fn digits(&self) -> &'static [char; 10] {
        self.digits
    }

    /// Renders `value` with this locale's digit glyphs, inserting the
    /// separator between groups when `grouping` is set.
    pub fn format(&self, value: UInt128, grouping: bool) -> String {
        let mut buf = [0u8; MAX_DIGITS];
        let ascii = value.encode_decimal(&mut buf);

        let mut out = String::with_capacity(ascii.len() * 4);
        let len = ascii.len();
        for (i, byte) in ascii.bytes().enumerate() {
            out.push(self.digits[(byte - b'0') as usize]);
            if grouping && self.is_group_boundary(len - i - 1) {
                out.push(self.separator);
            }
        }
        out
    }

    /// Parses a localized numeral.
    ///
    /// ASCII digits and this locale's digit glyphs may be mixed freely and
    /// separators are dropped wherever they appear. Any other character
    /// fails with [`IntError::InvalidSyntax`].
    pub fn parse(&self, s: &str) -> crate::Result<UInt128> {
        let mut ascii = String::with_capacity(s.len());
        for c in s.chars() {
            if c.is_ascii_digit() {
                ascii.push(c);
            } else if let Some(digit) = self.digits.iter().position(|&glyph| glyph == c) {
                ascii.push(char::from(b'0' + digit as u8));
            } else if !self.is_separator(c) {
                return Err(IntError::InvalidSyntax);
            }
        }
        UInt128::parse_decimal(&ascii)
    }

    #[inline]
    fn is_separator(&self, c: char) -> bool {
        c == self.separator || (self.separator == NBSP && c == ' ')
    }

    /// Whether a separator follows the digit that has `remaining` digits
    /// after it.
    fn is_group_boundary(&self, remaining: usize) -> bool {
        let Some(&last) = self.grouping.last() else {
            return false;
        };
        if remaining == 0 || last == 0 {
            return false;
        }

        let mut edge = 0;
        for size in self.grouping.iter().copied().chain(iter::repeat(last)) {
            edge += size;
            if edge >= remaining {
                return edge == remaining;
            }
        }
        false
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[inline]
fn lookup(tag: &str) -> Option<Locale> {
    LOCALES
        .binary_search_by(|(key, _)| (*key).cmp(tag))
        .ok()
        .map(|index| LOCALES[index].1)
}

impl UInt128 {
    /// Formats with thousands grouping for the language `tag`.
    pub fn format_locale(&self, tag: &str) -> String {
        Locale::for_tag(tag).format(*self, true)
    }

    /// Parses a numeral written for the language `tag`.
    pub fn parse_locale(tag: &str, s: &str) -> crate::Result<Self> {
        Locale::for_tag(tag).parse(s)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_locale_roundtrip(a: u128, index in 0..LOCALES.len(), grouping: bool) {
            let locale = LOCALES[index].1;
            let value = UInt128::from(a);
            prop_assert_eq!(locale.parse(&locale.format(value, grouping)), Ok(value));
        }
    }
}
