//! Character classes and the construction of the sampling alphabet.

use serde::{Deserialize, Serialize};

static UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
static LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
static DIGITS: &str = "0123456789";
static SYMBOLS: &str = ",./;'[]{}()*&%$#@!\\?-+_<>=~^";

/// One of the fixed categories of characters a password can draw from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CharacterClass {
    Uppercase,
    Lowercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// The characters making up this class, in their fixed order.
    ///
    /// Note that the interactive preset additionally appends a space to the
    /// symbol class; see [`AlphabetSpec::alphabet`].
    pub fn chars(self) -> &'static str {
        match self {
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Which character classes go into the sampling alphabet.
///
/// The alphabet is the concatenation of the enabled classes, always in the
/// order uppercase, lowercase, digits, symbols. The two presets differ only
/// in whether the symbol class carries a trailing space: the interactive one
/// keeps it (91 characters in total), the batch one leaves it out (90).
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AlphabetSpec {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Append a space to the symbol class.
    #[serde(default)]
    pub symbol_space: bool,
}

impl AlphabetSpec {
    /// All four classes enabled, space included.
    pub fn interactive() -> AlphabetSpec {
        AlphabetSpec {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
            symbol_space: true,
        }
    }

    /// All four classes enabled, no space.
    pub fn batch() -> AlphabetSpec {
        AlphabetSpec {
            symbol_space: false,
            ..AlphabetSpec::interactive()
        }
    }

    pub fn enabled_classes(&self) -> impl Iterator<Item = CharacterClass> {
        [
            (self.uppercase, CharacterClass::Uppercase),
            (self.lowercase, CharacterClass::Lowercase),
            (self.digits, CharacterClass::Digits),
            (self.symbols, CharacterClass::Symbols),
        ]
        .into_iter()
        .filter_map(|(enabled, class)| enabled.then_some(class))
    }

    /// Concatenate the enabled classes into the flat alphabet to sample from.
    pub fn alphabet(&self) -> Vec<char> {
        let mut alphabet = Vec::new();
        for class in self.enabled_classes() {
            alphabet.extend(class.chars().chars());
        }
        if self.symbols && self.symbol_space {
            alphabet.push(' ');
        }
        alphabet
    }
}

impl Default for AlphabetSpec {
    fn default() -> AlphabetSpec {
        AlphabetSpec::interactive()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn preset_sizes() {
        assert_eq!(AlphabetSpec::interactive().alphabet().len(), 91);
        assert_eq!(AlphabetSpec::batch().alphabet().len(), 90);
    }

    #[test]
    fn presets_differ_only_in_the_space() {
        let interactive = AlphabetSpec::interactive().alphabet();
        let batch = AlphabetSpec::batch().alphabet();
        assert_eq!(&interactive[..interactive.len() - 1], &batch[..]);
        assert_eq!(interactive.last(), Some(&' '));
        assert!(!batch.contains(&' '));
    }

    #[test]
    fn no_duplicate_characters() {
        let alphabet = AlphabetSpec::interactive().alphabet();
        let distinct: HashSet<char> = alphabet.iter().copied().collect();
        assert_eq!(distinct.len(), alphabet.len());
    }

    #[test]
    fn classes_concatenate_in_fixed_order() {
        let alphabet: String = AlphabetSpec::batch().alphabet().into_iter().collect();
        let expected = format!(
            "{}{}{}{}",
            CharacterClass::Uppercase.chars(),
            CharacterClass::Lowercase.chars(),
            CharacterClass::Digits.chars(),
            CharacterClass::Symbols.chars(),
        );
        assert_eq!(alphabet, expected);
    }

    #[test]
    fn disabled_classes_are_left_out() {
        let spec = AlphabetSpec {
            digits: false,
            ..AlphabetSpec::interactive()
        };
        let alphabet = spec.alphabet();
        assert_eq!(alphabet.len(), 81);
        assert!(!alphabet.iter().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn all_classes_disabled_gives_an_empty_alphabet() {
        let spec = AlphabetSpec {
            uppercase: false,
            lowercase: false,
            digits: false,
            symbols: false,
            symbol_space: true,
        };
        assert!(spec.alphabet().is_empty());
    }

    #[test]
    fn space_needs_the_symbol_class() {
        let spec = AlphabetSpec {
            symbols: false,
            ..AlphabetSpec::interactive()
        };
        assert!(!spec.alphabet().contains(&' '));
    }
}
