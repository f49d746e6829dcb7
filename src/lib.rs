use serde::{Deserialize, Serialize};

mod alphabet;
pub mod sampling;

pub use alphabet::{AlphabetSpec, CharacterClass};
pub use sampling::{sample_password, InvalidLengthError};

/// A generated password.
///
/// The wrapper keeps the characters out of `{:?}` output, so a password never
/// ends up in a panic message or an error chain by accident.
#[derive(Clone, Eq, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Password(String);

opaque_debug::implement!(Password);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Password {
    fn from(s: String) -> Password {
        Password(s)
    }
}
