//! Utilities for generating passwords.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::Password;

/// The requested password length cannot be satisfied by the alphabet.
#[derive(Debug, thiserror::Error)]
#[error("cannot draw {requested} distinct characters from an alphabet of {alphabet_len}")]
pub struct InvalidLengthError {
    pub requested: usize,
    pub alphabet_len: usize,
}

/// Generate a simple, impossible-to-guess password by drawing `length`
/// distinct characters from the given alphabet, in random order.
///
/// These are ugly, hard to remember passwords, but perfect if you're just
/// copying them from a generator. Since the draw is without replacement, the
/// length can be anything up to the full alphabet size, and no character will
/// appear twice.
///
/// Note that `rand`'s `partial_shuffle` is a partial Fisher-Yates walk: the
/// chosen prefix is a uniform draw of `length` distinct elements, in uniform
/// order, so no alphabet position is favored over another.
pub fn sample_password<R>(
    rng: &mut R,
    alphabet: &[char],
    length: usize,
) -> Result<Password, InvalidLengthError>
where
    R: Rng + ?Sized,
{
    if length > alphabet.len() {
        return Err(InvalidLengthError {
            requested: length,
            alphabet_len: alphabet.len(),
        });
    }
    let mut pool = alphabet.to_vec();
    let (drawn, _) = pool.partial_shuffle(rng, length);
    Ok(Password::from(drawn.iter().collect::<String>()))
}
