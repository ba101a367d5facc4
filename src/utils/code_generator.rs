//! Short code generation and shape validation.
//!
//! Provides cryptographically secure random code generation and a shape
//! predicate used by the redirect path.

use regex::Regex;
use std::sync::LazyLock;

/// Alphabet codes are drawn from: 62 alphanumeric symbols.
const CODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Fixed length of every generated code.
pub const CODE_LENGTH: usize = 6;

/// Compiled regex describing the only valid code shape.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{6}$").unwrap());

/// Generates a cryptographically secure random short code.
///
/// Draws 6 characters uniformly from the 62-symbol alphanumeric alphabet.
/// Entropy comes from the operating system RNG via `getrandom`; bytes of
/// 248 and above are rejected so that `byte % 62` stays uniform.
///
/// Collision probability per draw is `1/62^6` against an empty store and
/// grows linearly with the stored population; the allocator retries on
/// collision.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
pub fn generate_code() -> String {
    // Largest multiple of 62 that fits in a byte; values above it would
    // bias the modulo towards the low end of the alphabet.
    const REJECT_ABOVE: u8 = (u8::MAX / CODE_ALPHABET.len() as u8) * CODE_ALPHABET.len() as u8;

    let mut code = String::with_capacity(CODE_LENGTH);
    let mut buffer = [0u8; 16];

    while code.len() < CODE_LENGTH {
        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        for &byte in &buffer {
            if byte < REJECT_ABOVE {
                code.push(CODE_ALPHABET[(byte % CODE_ALPHABET.len() as u8) as usize] as char);
                if code.len() == CODE_LENGTH {
                    break;
                }
            }
        }
    }

    code
}

/// Returns whether `code` has the shape of a generated short code.
///
/// The redirect path uses this to answer `404` for impossible codes
/// without touching the store.
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}
