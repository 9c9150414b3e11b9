//! Reversible binary-to-text codec for symbol payloads
//!
//! Maps arbitrary bytes onto the 85-character printable alphabet
//! `!`..`u`, with `z` as shorthand for a full all-zero group. Symbol
//! engines accept this alphabet natively, so the symbol layer only ever
//! sees printable text. Four input bytes become five output characters
//! (worst case; zero groups compress to one), a trailing partial group
//! of n bytes becomes n+1 characters.

use crate::constants::{ALPHABET_FIRST, ALPHABET_LAST, GROUP_BYTES, GROUP_CHARS, ZERO_GROUP};
use crate::error::CodecError;

const BASE: u64 = 85;

/// Highest digit value, used to pad a truncated final group on decode
const PAD_DIGIT: u8 = ALPHABET_LAST - ALPHABET_FIRST;

/// Encode bytes as printable text.
///
/// Total and deterministic over all inputs; empty input produces empty
/// output. The exact inverse is [`decode`].
pub fn encode(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() / GROUP_BYTES * GROUP_CHARS + GROUP_CHARS);

    let mut groups = data.chunks_exact(GROUP_BYTES);
    for group in &mut groups {
        let value = u32::from_be_bytes([group[0], group[1], group[2], group[3]]);
        if value == 0 {
            out.push(ZERO_GROUP as char);
        } else {
            push_digits(&mut out, value, GROUP_CHARS);
        }
    }

    let tail = groups.remainder();
    if !tail.is_empty() {
        let mut padded = [0u8; GROUP_BYTES];
        padded[..tail.len()].copy_from_slice(tail);
        let value = u32::from_be_bytes(padded);
        // No shorthand for partial groups, even all-zero ones
        push_digits(&mut out, value, tail.len() + 1);
    }

    out
}

/// Decode text produced by [`encode`] back into bytes.
///
/// Fails with [`CodecError::MalformedPayload`] on characters outside the
/// alphabet, `z` inside a group, a one-character final group, or a group
/// whose value does not fit in 32 bits. Never returns wrong bytes
/// silently.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut out = Vec::with_capacity(text.len() / GROUP_CHARS * GROUP_BYTES + GROUP_BYTES);
    let mut digits = [0u8; GROUP_CHARS];
    let mut filled = 0usize;

    for (offset, byte) in text.bytes().enumerate() {
        match byte {
            ZERO_GROUP => {
                if filled != 0 {
                    return Err(CodecError::MalformedPayload(format!(
                        "shorthand 'z' inside a group at offset {}",
                        offset
                    )));
                }
                out.extend_from_slice(&[0u8; GROUP_BYTES]);
            }
            ALPHABET_FIRST..=ALPHABET_LAST => {
                digits[filled] = byte - ALPHABET_FIRST;
                filled += 1;
                if filled == GROUP_CHARS {
                    let value = group_value(&digits)?;
                    out.extend_from_slice(&value.to_be_bytes());
                    filled = 0;
                }
            }
            _ => {
                return Err(CodecError::MalformedPayload(format!(
                    "byte {:#04x} at offset {} outside alphabet",
                    byte, offset
                )));
            }
        }
    }

    match filled {
        0 => {}
        1 => {
            return Err(CodecError::MalformedPayload(
                "truncated final group of one character".to_string(),
            ));
        }
        n => {
            // Pad with the highest digit; the padding never carries into
            // the n-1 real bytes of the group
            for slot in digits[n..].iter_mut() {
                *slot = PAD_DIGIT;
            }
            let value = group_value(&digits)?;
            out.extend_from_slice(&value.to_be_bytes()[..n - 1]);
        }
    }

    Ok(out)
}

fn push_digits(out: &mut String, value: u32, count: usize) {
    let mut digits = [0u8; GROUP_CHARS];
    let mut rest = value as u64;
    for digit in digits.iter_mut().rev() {
        *digit = (rest % BASE) as u8;
        rest /= BASE;
    }
    for &digit in &digits[..count] {
        out.push((ALPHABET_FIRST + digit) as char);
    }
}

fn group_value(digits: &[u8; GROUP_CHARS]) -> Result<u32, CodecError> {
    let mut value = 0u64;
    for &digit in digits {
        value = value * BASE + digit as u64;
    }
    u32::try_from(value)
        .map_err(|_| CodecError::MalformedPayload("group value exceeds 32 bits".to_string()))
}
