//! On-screen width of composed prompt text.
//!
//! Escape sequences occupy no cells, so they are stripped before measuring:
//! - CSI: `ESC [` parameters, final byte 0x40-0x7E
//! - OSC, DCS, PM, APC: terminated by BEL or `ESC \`
//! - any other `ESC` + one char
//!
//! Remaining control characters (`\n`, `\t`, BEL, ...) count zero cells.

use std::borrow::Cow;
use unicode_width::UnicodeWidthChar;

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Number of terminal cells `text` occupies once printed.
pub fn visual_length(text: &str) -> usize {
    strip_ansi(text)
        .chars()
        .filter(|c| !c.is_control())
        .map(|c| c.width().unwrap_or(0))
        .sum()
}

/// Remove escape sequences. Borrows when there is nothing to strip.
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.as_bytes().contains(&ESC) {
        return Cow::Borrowed(text);
    }

    let bytes = text.as_bytes();
    let mut stripped = String::with_capacity(text.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == ESC {
            i = skip_escape(bytes, i);
            continue;
        }
        // ESC is ASCII, so cutting at it never splits a UTF-8 sequence.
        let start = i;
        while i < bytes.len() && bytes[i] != ESC {
            i += 1;
        }
        stripped.push_str(&text[start..i]);
    }

    Cow::Owned(stripped)
}

/// `pos` points at ESC; returns the index after the sequence.
fn skip_escape(bytes: &[u8], pos: usize) -> usize {
    let next = pos + 1;
    match bytes.get(next) {
        None => bytes.len(),
        Some(b'[') => skip_csi(bytes, next + 1),
        Some(b']' | b'P' | b'^' | b'_') => skip_string(bytes, next + 1),
        // A lone ESC before a multi-byte char only eats the ESC.
        Some(b) if !b.is_ascii() => next,
        Some(_) => next + 1,
    }
}

fn skip_csi(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            0x40..=0x7E => return i + 1,
            0x20..=0x3F => i += 1,
            // Malformed: stop here and keep the byte as text.
            _ => return i,
        }
    }
    bytes.len()
}

fn skip_string(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() {
        match bytes[i] {
            BEL => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}
