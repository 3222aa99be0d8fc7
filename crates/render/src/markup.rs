// Copyright (C) 2025 Ryan Daum <ryan.daum@gmail.com> This program is free
// software: you can redistribute it and/or modify it under the terms of the GNU
// General Public License as published by the Free Software Foundation, version
// 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//

//! The pipe markup carried inside message text, and what this crate needs
//! to know about it: how wide a string looks on screen, how to remove the
//! markup, and how to neutralize it.
//!
//! Sequences recognized after `|`:
//!
//! ```text
//! ||        literal pipe (one column)
//! |n        style reset
//! |r .. |x  foreground colors, uppercase for the bright set
//! |h |u |i |s   hilight, underline, italic, strike
//! |*        inverse video
//! |/        line break
//! |-        tab, rendered as a single space
//! |_        forced space
//! |123      xterm foreground, exactly three digits
//! |=a       grayscale foreground, a-z
//! |[r |[123 |[=a   background forms of the same
//! ```
//!
//! Anything else after a `|` is not markup; the pipe is just a pipe.

/// The character that introduces markup sequences.
pub const MARKUP_CHAR: char = '|';

/// Single letters that are live style codes when they follow a pipe.
const STYLE_LETTERS: &[u8] = b"nrgybmcwxRGYBMCWXhuis";

struct Code {
    /// Bytes consumed from the input, the pipe included.
    len: usize,
    /// Columns the sequence occupies on screen.
    width: usize,
    /// What the sequence leaves behind when markup is stripped.
    strip_as: Option<char>,
}

/// Decode the markup sequence at the head of `rest`, which must begin with
/// the pipe. `None` means the pipe is literal text.
fn code_at(rest: &str) -> Option<Code> {
    let b = rest.as_bytes();
    debug_assert_eq!(b.first(), Some(&(MARKUP_CHAR as u8)));

    let three_digits = |at: usize| {
        b.len() >= at + 3 && b[at..at + 3].iter().all(u8::is_ascii_digit)
    };

    match *b.get(1)? {
        b'|' => Some(Code { len: 2, width: 1, strip_as: Some('|') }),
        b'/' => Some(Code { len: 2, width: 0, strip_as: Some('\n') }),
        b'-' => Some(Code { len: 2, width: 1, strip_as: Some(' ') }),
        b'_' => Some(Code { len: 2, width: 1, strip_as: Some(' ') }),
        b'*' => Some(Code { len: 2, width: 0, strip_as: None }),
        b'[' => match *b.get(2)? {
            b'=' if b.get(3).is_some_and(u8::is_ascii_lowercase) => {
                Some(Code { len: 4, width: 0, strip_as: None })
            }
            d if d.is_ascii_digit() && three_digits(2) => {
                Some(Code { len: 5, width: 0, strip_as: None })
            }
            c if c.is_ascii_alphabetic() => Some(Code { len: 3, width: 0, strip_as: None }),
            _ => None,
        },
        b'=' if b.get(2).is_some_and(u8::is_ascii_lowercase) => {
            Some(Code { len: 3, width: 0, strip_as: None })
        }
        d if d.is_ascii_digit() && three_digits(1) => {
            Some(Code { len: 4, width: 0, strip_as: None })
        }
        c if STYLE_LETTERS.contains(&c) => Some(Code { len: 2, width: 0, strip_as: None }),
        _ => None,
    }
}

/// Double every pipe so the text displays as typed instead of styling
/// anything. Stripping the result gives back the original.
#[must_use]
pub fn escape(text: &str) -> String {
    text.replace(MARKUP_CHAR, "||")
}

/// Double braces so text can be spliced into a message template without
/// opening a placeholder.
#[must_use]
pub fn escape_braces(text: &str) -> String {
    text.replace('{', "{{").replace('}', "}}")
}

/// Remove markup, leaving plain text. Pipes written as `||` come back as
/// single pipes; `|/`, `|-` and `|_` leave the whitespace they stood for.
#[must_use]
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while !rest.is_empty() {
        if rest.starts_with(MARKUP_CHAR)
            && let Some(code) = code_at(rest)
        {
            if let Some(c) = code.strip_as {
                out.push(c);
            }
            rest = &rest[code.len..];
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }
    out
}

/// Columns this text occupies, counting markup as zero-width (or one, for
/// the space-like codes). Line break codes count zero; measuring text that
/// spans lines is the caller's mistake.
#[must_use]
pub fn display_width(text: &str) -> usize {
    let mut width = 0;
    let mut rest = text;
    while !rest.is_empty() {
        if rest.starts_with(MARKUP_CHAR)
            && let Some(code) = code_at(rest)
        {
            width += code.width;
            rest = &rest[code.len..];
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        width += 1;
        rest = &rest[c.len_utf8()..];
    }
    width
}

/// Split so the left side occupies at most `width` columns, never cutting
/// a markup sequence in half. Zero-width sequences stick to the left side.
#[must_use]
pub fn split_at_visible(text: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    let mut idx = 0;
    let mut rest = text;
    while !rest.is_empty() {
        if rest.starts_with(MARKUP_CHAR)
            && let Some(code) = code_at(rest)
        {
            if code.width > 0 && used + code.width > width {
                break;
            }
            used += code.width;
            idx += code.len;
            rest = &rest[code.len..];
            continue;
        }
        let Some(c) = rest.chars().next() else { break };
        if used + 1 > width {
            break;
        }
        used += 1;
        idx += c.len_utf8();
        rest = &rest[c.len_utf8()..];
    }
    text.split_at(idx)
}
