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

use itertools::{Itertools, Position};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::markup;

/// Column the fancier spoof layouts work against when the player names
/// none.
pub const DEFAULT_WIDTH: usize = 72;
/// Default left margin for the indented and newspaper layouts.
pub const DEFAULT_INSET: usize = 20;

/// How justified text hangs on the screen. The string forms are the switch
/// names players type, so `"right".parse()` works.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
pub enum Alignment {
    /// Flush against the right edge of the column.
    Right,
    /// Centered in the column.
    Center,
    /// Pushed right by a fixed margin, no wrapping.
    Indent,
    /// Newspaper style: a narrow column, flush on both edges except the
    /// last line of each paragraph.
    News,
}

/// Extract the digits of a free-text numeric parameter. Everything that is
/// not a digit is discarded, so "40 cols" reads as 40; no digits at all
/// reads as `default`.
#[must_use]
pub fn sanitize_numeric(text: &str, default: usize) -> usize {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return default;
    }
    digits.parse().unwrap_or(default)
}

/// Read width and inset out of whatever the player put after the `=`. One
/// number is a width; two are taken as width and inset with the larger one
/// the width, whichever order they were typed. The inset never exceeds the
/// width.
#[must_use]
pub fn parse_width_inset(params: &[&str]) -> (usize, usize) {
    match params {
        [] => (DEFAULT_WIDTH, DEFAULT_INSET),
        [only] => {
            let width = sanitize_numeric(only, DEFAULT_WIDTH);
            (width, DEFAULT_INSET.min(width))
        }
        [first, second, ..] => {
            let a = sanitize_numeric(first, DEFAULT_WIDTH);
            let b = sanitize_numeric(second, DEFAULT_INSET);
            (a.max(b), a.min(b))
        }
    }
}

/// Greedy word wrap to a visible width. Words wider than the whole column
/// get hard-broken. A line with no words wraps to one empty line, keeping
/// paragraph breaks visible.
#[must_use]
pub fn wrap(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in line.split_whitespace() {
        let mut word = word;
        let mut word_width = markup::display_width(word);

        while word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let (head, tail) = markup::split_at_visible(word, width);
            lines.push(head.to_string());
            word = tail;
            word_width = markup::display_width(word);
        }
        if word.is_empty() {
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pad the gaps between words until the line reaches `target` columns,
/// left gaps first. Single words have no gaps to stretch.
fn full_justify(line: &str, target: usize) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.len() < 2 {
        return line.to_string();
    }
    let content: usize = words.iter().map(|w| markup::display_width(w)).sum();
    let gaps = words.len() - 1;
    let deficit = target.saturating_sub(content + gaps);
    let base = 1 + deficit / gaps;
    let extra = deficit % gaps;

    let mut out = String::with_capacity(target);
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let pad = base + usize::from(i <= extra);
            out.push_str(&" ".repeat(pad));
        }
        out.push_str(word);
    }
    out
}

/// Lay text out in the given alignment. Input newlines are paragraph
/// breaks and survive; wrapping happens within each paragraph. Width is
/// measured visibly, so markup does not throw the margins off.
#[must_use]
pub fn justify(text: &str, align: Alignment, width: usize, inset: usize) -> String {
    let width = width.max(1);
    let inset = inset.min(width);

    let mut out_lines = Vec::new();
    for line in text.split('\n') {
        match align {
            Alignment::Right => {
                for wrapped in wrap(line, width) {
                    let pad = width.saturating_sub(markup::display_width(&wrapped));
                    out_lines.push(format!("{}{}", " ".repeat(pad), wrapped));
                }
            }
            Alignment::Center => {
                for wrapped in wrap(line, width) {
                    let pad = width.saturating_sub(markup::display_width(&wrapped)) / 2;
                    out_lines.push(format!("{}{}", " ".repeat(pad), wrapped));
                }
            }
            Alignment::Indent => {
                out_lines.push(format!("{}{}", " ".repeat(inset), line));
            }
            Alignment::News => {
                let column = (width - inset).max(1);
                for (position, wrapped) in wrap(line, column).iter().with_position() {
                    let filled = match position {
                        Position::Last | Position::Only => wrapped.clone(),
                        Position::First | Position::Middle => full_justify(wrapped, column),
                    };
                    out_lines.push(format!("{}{}", " ".repeat(inset), filled));
                }
            }
        }
    }
    out_lines.join("\n")
}
