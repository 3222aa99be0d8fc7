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

use serde::{Deserialize, Serialize};

/// The decomposition of one MUX-style command line:
///
/// ```text
/// command[/switch[/switch ...]] arg1[, arg2, ...][ = arg1[, arg2, ...]]
/// ```
///
/// Produced by [`parse`], which always succeeds. Text that does not fit the
/// shape above simply ends up in `args` untouched, and the command itself
/// decides what to make of it.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ParsedCommand {
    /// The name or alias the dispatcher matched this line against. Carried
    /// through verbatim, since several commands change behavior based on
    /// which alias invoked them.
    pub command_name: String,
    /// Switch tokens from the leading `/...` block, lowercased, in first
    /// occurrence order, duplicates dropped.
    pub switches: Vec<String>,
    /// The input exactly as given, whitespace and all.
    pub raw: String,
    /// The input with the switch block removed and `\=` escapes resolved,
    /// trimmed of surrounding whitespace.
    pub args: String,
    /// Everything left of the first unescaped `=` in `args`, trimmed. Equal
    /// to `args` when there is no unescaped `=`.
    pub lhs: String,
    /// Everything right of the first unescaped `=`, trimmed, or `None` when
    /// the input has no unescaped `=`. An empty right half (`foo =`) is
    /// `Some("")`, which is distinct from the `=` being absent.
    pub rhs: Option<String>,
    /// `lhs` split on commas, each element trimmed. Empty when `lhs` is.
    pub lhs_list: Vec<String>,
    /// `rhs` split on commas, each element trimmed. Empty when `rhs` is
    /// `None` or empty.
    pub rhs_list: Vec<String>,
    /// `args` split on whitespace. The `=` shows up here as a token of its
    /// own when it was surrounded by spaces.
    pub arg_list: Vec<String>,
}

impl ParsedCommand {
    /// True when `name` was given exactly as a switch.
    #[must_use]
    pub fn has_switch_exact(&self, name: &str) -> bool {
        self.switches.iter().any(|s| s == name)
    }

    /// True when `name` or any leading abbreviation of it was given as a
    /// switch, so `/o` answers for `ooc`. Whether an abbreviation is
    /// unambiguous enough to honor is the calling command's problem.
    #[must_use]
    pub fn has_switch(&self, name: &str) -> bool {
        self.switches.iter().any(|s| name.starts_with(s.as_str()))
    }
}

/// Split a raw command line into its MUX constituents.
///
/// This never fails. Unparseable input degrades to "the whole thing is
/// `args`" rather than an error, matching the tradition that the command
/// line reader has no opinions and the individual commands have all of them.
#[must_use]
#[tracing::instrument]
pub fn parse(command_name: &str, raw: &str) -> ParsedCommand {
    let trimmed = raw.trim();
    let (switches, remainder) = split_switch_block(trimmed);
    let (args, split_at) = resolve_equals(remainder.trim());

    let (lhs, rhs) = match split_at {
        Some(at) => {
            let lhs = args[..at].trim().to_string();
            let rhs = args[at + 1..].trim().to_string();
            (lhs, Some(rhs))
        }
        None => (args.clone(), None),
    };

    let lhs_list = comma_list(&lhs);
    let rhs_list = rhs.as_deref().map(comma_list).unwrap_or_default();
    let arg_list = args.split_whitespace().map(str::to_string).collect();

    ParsedCommand {
        command_name: command_name.to_string(),
        switches,
        raw: raw.to_string(),
        args,
        lhs,
        rhs,
        lhs_list,
        rhs_list,
        arg_list,
    }
}

/// Peel the `/switch/switch` block off the front of the (already trimmed)
/// input, if there is one. Switches end at the first whitespace; a `/`
/// appearing later in the line is just text.
fn split_switch_block(trimmed: &str) -> (Vec<String>, &str) {
    if !trimmed.starts_with('/') {
        return (Vec::new(), trimmed);
    }
    let block_end = trimmed
        .find(char::is_whitespace)
        .unwrap_or(trimmed.len());
    let (block, remainder) = trimmed.split_at(block_end);

    let mut switches: Vec<String> = Vec::new();
    for piece in block.split('/') {
        if piece.is_empty() {
            continue;
        }
        let lowered = piece.to_lowercase();
        if !switches.contains(&lowered) {
            switches.push(lowered);
        }
    }
    (switches, remainder)
}

/// Resolve `\=` escapes and report the byte offset of the first unescaped
/// `=` in the resolved text, if any. A trailing backslash is kept literal.
fn resolve_equals(text: &str) -> (String, Option<usize>) {
    let mut resolved = String::with_capacity(text.len());
    let mut split_at = None;
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('=') => resolved.push('='),
                Some(other) => {
                    resolved.push('\\');
                    resolved.push(other);
                }
                None => resolved.push('\\'),
            },
            '=' => {
                if split_at.is_none() {
                    split_at = Some(resolved.len());
                }
                resolved.push('=');
            }
            _ => resolved.push(c),
        }
    }
    (resolved, split_at)
}

/// Comma-split with per-element trim. Empty or blank input yields an empty
/// vector rather than a vector of one empty string.
fn comma_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|piece| piece.trim().to_string()).collect()
}
