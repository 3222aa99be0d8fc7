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

use std::collections::BTreeMap;

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum RenderError {
    #[error("No binding for placeholder {{{0}}}")]
    MissingBinding(String),
    #[error("Unclosed placeholder in template")]
    UnclosedPlaceholder,
}

/// Fill `{name}` placeholders from the bindings. `{{` and `}}` are literal
/// braces; a lone closing brace is let through as text.
///
/// Substitution is a single pass: whatever a binding value contains is
/// inserted verbatim and never re-read as template syntax, so values can
/// not smuggle placeholders in. A placeholder with no binding is a hard
/// error rather than a silently half-filled message.
pub fn substitute(
    template: &str,
    bindings: &BTreeMap<String, String>,
) -> Result<String, RenderError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some('{') | None => return Err(RenderError::UnclosedPlaceholder),
                        Some(c) => name.push(c),
                    }
                }
                match bindings.get(&name) {
                    Some(value) => out.push_str(value),
                    None => return Err(RenderError::MissingBinding(name)),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            _ => out.push(c),
        }
    }
    Ok(out)
}
