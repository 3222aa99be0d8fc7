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

use serde::{Deserialize, Serialize};
use strum::Display;

use crate::{
    justify::{self, Alignment, DEFAULT_INSET, DEFAULT_WIDTH},
    markup,
    template::{self, RenderError},
};

/// How a message is finished for delivery. The spoof modes lay the text
/// out; the others differ only in trust.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Display, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
pub enum RenderMode {
    /// Ordinary in-character traffic. Binding values get their markup
    /// neutralized.
    Plain,
    /// Out-of-character traffic. Rendered like [`Plain`]; the distinction
    /// is for the consumer.
    ///
    /// [`Plain`]: RenderMode::Plain
    Ooc,
    SpoofRight,
    SpoofCenter,
    SpoofIndent,
    SpoofNews,
    /// Trusted literal delivery: bindings go through untouched, markup and
    /// all. For senders privileged enough to forge anything anyway.
    Raw,
}

impl RenderMode {
    fn alignment(self) -> Option<Alignment> {
        match self {
            RenderMode::SpoofRight => Some(Alignment::Right),
            RenderMode::SpoofCenter => Some(Alignment::Center),
            RenderMode::SpoofIndent => Some(Alignment::Indent),
            RenderMode::SpoofNews => Some(Alignment::News),
            RenderMode::Plain | RenderMode::Ooc | RenderMode::Raw => None,
        }
    }
}

impl From<Alignment> for RenderMode {
    fn from(align: Alignment) -> Self {
        match align {
            Alignment::Right => RenderMode::SpoofRight,
            Alignment::Center => RenderMode::SpoofCenter,
            Alignment::Indent => RenderMode::SpoofIndent,
            Alignment::News => RenderMode::SpoofNews,
        }
    }
}

/// Everything [`render`] needs to produce one message: the trusted
/// template, the untrusted bindings, and the layout parameters.
#[derive(Clone, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct RenderRequest {
    pub template: String,
    pub bindings: BTreeMap<String, String>,
    pub mode: RenderMode,
    /// Layout width for the spoof modes. `None` means [`DEFAULT_WIDTH`].
    pub width: Option<usize>,
    /// Left margin for the indented layouts. `None` means
    /// [`DEFAULT_INSET`]. Never allowed past the width.
    pub indent: Option<usize>,
}

impl RenderRequest {
    pub fn new(mode: RenderMode, template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            bindings: BTreeMap::new(),
            mode,
            width: None,
            indent: None,
        }
    }

    #[must_use]
    pub fn bind(mut self, name: &str, value: impl Into<String>) -> Self {
        self.bindings.insert(name.to_string(), value.into());
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }
}

/// Produce the final broadcast string for a request.
///
/// Pure: no clocks, no world, no session. The same request always renders
/// the same text, which is what makes the command layer testable without
/// a server around it.
///
/// In [`Plain`] and [`Ooc`], every pipe in a binding value is doubled
/// before substitution, so player-supplied text displays as typed instead
/// of styling the line. The spoof layouts justify whatever markup they
/// are given, measuring codes as zero-width; [`Raw`] is wholly literal.
/// Trailing whitespace is stripped from every output line.
///
/// [`Plain`]: RenderMode::Plain
/// [`Ooc`]: RenderMode::Ooc
/// [`Raw`]: RenderMode::Raw
pub fn render(request: &RenderRequest) -> Result<String, RenderError> {
    let bindings = match request.mode {
        RenderMode::Plain | RenderMode::Ooc => request
            .bindings
            .iter()
            .map(|(name, value)| (name.clone(), markup::escape(value)))
            .collect(),
        _ => request.bindings.clone(),
    };

    let text = template::substitute(&request.template, &bindings)?;

    let text = match request.mode.alignment() {
        Some(align) => {
            let width = request.width.unwrap_or(DEFAULT_WIDTH);
            let inset = request.indent.unwrap_or(DEFAULT_INSET);
            justify::justify(&text, align, width, inset)
        }
        None => text,
    };

    Ok(text
        .split('\n')
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::markup::strip;

    #[test]
    fn test_plain_render() {
        let request = RenderRequest::new(RenderMode::Plain, "{char} waves.").bind("char", "Rulan");
        assert_eq!(render(&request).unwrap(), "Rulan waves.");
    }

    #[test]
    fn test_plain_escapes_binding_markup() {
        let request = RenderRequest::new(RenderMode::Plain, r#"{char} says, |n"|w{speech}|n""#)
            .bind("char", "Rulan")
            .bind("speech", "look at my |rred|n text");
        let out = render(&request).unwrap();
        assert_eq!(out, "Rulan says, |n\"|wlook at my ||rred||n text|n\"");
        // The doubled pipes display as literal pipes; nothing in the
        // speech styles the line.
        assert_eq!(
            strip(&out),
            "Rulan says, \"look at my |rred|n text\""
        );
    }

    #[test]
    fn test_raw_leaves_bindings_alone() {
        let request = RenderRequest::new(RenderMode::Raw, "{text}").bind("text", "|rall mine|n");
        assert_eq!(render(&request).unwrap(), "|rall mine|n");
    }

    #[test]
    fn test_missing_binding_propagates() {
        let request = RenderRequest::new(RenderMode::Plain, "{absent}");
        assert_eq!(
            render(&request).unwrap_err(),
            RenderError::MissingBinding("absent".to_string())
        );
    }

    #[test]
    fn test_spoof_right() {
        let request = RenderRequest::new(RenderMode::SpoofRight, "{text}")
            .bind("text", "hi")
            .with_width(10);
        assert_eq!(render(&request).unwrap(), "        hi");
    }

    #[test]
    fn test_spoof_keeps_binding_markup_live() {
        let request = RenderRequest::new(RenderMode::SpoofRight, "{text}")
            .bind("text", "|rhi|n")
            .with_width(10);
        // Codes stay live and zero-width, so the visible "hi" still lands
        // on the right margin.
        assert_eq!(render(&request).unwrap(), "        |rhi|n");
    }

    #[test]
    fn test_spoof_center() {
        let request = RenderRequest::new(RenderMode::SpoofCenter, "{text}")
            .bind("text", "hi")
            .with_width(11);
        assert_eq!(render(&request).unwrap(), "    hi");
    }

    #[test]
    fn test_spoof_indent_default_inset() {
        let request = RenderRequest::new(RenderMode::SpoofIndent, "{text}").bind("text", "margin");
        assert_eq!(
            render(&request).unwrap(),
            format!("{}margin", " ".repeat(DEFAULT_INSET))
        );
    }

    #[test]
    fn test_spoof_news() {
        let request = RenderRequest::new(RenderMode::SpoofNews, "{text}")
            .bind("text", "aaa cc dd ee")
            .with_width(12)
            .with_indent(4);
        assert_eq!(render(&request).unwrap(), "    aaa   cc\n    dd ee");
    }

    #[test]
    fn test_trailing_whitespace_goes() {
        let request = RenderRequest::new(RenderMode::Plain, "{text}").bind("text", "hi   ");
        assert_eq!(render(&request).unwrap(), "hi");
    }

    #[test]
    fn test_trailing_whitespace_goes_per_line() {
        let request = RenderRequest::new(RenderMode::Plain, "a  \nb\t\nc");
        assert_eq!(render(&request).unwrap(), "a\nb\nc");
    }

    #[test]
    fn test_blank_centered_line_collapses() {
        let request = RenderRequest::new(RenderMode::SpoofCenter, "{text}")
            .bind("text", "")
            .with_width(20);
        assert_eq!(render(&request).unwrap(), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let request = RenderRequest::new(RenderMode::SpoofNews, "{text}")
            .bind("text", "same in, same out, every time")
            .with_width(30)
            .with_indent(6);
        assert_eq!(render(&request).unwrap(), render(&request).unwrap());
    }

    #[test]
    fn test_mode_display_names() {
        assert_eq!(RenderMode::SpoofRight.to_string(), "spoof_right");
        assert_eq!(RenderMode::Plain.to_string(), "plain");
    }

    #[test]
    fn test_alignment_to_mode() {
        assert_eq!(RenderMode::from(Alignment::News), RenderMode::SpoofNews);
    }
}
