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

//! The `spoof` command: unattributed scene text. Plain spoofs neutralize
//! markup; the layout switches shape the text instead; `/raw` (for the
//! sufficiently privileged) forges anything at all.
//!
//! Spoof switches never abbreviate: `/s` could as easily be `/self` as
//! `/strip`, so only full names count.

use murk_parse::ParsedCommand;
use murk_render::{
    Alignment, RenderMode, RenderRequest, markup, parse_width_inset, render, sanitize_numeric,
};

use crate::{
    broadcast::{Audience, Broadcast, MessageKind},
    context::{CommandContext, CommandOutput, SocialError},
};

/// The typed alias that delivers its argument literally, leading
/// whitespace intact.
pub const LITERAL_ALIAS: &str = ".";

pub fn spoof(ctx: &CommandContext, parsed: &ParsedCommand) -> Result<CommandOutput, SocialError> {
    if parsed.args.is_empty() {
        return Ok(CommandOutput::of(Broadcast::new(
            Audience::ActorOnly,
            MessageKind::System,
            "Usage: spoof[/switch] <message>".to_string(),
        )));
    }

    let audience = if parsed.has_switch_exact("self") {
        Audience::ActorOnly
    } else {
        Audience::Room
    };

    if let Some(align) = requested_alignment(parsed) {
        let (body, width, inset) = layout_parameters(ctx, parsed, align);
        let text = render(
            &RenderRequest::new(RenderMode::from(align), "{text}")
                .bind("text", body)
                .with_width(width)
                .with_indent(inset),
        )?;
        return Ok(CommandOutput::of(Broadcast::new(
            audience,
            MessageKind::Spoof,
            text,
        )));
    }

    if parsed.has_switch_exact("strip") {
        let text = render(
            &RenderRequest::new(RenderMode::Plain, "{text}")
                .bind("text", markup::strip(&parsed.args)),
        )?;
        return Ok(CommandOutput::of(Broadcast::new(
            audience,
            MessageKind::Spoof,
            text,
        )));
    }

    if parsed.has_switch_exact("raw") {
        if !ctx
            .config
            .hierarchy
            .at_least(ctx.actor_level, &ctx.config.raw_spoof_floor)
        {
            return Ok(CommandOutput::of(Broadcast::new(
                Audience::ActorOnly,
                MessageKind::System,
                format!(
                    "Raw spoofing is limited to {} and above.",
                    ctx.config.raw_spoof_floor
                ),
            )));
        }
        let text = render(
            &RenderRequest::new(RenderMode::Raw, "{text}").bind("text", parsed.args.as_str()),
        )?;
        return Ok(CommandOutput::of(Broadcast::new(
            audience,
            MessageKind::Spoof,
            text,
        )));
    }

    // The `.` alias reproduces the line as typed: leading whitespace kept,
    // markup shown rather than rendered.
    let (mode, body) = if parsed.command_name == LITERAL_ALIAS {
        (RenderMode::Plain, parsed.raw.trim_end())
    } else if audience == Audience::ActorOnly {
        // A spoof to yourself keeps its markup live; there is nobody to
        // fool but you.
        (RenderMode::Raw, parsed.args.as_str())
    } else {
        (RenderMode::Plain, parsed.args.as_str())
    };
    let text = render(&RenderRequest::new(mode, "{text}").bind("text", body))?;
    Ok(CommandOutput::of(Broadcast::new(
        audience,
        MessageKind::Spoof,
        text,
    )))
}

/// Indent beats the wrap layouts, center beats right, news takes the rest,
/// matching the switch precedence the command has always had.
fn requested_alignment(parsed: &ParsedCommand) -> Option<Alignment> {
    if parsed.has_switch_exact("indent") {
        Some(Alignment::Indent)
    } else if parsed.has_switch_exact("center") {
        Some(Alignment::Center)
    } else if parsed.has_switch_exact("right") {
        Some(Alignment::Right)
    } else if parsed.has_switch_exact("news") {
        Some(Alignment::News)
    } else {
        None
    }
}

/// Split body text from layout numbers. With a `=` the left side is the
/// body and the right side holds the numbers; without one the whole
/// argument is body and the configured width/inset apply. Explicitly
/// given numbers always win over configuration.
fn layout_parameters<'p>(
    ctx: &CommandContext,
    parsed: &'p ParsedCommand,
    align: Alignment,
) -> (&'p str, usize, usize) {
    match align {
        Alignment::Indent => match &parsed.rhs {
            Some(rhs) => (
                parsed.lhs.as_str(),
                ctx.config.width,
                sanitize_numeric(rhs, ctx.config.inset),
            ),
            None => (parsed.args.as_str(), ctx.config.width, ctx.config.inset),
        },
        _ => match &parsed.rhs {
            Some(rhs) => {
                let params: Vec<&str> = rhs.split_whitespace().collect();
                if params.is_empty() {
                    (parsed.lhs.as_str(), ctx.config.width, ctx.config.inset)
                } else {
                    let (width, inset) = parse_width_inset(&params);
                    (parsed.lhs.as_str(), width, inset)
                }
            }
            None => (parsed.args.as_str(), ctx.config.width, ctx.config.inset),
        },
    }
}
