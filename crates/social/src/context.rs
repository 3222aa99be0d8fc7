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

use murk_parse::matching::{ObjId, ObjectSearcher, SearchError};
use murk_render::RenderError;

use crate::{
    broadcast::{Broadcast, BroadcastSink, DisplayNames, SinkError},
    config::SocialConfig,
};

/// Everything a social command is allowed to see while it runs: who is
/// acting, how trusted they are, and the handles to the world it may ask
/// questions of. Commands never reach past this.
pub struct CommandContext<'a> {
    pub actor: ObjId,
    /// The actor's permission level, named per the configured hierarchy.
    pub actor_level: &'a str,
    pub config: &'a SocialConfig,
    pub names: &'a dyn DisplayNames,
    pub searcher: &'a dyn ObjectSearcher,
    /// Spoken verb the actor chose earlier with `say/verb`, if any.
    pub say_verb: Option<&'a str>,
}

/// A world-side change a command wants made. Commands cannot touch the
/// world themselves; they hand these back to whoever can.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Effect {
    /// Persist a new spoken verb for the actor.
    SetSayVerb(String),
    /// The actor attempted `verb` on `target`. The embedder owns the lock
    /// check and reports the result through [`verb_outcome`].
    ///
    /// [`verb_outcome`]: crate::pose::verb_outcome
    VerbAttempt { verb: String, target: ObjId },
}

/// What one command run produced: messages to send and changes to make.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CommandOutput {
    pub broadcasts: Vec<Broadcast>,
    pub effects: Vec<Effect>,
}

impl CommandOutput {
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn of(broadcast: Broadcast) -> Self {
        Self {
            broadcasts: vec![broadcast],
            effects: Vec::new(),
        }
    }

    pub fn push(&mut self, broadcast: Broadcast) {
        self.broadcasts.push(broadcast);
    }

    /// Hand every broadcast to the sink, in order.
    pub fn deliver(&self, sink: &dyn BroadcastSink) -> Result<(), SinkError> {
        for broadcast in &self.broadcasts {
            sink.deliver(broadcast.clone())?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum SocialError {
    #[error("Could not render message: {0}")]
    Render(#[from] RenderError),
    #[error("Name search failed: {0}")]
    Search(#[from] SearchError),
}
