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

//! The social command layer: `say`, `pose`/`try`, `ooc`, and `spoof`,
//! dispatched from raw player input to rendered [`Broadcast`] values.
//! Everything here is pure over its inputs; delivery, persistence, and
//! access decisions stay with the embedding host, reached through the
//! collaborator traits ([`DisplayNames`], [`BroadcastSink`], the searcher)
//! and the [`Effect`] values handed back.

pub use broadcast::{
    Audience, Broadcast, BroadcastSink, DisplayNames, MessageKind, NoopSink, RecordingSink,
    SinkError, StaticNames,
};
pub use config::{PermissionHierarchy, SocialConfig};
pub use context::{CommandContext, CommandOutput, Effect, SocialError};
pub use dispatch::dispatch;
pub use pose::{VerbAccess, verb_outcome};

pub mod broadcast;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod ooc;
pub mod pose;
pub mod say;
pub mod spoof;
pub mod tracing;

#[doc(hidden)]
pub mod testing;
