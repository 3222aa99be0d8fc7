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

//! Ready-made world for exercising commands without a server: the mock
//! forge with named fixtures and a default-configured context over it.

use murk_parse::matching::mock_search_env::{
    MOCK_ANVIL, MOCK_DOOR, MOCK_PLAYER, MOCK_SWORD1, MOCK_SWORD2, MOCK_TRIA, MockSearchEnv,
    setup_mock_environment,
};
use murk_parse::matching::{ObjId, SnapshotSearcher};

use crate::{broadcast::StaticNames, config::SocialConfig, context::CommandContext};

pub use murk_parse::matching::mock_search_env;

/// Owns everything a [`CommandContext`] borrows. Build one, then borrow
/// contexts off it as needed.
pub struct Fixture {
    pub config: SocialConfig,
    pub names: StaticNames,
    pub searcher: SnapshotSearcher<MockSearchEnv>,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            config: SocialConfig::default(),
            names: StaticNames::new()
                .with(MOCK_PLAYER, "Rulan")
                .with(MOCK_TRIA, "Tria")
                .with(MOCK_ANVIL, "anvil")
                .with(MOCK_DOOR, "oak door")
                .with(MOCK_SWORD1, "sword")
                .with(MOCK_SWORD2, "sword"),
            searcher: SnapshotSearcher::new(setup_mock_environment(), MOCK_PLAYER),
        }
    }

    /// A context for the mock player at the default Citizen level.
    pub fn ctx(&self) -> CommandContext<'_> {
        self.ctx_for(MOCK_PLAYER)
    }

    pub fn ctx_for(&self, actor: ObjId) -> CommandContext<'_> {
        CommandContext {
            actor,
            actor_level: "Citizen",
            config: &self.config,
            names: &self.names,
            searcher: &self.searcher,
            say_verb: None,
        }
    }
}
