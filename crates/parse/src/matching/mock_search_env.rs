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

use std::collections::HashMap;

use crate::matching::{NOTHING, ObjId, SearchEnvironment, SearchError};

pub const MOCK_FORGE: ObjId = ObjId::new(1);
pub const MOCK_GARDEN: ObjId = ObjId::new(2);
pub const MOCK_PLAYER: ObjId = ObjId::new(3);
pub const MOCK_ANVIL: ObjId = ObjId::new(4);
pub const MOCK_DOOR: ObjId = ObjId::new(5);
pub const MOCK_SWORD1: ObjId = ObjId::new(6);
pub const MOCK_SWORD2: ObjId = ObjId::new(7);
pub const MOCK_TRIA: ObjId = ObjId::new(8);

pub struct MockObject {
    pub location: ObjId,
    pub contents: Vec<ObjId>,
    pub names: Vec<String>,
}

#[derive(Default)]
pub struct MockSearchEnv {
    objects: HashMap<ObjId, MockObject>,
}

impl MockSearchEnv {
    pub fn new(objects: HashMap<ObjId, MockObject>) -> Self {
        MockSearchEnv { objects }
    }
}

impl SearchEnvironment for MockSearchEnv {
    fn obj_valid(&self, oid: ObjId) -> Result<bool, SearchError> {
        Ok(self.objects.contains_key(&oid))
    }

    fn names_of(&self, oid: ObjId) -> Result<Vec<String>, SearchError> {
        Ok(self
            .objects
            .get(&oid)
            .map_or_else(Vec::new, |o| o.names.clone()))
    }

    fn surroundings_of(&self, player: ObjId) -> Result<Vec<ObjId>, SearchError> {
        let mut result = Vec::new();
        if let Some(player_obj) = self.objects.get(&player) {
            result.push(player);
            result.push(player_obj.location);
            result.extend(player_obj.contents.iter().copied());

            if let Some(location_obj) = self.objects.get(&player_obj.location) {
                result.extend(location_obj.contents.iter().copied());
            }
        }
        Ok(result)
    }

    fn location_of(&self, oid: ObjId) -> Result<ObjId, SearchError> {
        self.objects
            .get(&oid)
            .map(|o| o.location)
            .ok_or(SearchError::ObjectNotFound(oid))
    }
}

fn create_mock_object(
    env: &mut MockSearchEnv,
    oid: ObjId,
    location: ObjId,
    contents: &[ObjId],
    names: &[&str],
) {
    env.objects.insert(
        oid,
        MockObject {
            location,
            contents: contents.to_vec(),
            names: names.iter().map(|s| s.to_string()).collect(),
        },
    );
}

/// A small world: Rulan stands in a forge holding one of two identical
/// swords, with Tria out of earshot in the garden next door.
pub fn setup_mock_environment() -> MockSearchEnv {
    let mut env = MockSearchEnv::default();

    create_mock_object(&mut env, MOCK_PLAYER, MOCK_FORGE, &[MOCK_SWORD1], &["Rulan"]);
    create_mock_object(
        &mut env,
        MOCK_FORGE,
        NOTHING,
        &[MOCK_ANVIL, MOCK_DOOR, MOCK_SWORD2],
        &["dim forge", "forge"],
    );
    create_mock_object(&mut env, MOCK_GARDEN, NOTHING, &[MOCK_TRIA], &["walled garden", "garden"]);
    create_mock_object(&mut env, MOCK_ANVIL, MOCK_FORGE, &[], &["anvil"]);
    create_mock_object(&mut env, MOCK_DOOR, MOCK_FORGE, &[], &["oak door", "door", "exit"]);
    create_mock_object(&mut env, MOCK_SWORD1, MOCK_PLAYER, &[], &["sword"]);
    create_mock_object(&mut env, MOCK_SWORD2, MOCK_FORGE, &[], &["sword"]);
    create_mock_object(&mut env, MOCK_TRIA, MOCK_GARDEN, &[], &["Tria"]);

    env
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_surroundings_cover_player_location_and_contents() {
        let env = setup_mock_environment();
        let surroundings = env.surroundings_of(MOCK_PLAYER).unwrap();
        assert_eq!(
            surroundings,
            vec![
                MOCK_PLAYER,
                MOCK_FORGE,
                MOCK_SWORD1,
                MOCK_ANVIL,
                MOCK_DOOR,
                MOCK_SWORD2
            ]
        );
        assert!(!surroundings.contains(&MOCK_TRIA));
    }

    #[test]
    fn test_location_of_unknown_object() {
        let env = setup_mock_environment();
        assert_eq!(
            env.location_of(ObjId(999)),
            Err(SearchError::ObjectNotFound(ObjId(999)))
        );
    }
}
