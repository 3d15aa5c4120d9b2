use pricewatch_core::model::{Entity, EntityId, GroupMap};

/// Build an entity whose name is derived from its id
#[allow(dead_code)]
pub fn player(id: EntityId, now_cost: i64) -> Entity {
    Entity::new(id, now_cost, format!("Player{}", id), 1)
}

/// Build a named entity in a given team
#[allow(dead_code)]
pub fn named(id: EntityId, now_cost: i64, name: &str, team: i64) -> Entity {
    Entity::new(id, now_cost, name, team)
}

/// A small team mapping used across rendering tests
#[allow(dead_code)]
pub fn teams() -> GroupMap {
    let mut groups = GroupMap::new();
    groups.insert(1, "ARS");
    groups.insert(12, "LIV");
    groups.insert(14, "MUN");
    groups
}

/// Ids of a movement list, in order
#[allow(dead_code)]
pub fn ids(movements: &[pricewatch_core::Movement]) -> Vec<EntityId> {
    movements.iter().map(|m| m.entity.id).collect()
}
