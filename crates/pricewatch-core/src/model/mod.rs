//! Domain model: entities, group labels, snapshot dates.

pub mod entity;
pub mod group;
pub mod price;
pub mod snapshot;

pub use entity::{parse_entities, Entity, EntityId};
pub use group::{GroupMap, GroupRecord};
pub use price::format_price;
pub use snapshot::prior_date;
