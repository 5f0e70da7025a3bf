// Domain layer: inventory entities, their JSON codec, and ports (interfaces).

pub mod codec;
pub mod item;
pub mod model;
pub mod ports;
pub mod timestamp;
