pub mod common;
pub mod community;
pub mod pathfinding;
pub mod topology;

pub use common::{GraphView, StationIdx};
pub use community::{connected_components, ComponentsResult};
pub use pathfinding::{bfs, PathResult};
pub use topology::{articulation_points, articulation_points_all, ArticulationResult};
