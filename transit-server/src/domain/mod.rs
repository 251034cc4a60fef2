//! Domain types for the journey planner.
//!
//! This module contains the core domain model types that represent
//! validated transit data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod mode;
mod path;
mod service;
mod stop;

pub use mode::Mode;
pub use path::{Edge, PathLeg, PathResult};
pub use service::{
    Direction, DirectedService, InvalidService, InvalidServiceId, Service, ServiceId,
};
pub use stop::{InvalidStopName, StopName};
