#![no_std]

#[macro_use]
extern crate log;

#[cfg(any(test, feature = "std"))]
extern crate std;

pub mod datastructures;
pub mod types;

pub use datastructures::waypoints::Waypoints;
pub use types::waypoint::Waypoint;

#[cfg(test)]
#[macro_use]
extern crate pretty_assertions;
