pub mod waypoints;
