//! Public-transport journey planner server.
//!
//! A web application that answers: "what is the cheapest way to get from
//! stop A to stop B, changing vehicles as few times as possible?"

pub mod catalog;
pub mod closures;
pub mod departures;
pub mod directory;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
