//! Greener route comparison server.
//!
//! Answers: "How do the ways of getting from here to there compare on
//! carbon, and is there a greener one that takes about as long?"

pub mod catalog;
pub mod directions;
pub mod domain;
pub mod planner;
pub mod selection;
pub mod web;
