// License: MIT

pub mod action;
pub mod config;
pub mod error;
pub mod events;
pub mod info;
pub mod policy;
pub mod session;
pub mod tracker;
pub mod tracker_msg;
pub mod utils;

#[cfg(test)]
mod tracker_tests;
