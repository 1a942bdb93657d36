#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod cell;
pub mod cli;
pub mod prelude;
pub mod rate;
pub mod state;
pub mod store;
pub mod tables;
