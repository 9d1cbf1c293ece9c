#![doc = include_str!("../README.md")]

#[macro_use]
extern crate pest_derive;

pub mod error;
pub mod rules;
pub mod show_time;
pub mod sorted_vec;
pub mod translate;
pub mod vocabulary;

mod display;
mod parser;

#[cfg(test)]
mod tests;

pub use error::{Error, Result};
pub use parser::{parse_cell, parse_daily_cell, parse_exception};
pub use show_time::ShowTime;
pub use vocabulary::{Vocabulary, WEEK};
