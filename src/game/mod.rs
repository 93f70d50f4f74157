//! Session setup.

mod builder;

pub use builder::GameBuilder;
