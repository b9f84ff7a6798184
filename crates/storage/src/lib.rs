#![warn(clippy::pedantic)]

pub mod document;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
