#[path = "../common/mod.rs"]
mod common;

mod lifecycle;
mod loading;
mod reference_data;
