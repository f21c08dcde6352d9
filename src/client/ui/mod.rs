mod list;
mod quiz;
mod render;
mod results;

pub use render::render;
