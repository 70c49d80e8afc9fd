pub mod complex;
pub mod complex_rect;
pub mod point;
pub mod point_grid;
pub mod sample;
pub mod screen_mapping;
pub mod screen_resolution;
