pub mod cancellation;
pub mod generate_fractal;
pub mod sample_point_grid;
