pub mod fit_resolution;
pub mod pixel_to_complex_coords;
