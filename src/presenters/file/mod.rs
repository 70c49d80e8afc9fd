pub mod colour_theme;
pub mod contours_csv;
pub mod gnuplot_runner;
pub mod gnuplot_script;
pub mod membership_mask;
