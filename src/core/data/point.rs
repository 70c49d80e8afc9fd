/// Screen pixel addressed by column `x` and row `y`; row 0 holds `y_min`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
