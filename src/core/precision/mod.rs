pub mod kinds;
pub mod mpfr;
pub mod real;

pub use kinds::{PrecisionKinds, PrecisionSelection};
pub use mpfr::{Extended, Quadruple};
pub use real::{ParseRealError, Real};
