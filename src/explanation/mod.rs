pub mod types;
pub mod interpretation;

pub use types::{TrendDirection, TrendInterpretation};
pub use interpretation::{TrendInterpretationGenerator, INSUFFICIENT_DATA_MESSAGE};
