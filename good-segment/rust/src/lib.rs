use thiserror::Error;

mod run;
pub mod segment;

pub use run::GoodRun;
pub use segment::{good_segment, Bounds};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoundsError {
    #[error("lower bound {lower} is greater than upper bound {upper}")]
    Inverted { lower: i32, upper: i32 },
}
