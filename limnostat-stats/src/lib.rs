pub mod descriptive;
pub mod special;
pub mod distribution;
pub mod interval;
pub mod hypothesis;
pub mod engine;

pub use descriptive::*;
pub use special::*;
pub use distribution::*;
pub use interval::*;
pub use hypothesis::*;
pub use engine::*;
