pub mod alternative;
pub mod extended_float;
pub mod interval;
pub mod result;
pub mod request;
pub mod config;

pub use alternative::*;
pub use interval::*;
pub use result::*;
pub use request::*;
pub use config::*;
