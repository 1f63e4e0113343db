pub mod cached;
pub mod factory;
pub mod parser;

pub use cached::CachedRecord;
pub use factory::{DetectError, Detection, DetectorFactory};
pub use parser::{ParseError, UserAgentParser};
