pub mod open_dispute;
pub mod support_dispute;
pub mod open_restoration;
pub mod resolve_dispute;

pub use open_dispute::*;
pub use support_dispute::*;
pub use open_restoration::*;
pub use resolve_dispute::*;
