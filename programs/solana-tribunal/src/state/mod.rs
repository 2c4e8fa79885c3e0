pub mod protocol;
pub mod subject;
pub mod dispute;
pub mod escrow;
pub mod records;
pub mod pools;

pub use protocol::*;
pub use subject::*;
pub use dispute::*;
pub use escrow::*;
pub use records::*;
pub use pools::*;
