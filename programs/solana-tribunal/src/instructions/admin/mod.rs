pub mod init_protocol;
pub mod update_fees;
pub mod update_treasury;
pub mod pause;

pub use init_protocol::*;
pub use update_fees::*;
pub use update_treasury::*;
pub use pause::*;
