pub mod deposit;
pub mod withdraw;
pub mod configure;

pub use deposit::*;
pub use withdraw::*;
pub use configure::*;
