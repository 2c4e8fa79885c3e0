pub mod register_subject;
pub mod add_bond;
pub mod withdraw_bond;

pub use register_subject::*;
pub use add_bond::*;
pub use withdraw_bond::*;
