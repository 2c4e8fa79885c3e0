pub mod submit_vote;
pub mod add_to_vote;

pub use submit_vote::*;
pub use add_to_vote::*;
