pub mod form;
pub mod link;
pub mod validation;

pub use form::*;
pub use link::*;
pub use validation::*;
