pub mod form;
pub mod hash;
pub mod validation;
