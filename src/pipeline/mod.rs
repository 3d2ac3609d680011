pub mod advisory;
pub mod extraction;
pub mod fields;
pub mod processor;
pub mod risk;
