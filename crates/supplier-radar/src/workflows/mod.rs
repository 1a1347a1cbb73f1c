pub mod comparison;
pub mod intake;
