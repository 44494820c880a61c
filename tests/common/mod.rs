pub mod asserts;
pub mod builders;
