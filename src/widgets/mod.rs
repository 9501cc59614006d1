pub mod base;
pub mod inputs;
pub mod outputs;
pub mod traits;
pub mod value;
