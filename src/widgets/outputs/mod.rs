pub mod flags;

pub use flags::FlagsLabel;
