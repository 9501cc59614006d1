pub mod field;
pub mod model;

pub use field::{DROPDOWN_TYPE, FieldDefinition, FieldKind, RELATED_TYPE, split_options};
pub use model::{ForeignRelation, Index, IndexKeys, Model};
