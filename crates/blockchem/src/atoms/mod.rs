//! Element masses and the compositions built from them

mod composition;
mod element;
mod mass;

pub use composition::{ACETAMIDE_GROUP, ACETIC_ACID_GROUP, WATER};
