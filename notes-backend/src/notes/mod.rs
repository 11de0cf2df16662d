pub mod store;
pub mod validate;

pub use store::NoteStore;
pub use validate::{validate_create, validate_update};
