pub mod catalog;
pub mod dispatcher;
pub mod error;
pub mod note;
pub mod store;
