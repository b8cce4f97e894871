pub mod error;
pub mod index_page;
pub(crate) mod output;
