pub mod catalog;
pub mod conditions;
pub mod filter;
pub mod recommendations;
pub mod scoring;
pub mod selection;
pub mod translator;

pub use catalog::Catalog;
