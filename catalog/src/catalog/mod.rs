//! # Catalog operations
//!
//! Create, list and delete the product catalogs owned by a business.

pub(crate) mod create_catalog;
pub(crate) mod delete_catalog;
pub(crate) mod list_catalogs;
pub(crate) mod models;
