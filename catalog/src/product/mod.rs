//! # Product operations
//!
//! List, create, update and delete the products of a catalog.

pub(crate) mod create_product;
pub(crate) mod delete_product;
pub(crate) mod list_catalog_products;
pub(crate) mod models;
pub(crate) mod update_product;
