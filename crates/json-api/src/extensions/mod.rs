//! Extension traits

mod depot;
mod product_id;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use product_id::ProductIdExt as _;
pub(crate) use result::ResultExt as _;
