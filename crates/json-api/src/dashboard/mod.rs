//! Dashboard

pub(crate) mod data;
