//! Reading tests, one module per feature area.

mod links;
mod sheets;
