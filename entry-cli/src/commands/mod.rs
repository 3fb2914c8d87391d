pub mod create;
pub mod join;
