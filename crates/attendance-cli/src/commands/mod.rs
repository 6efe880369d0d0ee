pub mod menu;
pub mod query;
pub mod serve;
