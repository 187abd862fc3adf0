pub mod cart;
pub mod catalog;
pub mod dataset;
pub mod delivery;
pub mod profile;
pub mod receipt;
pub mod selection;
pub mod session;
pub mod settings;
pub mod wallet;
