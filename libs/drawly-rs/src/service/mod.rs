pub mod analysis;
pub mod events;
pub mod logging;
pub mod store;
