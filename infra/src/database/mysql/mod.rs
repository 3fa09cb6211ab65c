pub mod refresh_store_impl;

pub use refresh_store_impl::MySqlRefreshStore;
