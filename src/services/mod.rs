// Service exports
pub mod api_client;
pub mod store;

pub use api_client::{ApiClient, ApiError, REQUEST_ID_HEADER};
pub use store::{
    load_base_url, resolve_base_url, save_base_url, BaseUrlStore, FileStore, MemoryStore,
    StoreError, BASE_URL_KEY,
};
