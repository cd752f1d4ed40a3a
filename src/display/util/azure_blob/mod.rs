pub mod blob_client;
pub mod connection_string;
pub mod shared_key;
