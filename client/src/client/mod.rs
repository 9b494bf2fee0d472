mod client_config;
pub use client_config::ClientConfig;

mod location_client;
pub use location_client::LocationClient;
