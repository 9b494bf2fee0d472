mod location_server;
pub use location_server::LocationServer;

mod server_config;
pub use server_config::ServerConfig;
