use std::default::Default;

use bplocation_shared::CompressionConfig;

/// Contains Config properties which will be used by a Client
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Compression of the blobs received from the server. Must match the
    /// server's.
    pub compression: CompressionConfig,
}
