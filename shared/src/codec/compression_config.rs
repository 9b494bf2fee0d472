/// Compression applied to serialized blueprint blobs. Both ends of a link
/// (and every reader of stored blobs) must agree on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompressionMode {
    /// Compress with the given zstd compression level
    Default(i32),
    /// Compress with the given zstd compression level and a shared dictionary
    Dictionary(i32, Vec<u8>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompressionConfig {
    pub mode: CompressionMode,
}

impl CompressionConfig {
    pub const DEFAULT_LEVEL: i32 = 3;

    pub fn new(mode: CompressionMode) -> Self {
        Self { mode }
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self::new(CompressionMode::Default(Self::DEFAULT_LEVEL))
    }
}
