pub mod memory_source;

pub use fake_prefab_host::{FakePrefabHost, HostCall};
pub use fixtures::{init_logger, piece, ring_location, tower_lines, TOWER_LINES};
pub use memory_source::MemorySource;
