/// Which side of a session the caller is running on. Only the server is
/// authoritative over shared world state such as terrain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Server,
    Client,
}

impl HostType {
    pub fn is_authority(self) -> bool {
        self == HostType::Server
    }
}
