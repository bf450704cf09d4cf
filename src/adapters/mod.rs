// Adapters layer: concrete implementations for external systems (filesystem, Extensions API, NATS).

pub mod extensions_api;
pub mod fs_probe;
pub mod publisher;

pub use extensions_api::ExtensionsApiClient;
pub use fs_probe::FsProbe;
pub use publisher::NatsPublisher;
