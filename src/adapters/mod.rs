// Adapters layer: concrete implementations of the domain ports.

pub mod fares;
pub mod session;
pub mod text;

pub use fares::StaticFareSource;
pub use session::InMemorySessionStore;
pub use text::PlaceholderTextGenerator;
