pub mod cors;
pub mod logging;
pub mod recovery;

pub use cors::Cors;
pub use logging::RequestLogger;
pub use recovery::Recovery;
