pub mod deferred;
pub mod service;

pub use deferred::SharedPorts;
pub use service::PortCatalog;
