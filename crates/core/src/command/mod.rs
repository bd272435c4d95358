pub mod external;

pub use external::ExternalCommand;
