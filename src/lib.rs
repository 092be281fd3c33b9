// Bill Demo - Core Library
// Exposes the bill formatter, the interactive session and the HTTP API

pub mod bill;
pub mod logging;
pub mod records;
pub mod session;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use bill::{Bill, LineItem};
pub use records::{sample_bills, BillRecord};
pub use session::{SessionOutcome, BILL_FILE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
