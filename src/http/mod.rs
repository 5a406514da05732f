//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (assign/propagate x-request-id)
//!     → handlers.rs (parse query, one upstream call)
//!     → error.rs (map failures to JSON ErrorResult)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod request;
pub mod server;

pub use error::{ApiError, ErrorResult};
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::HttpServer;
