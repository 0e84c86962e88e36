//! Common test utilities for chat-relay
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{StubUpstream, fixtures};
//!
//! #[actix_web::test]
//! async fn my_test() {
//!     let upstream = StubUpstream::start().await;
//!     let app = test::init_service(upstream.app().await).await;
//!     // ...
//! }
//! ```

pub mod assertions;
pub mod fixtures;
pub mod upstream;

// Re-export commonly used items
pub use upstream::StubUpstream;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
