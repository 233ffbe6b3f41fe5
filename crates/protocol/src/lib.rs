//! Wire messages for the account notification service.
//!
//! The wallet keeps a channel open to a notification service and, on connect,
//! sends a [`SubscribeRequest`] naming the account it wants updates for. This
//! crate only defines the messages; transport and reconnection are left to the
//! caller.
//!
//! # Example
//!
//! ```rust
//! use lattice_protocol::{Subscriber, SubscribeRequest};
//!
//! let request = SubscribeRequest::new(
//!     Subscriber::Session("5a1c3a3e-0000-4000-8000-000000000000".into()),
//!     "USD",
//!     None,
//! );
//! let json = request.to_json().unwrap();
//! assert!(!json.contains("\"account\""));
//! ```

pub mod error;
pub mod request;

pub use error::{ProtocolError, Result};
pub use request::{Action, SubscribeRequest, Subscriber};
