//! Core types shared by the crumbtrail error and logging facilities
//!
//! - **Correlation**: RequestId, minted or adopted once per request
//! - **Schema constants**: canonical log field keys and event names

pub mod correlation;
pub mod schema;

pub use correlation::{InvalidRequestId, RequestId};
