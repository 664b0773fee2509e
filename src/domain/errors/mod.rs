//! Domain error types.

mod icon_error;
mod request_error;
mod stream_error;

pub use icon_error::IconError;
pub use request_error::{GENERIC_FAILURE_MESSAGE, RequestError};
pub use stream_error::{StreamError, StreamResult};
