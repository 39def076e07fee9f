//! Signed session token issuance and validation.

mod claims;
mod codec;

pub use claims::Claims;
pub use codec::{SessionCodec, SessionToken};
