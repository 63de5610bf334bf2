pub mod codec;
pub mod errors;
pub mod payload;

pub use codec::SessionTokenCodec;
pub use errors::TokenError;
pub use payload::SessionPayload;
