//! Session token encoding, decoding, and claims management.

pub mod bearer;
pub mod claims;
pub mod decoder;
pub mod encoder;

pub use bearer::extract_bearer_token;
pub use claims::Claims;
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
