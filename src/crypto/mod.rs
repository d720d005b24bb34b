pub mod digest;

pub use digest::{legacy_password_digest, LEGACY_DIGEST_LEN};
