//! The two terminal operations. Each one checks the API key before
//! any network call and aborts on the first failure — no partial
//! request is ever sent.

pub mod fetch;
pub mod validate;
