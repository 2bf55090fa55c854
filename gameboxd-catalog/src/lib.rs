//! Library data model types and the list codec.
//!
//! This crate defines the games fetched from the remote catalog and the records
//! kept in the local library, without any database dependencies. Consumers pass
//! these types to `gameboxd-db` for persistence.

pub mod codec;
pub mod types;

pub use codec::{CodecError, decode_list, encode_list, try_decode_list};
pub use types::*;
