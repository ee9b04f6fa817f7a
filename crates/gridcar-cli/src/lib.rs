//! Interactive terminal front end for the gridcar simulator.
//!
//! The binary wires stdin/stdout into a [`Session`]; everything here is
//! generic over [`BufRead`](std::io::BufRead) / [`Write`](std::io::Write)
//! so the whole dialogue can be driven from tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod messages;
pub mod session;

pub use messages::Messages;
pub use session::Session;
