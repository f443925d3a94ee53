//! mcsnbt converts between [`mcnbt::Value`] trees and Mojangson, the
//! stringified NBT notation accepted by *Minecraft* commands
//! (`{"foo":1b,"bar":[I;1,2,3]}`).
//!
//! * [`from_str`] parses a whole document into any value; [`from_str_compound`]
//!   additionally requires the top level to be a compound.
//! * [`to_string`] renders a value; [`to_string_colored`] interleaves `§`
//!   display codes for chat/terminal presentation and is otherwise identical.
//!
//! ```
//! let value = mcsnbt::from_str(r#"{"foo":1b,"bar":"\"HelloWorld\""}"#).unwrap();
//! assert_eq!(mcsnbt::to_string(&value), r#"{"foo":1b,"bar":"\"HelloWorld\""}"#);
//! ```
//!
//! Every parse failure carries the byte offset of the offending input, see
//! [`error::Error::position`].

pub mod error;

mod de;
mod input;
mod ser;

pub use de::{from_str, from_str_compound};
pub use ser::{to_string, to_string_colored};

#[cfg(test)]
mod test;
