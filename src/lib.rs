//! Reads a count followed by that many integers and prints them back in
//! reverse order, each one terminated by a comma.

pub mod banner;
pub mod error;
pub mod reverse;
pub mod scanner;
