mod enums;
mod identity;
mod structs;

pub use enums::*;
pub use identity::*;
pub use structs::*;

#[cfg(test)]
mod tests;
