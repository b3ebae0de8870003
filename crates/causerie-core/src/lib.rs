#![allow(clippy::pedantic)]
#![allow(clippy::nursery)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

pub mod constants;
pub mod display;
pub mod models;
pub mod schema;

pub use crate::constants::*;
pub use crate::display::*;
pub use crate::models::*;
pub use crate::schema::*;
