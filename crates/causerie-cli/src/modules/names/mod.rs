pub(crate) mod actions;
pub(crate) mod args;

pub(crate) use actions::{handle_group_name, handle_name};
