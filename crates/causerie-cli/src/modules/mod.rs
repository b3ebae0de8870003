pub(crate) mod avatar;
pub(crate) mod names;
pub(crate) mod shared;
pub(crate) mod system;
