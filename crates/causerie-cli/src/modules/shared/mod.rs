mod snapshot;

pub(crate) use snapshot::{read_group_snapshot, read_users_snapshot};
