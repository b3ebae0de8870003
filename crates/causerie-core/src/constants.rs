/// Appended to a display name when it belongs to the viewing user.
pub const SELF_SUFFIX: &str = " (you)";

/// Separator between member names in a generated group name.
pub const GROUP_MEMBER_SEPARATOR: &str = ", ";

/// Length of an identity's text form.
pub const IDENTITY_HEX_LEN: usize = 64;
