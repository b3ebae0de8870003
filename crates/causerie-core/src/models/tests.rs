use super::*;

const ALICE_HEX: &str = "00000000000000000000000000000000000000000000000000000000000000a1";

#[test]
fn identity_text_roundtrips() {
    let identity = Identity::from_u128(0xa1);
    assert_eq!(identity.to_string(), ALICE_HEX);
    assert_eq!(
        ALICE_HEX.parse::<Identity>().expect("valid identity"),
        identity
    );
}

#[test]
fn identity_parse_accepts_prefix_and_uppercase() {
    let upper = format!("0x{}", ALICE_HEX.to_uppercase());
    assert_eq!(
        upper.parse::<Identity>().expect("valid identity"),
        Identity::from_u128(0xa1)
    );
}

#[test]
fn identity_parse_invalid() {
    assert!("".parse::<Identity>().is_err());
    assert!("abc".parse::<Identity>().is_err());
    assert!(ALICE_HEX.replace('a', "z").parse::<Identity>().is_err());
    assert!(format!("{ALICE_HEX}00").parse::<Identity>().is_err());

    let err = "nope".parse::<Identity>().expect_err("invalid identity");
    assert!(err.to_string().contains("nope"));
}

#[test]
fn identity_serde_uses_hex_string() {
    let identity = Identity::from_u128(0xa1);
    let json = serde_json::to_string(&identity).expect("serialize");
    assert_eq!(json, format!("\"{ALICE_HEX}\""));
    let parsed: Identity = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(parsed, identity);
    assert!(serde_json::from_str::<Identity>("\"not-hex\"").is_err());
}

#[test]
fn user_deserializes_with_optional_fields_missing() {
    let json = format!(r#"{{"identity":"{ALICE_HEX}"}}"#);
    let user: User = serde_json::from_str(&json).expect("deserialize user");
    assert_eq!(user.identity, Identity::from_u128(0xa1));
    assert!(user.username.is_none());
    assert!(user.status.is_none());
    assert!(user.avatar.is_none());
}

#[test]
fn user_status_wire_format() {
    let user: User = serde_json::from_str(&format!(
        r#"{{"identity":"{ALICE_HEX}","username":"alice","status":{{"offline":{{"at":"2024-05-01T10:00:00Z"}}}}}}"#
    ))
    .expect("deserialize user");
    let status = user.status.expect("status");
    assert_eq!(status.as_str(), "offline");
    assert!(matches!(status, UserStatus::Offline { at: Some(_) }));

    let on_call = serde_json::to_string(&UserStatus::OnCall).expect("serialize");
    assert_eq!(on_call, "\"on_call\"");
    assert_eq!(UserStatus::Online.as_str(), "online");
}

#[test]
fn group_defaults() {
    let group: Group = serde_json::from_str(r#"{"users":[]}"#).expect("deserialize group");
    assert_eq!(group.id, 0);
    assert!(group.owner.is_none());
    assert!(group.name.is_none());
    assert!(group.users.is_empty());
}
