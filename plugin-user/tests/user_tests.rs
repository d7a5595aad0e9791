//! Construction and field access for the identity model

use plugin_user::{Community, Org, User};
use url::Url;

const USER_ID: &str = "005xx000001SwiP";
const ORG_ID: &str = "00Dxx0000001gPL";
const COMMUNITY_ID: &str = "0DBxx0000004CAy";

#[test]
fn test_community_initialization() {
    let community = Community::new(COMMUNITY_ID);
    assert_eq!(community.id(), COMMUNITY_ID);
}

#[test]
fn test_org_without_community() {
    let org = Org::new(ORG_ID);
    assert_eq!(org.id(), ORG_ID);
    assert!(org.community().is_none());
    assert!(!org.is_community());
}

#[test]
fn test_org_with_community() {
    let org = Org::with_community(ORG_ID, Community::new(COMMUNITY_ID));
    assert_eq!(org.id(), ORG_ID);
    assert_eq!(org.community().map(Community::id), Some(COMMUNITY_ID));
    assert!(org.is_community());
}

#[test]
fn test_user_with_minimal_parameters() {
    let user = User::new(USER_ID, Org::new(ORG_ID), "test@example.com", "Test User");

    assert_eq!(user.user_id(), USER_ID);
    assert_eq!(user.org().id(), ORG_ID);
    assert_eq!(user.username(), "test@example.com");
    assert_eq!(user.display_name(), "Test User");
    assert!(user.first_name().is_none());
    assert!(user.avatar_url().is_none());
    assert!(user.community().is_none());
}

#[test]
fn test_user_with_all_parameters() {
    let avatar = Url::parse("https://example.com/avatar.jpg").unwrap();
    let org = Org::with_community(ORG_ID, Community::new(COMMUNITY_ID));
    let user = User::new(USER_ID, org, "test@example.com", "Test User")
        .with_first_name("Test")
        .with_avatar_url(avatar.clone());

    assert_eq!(user.user_id(), USER_ID);
    assert_eq!(user.org().id(), ORG_ID);
    assert_eq!(user.community().map(Community::id), Some(COMMUNITY_ID));
    assert_eq!(user.first_name(), Some("Test"));
    assert_eq!(user.avatar_url(), Some(&avatar));
}

#[test]
fn test_user_round_trips_through_json() {
    let json = r#"{
        "userId": "005xx000001SwiP",
        "org": {"id": "00Dxx0000001gPL", "community": {"id": "0DBxx0000004CAy"}},
        "username": "test@example.com",
        "displayName": "Test User",
        "firstName": "Test"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();
    assert_eq!(user.first_name(), Some("Test"));
    assert_eq!(user.community().map(Community::id), Some(COMMUNITY_ID));
    assert!(user.avatar_url().is_none());

    let reparsed: User = serde_json::from_str(&serde_json::to_string(&user).unwrap()).unwrap();
    assert_eq!(reparsed, user);
}

#[test]
fn test_ids_are_not_validated() {
    let user = User::new("", Org::new("short"), "", "");
    assert_eq!(user.user_id(), "");
    assert_eq!(user.org().id(), "short");
}
