use burrow::same_target;

mod common;
use common::{Fixture, names};

#[test]
fn test_outlets_link_adjacent_targets() {
    let mut f = Fixture::new();
    f.router.navigate_to("/users/1/posts").unwrap();

    let outlets = f.router.outlets();
    let users = f.users.handle();
    let user = f.user.handle();
    let posts = f.posts.handle();

    assert!(same_target(outlets.root().unwrap(), &users));
    assert!(same_target(outlets.outlet_of(&users).unwrap(), &user));
    assert!(same_target(outlets.outlet_of(&user).unwrap(), &posts));
    assert!(outlets.outlet_of(&posts).is_none());
}

#[test]
fn test_outlets_are_recomputed_not_patched() {
    let mut f = Fixture::new();
    f.router.navigate_to("/users/1/posts/2").unwrap();
    f.router.navigate_to("/users").unwrap();

    let users = f.users.handle();
    assert_eq!(names(f.router.outlets().chain()), vec!["users"]);
    assert!(f.router.outlets().outlet_of(&users).is_none());
    assert!(f.router.outlets().outlet_of(&f.post.handle()).is_none());
}

#[test]
fn test_set_outlets_uses_current_location() {
    let mut f = Fixture::new();
    f.router.navigate_to("/a/b").unwrap();

    f.router.set_outlets_for(Vec::new());
    assert!(f.router.outlets().root().is_none());

    f.router.set_outlets();
    assert_eq!(names(f.router.outlets().chain()), vec!["a", "b"]);
}

#[test]
fn test_explicit_chain() {
    let mut f = Fixture::new();
    let chain = vec![f.a.handle(), f.user.handle(), f.settings.handle()];

    f.router.set_outlets_for(chain);

    let outlets = f.router.outlets();
    assert!(same_target(outlets.root().unwrap(), &f.a.handle()));
    assert!(same_target(
        outlets.outlet_of(&f.user.handle()).unwrap(),
        &f.settings.handle()
    ));
    assert!(same_target(outlets.leaf().unwrap(), &f.settings.handle()));
}

#[test]
fn test_initial_outlets_follow_location() {
    let f = Fixture::at("/a/c");

    assert_eq!(names(f.router.outlets().chain()), vec!["a", "c"]);
    assert!(f.log.is_empty());
    assert_eq!(f.app.render_count(), 0);
}
