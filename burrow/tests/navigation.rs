use burrow::{
    Lifecycle, MemoryBrowser, NavigationError, Navigator, Router, Target,
    testing::{CallLog, RecordingApplication, RecordingTarget},
};
use std::sync::Arc;

mod common;
use common::{Fixture, names};

// ============================================================================
// Diffing
// ============================================================================

#[test]
fn test_changed_param_refreshes_same_target_once() {
    let mut f = Fixture::new();
    f.settle_at("/users/1");

    f.router.navigate_to("/users/2").unwrap();

    assert_eq!(
        f.log.entries(),
        vec!["user.on_route_from", "user.on_route_to"]
    );
    assert_eq!(f.users.calls(), 0);
}

#[test]
fn test_diverging_leaf_spares_shared_ancestor() {
    let mut f = Fixture::new();
    f.settle_at("/a/b");

    f.router.navigate_to("/a/c").unwrap();

    assert_eq!(f.log.entries(), vec!["b.on_route_from", "c.on_route_to"]);
    assert_eq!(f.a.calls(), 0);
}

#[test]
fn test_exits_fire_before_enters() {
    let mut f = Fixture::new();
    f.settle_at("/users/3/posts/4");

    f.router.navigate_to("/a/b").unwrap();

    assert_eq!(
        f.log.entries(),
        vec![
            "users.on_route_from",
            "user.on_route_from",
            "posts.on_route_from",
            "post.on_route_from",
            "a.on_route_to",
            "b.on_route_to",
        ]
    );
}

#[test]
fn test_refresh_fires_after_enters() {
    let mut f = Fixture::new();
    f.settle_at("/users/1/posts/9");

    // `:id` changes, `post` leaves, nothing new enters.
    f.router.navigate_to("/users/2/posts").unwrap();

    assert_eq!(
        f.log.entries(),
        vec![
            "post.on_route_from",
            "user.on_route_from",
            "user.on_route_to",
        ]
    );
}

#[test]
fn test_newly_entered_dynamic_target_is_not_refreshed() {
    let mut f = Fixture::new();
    f.settle_at("/users");

    let transition = f.router.trigger_routing_callbacks("/users/8", "/users");

    assert_eq!(transition.changed_params(), ["id".to_string()]);
    assert!(transition.refreshed().is_empty());
    assert_eq!(f.log.entries(), vec!["user.on_route_to"]);
}

#[test]
fn test_transition_is_pure() {
    let f = Fixture::new();

    let transition = f.router.transition("/users/2/posts/5", "/users/1/posts/5");

    assert!(transition.navigating_from().is_empty());
    assert!(transition.navigating_to().is_empty());
    assert_eq!(names(transition.refreshed()), vec!["user"]);
    assert_eq!(transition.changed_params(), ["id".to_string()]);
    assert!(f.log.is_empty());

    assert!(f.router.transition("/a/b", "/a/b").is_empty());
}

#[test]
fn test_same_path_notifies_nobody() {
    let mut f = Fixture::new();
    f.settle_at("/users/1");

    f.router.navigate_to("/users/1").unwrap();

    assert!(f.log.is_empty());
    assert_eq!(f.browser.entries(), vec!["/", "/users/1", "/users/1"]);
}

#[test]
fn test_hooks_are_capability_gated() {
    let log = CallLog::new();
    let page = RecordingTarget::with_lifecycle("page", Lifecycle::ROUTE_TO, &log);
    let other = RecordingTarget::with_lifecycle("other", Lifecycle::empty(), &log);
    let browser = MemoryBrowser::new("/");

    let mut router = Router::builder()
        .memory(&browser)
        .routes(|r| {
            r.route("page", page.handle());
            r.route("other", other.handle());
        })
        .build()
        .unwrap();

    router.navigate_to("/page").unwrap();
    router.navigate_to("/other").unwrap();
    router.navigate_to("/page").unwrap();

    assert_eq!(log.entries(), vec!["page.on_route_to", "page.on_route_to"]);
}

// ============================================================================
// Side effects
// ============================================================================

#[test]
fn test_navigate_pushes_history_and_renders() {
    let mut f = Fixture::new();

    f.router.navigate_to("/users/7/posts").unwrap();

    assert_eq!(f.browser.entries(), vec!["/", "/users/7/posts"]);
    assert_eq!(f.router.current_path(), "/users/7/posts");
    assert_eq!(
        f.app.renders(),
        vec![vec![
            "users".to_string(),
            "user".to_string(),
            "posts".to_string()
        ]]
    );
}

#[test]
fn test_unmatched_navigation_clears_outlets() {
    let mut f = Fixture::new();
    f.settle_at("/a/b");

    f.router.navigate_to("/nowhere").unwrap();

    assert!(f.router.outlets().root().is_none());
    assert_eq!(f.log.entries(), vec!["a.on_route_from", "b.on_route_from"]);
    assert_eq!(f.app.renders().last(), Some(&Vec::<String>::new()));
}

#[test]
fn test_render_skipped_without_application_or_component() {
    let mut f = Fixture::new();
    f.app.set_component(false);
    f.router.navigate_to("/a").unwrap();
    assert_eq!(f.app.render_count(), 0);

    f.app.set_component(true);
    f.router.navigate_to("/a/b").unwrap();
    assert_eq!(f.app.render_count(), 1);

    assert!(f.router.take_application().is_some());
    f.router.navigate_to("/a/c").unwrap();
    assert_eq!(f.app.render_count(), 1);
    assert_eq!(f.router.outlets().len(), 2);

    let replacement = RecordingApplication::new();
    assert!(f.router.set_application(replacement.clone()).is_none());
    f.router.navigate_to("/a").unwrap();
    assert_eq!(replacement.render_count(), 1);
}

#[test]
fn test_render_can_be_disabled() {
    let log = CallLog::new();
    let home = RecordingTarget::with_log("home", &log);
    let app = RecordingApplication::new();

    let mut router = Router::builder()
        .memory(&MemoryBrowser::new("/"))
        .application(app.clone())
        .render_on_navigate(false)
        .routes(|r| {
            r.route("home", home.handle());
        })
        .build()
        .unwrap();

    router.navigate_to("/home").unwrap();
    assert_eq!(app.render_count(), 0);
    assert_eq!(log.entries(), vec!["home.on_route_to"]);
}

#[test]
fn test_remote_navigation_bypasses_routing() {
    let mut f = Fixture::new();
    f.settle_at("/a");
    let renders = f.app.render_count();

    f.router.navigate_to_remote("https://docs.example.org/guide");

    assert_eq!(
        f.browser.page_loads(),
        vec!["https://docs.example.org/guide"]
    );
    assert!(f.log.is_empty());
    assert_eq!(f.app.render_count(), renders);
}

#[test]
fn test_back_then_location_changed() {
    let mut f = Fixture::new();
    f.router.navigate_to("/a/b").unwrap();
    f.settle_at("/a/c");

    f.router.back();
    assert_eq!(f.router.current_path(), "/a/b");
    assert!(f.log.is_empty());

    f.router.location_changed("/a/c").unwrap();
    assert_eq!(f.log.entries(), vec!["c.on_route_from", "b.on_route_to"]);
    assert_eq!(names(f.router.outlets().chain()), vec!["a", "b"]);
}

// ============================================================================
// Queued navigation
// ============================================================================

struct Redirect {
    to: &'static str,
    navigator: Navigator,
}

impl Target for Redirect {
    fn lifecycle(&self) -> Lifecycle {
        Lifecycle::ROUTE_TO
    }

    fn on_route_to(&self) {
        self.navigator.navigate_to(self.to);
    }

    fn name(&self) -> &str {
        "redirect"
    }
}

fn redirect_router(browser: &MemoryBrowser, log: &CallLog, limit: usize) -> Router {
    let navigator = Navigator::default();
    let home = RecordingTarget::with_log("home", log);
    let old = Arc::new(Redirect {
        to: "/home",
        navigator: navigator.clone(),
    });
    let ping = Arc::new(Redirect {
        to: "/pong",
        navigator: navigator.clone(),
    });
    let pong = Arc::new(Redirect {
        to: "/ping",
        navigator: navigator.clone(),
    });

    Router::builder()
        .memory(browser)
        .navigator(navigator)
        .max_redirects(limit)
        .routes(|r| {
            r.route("old", old);
            r.route("home", home.handle());
            r.route("ping", ping);
            r.route("pong", pong);
        })
        .build()
        .unwrap()
}

#[test]
fn test_hook_redirect_runs_after_navigation() {
    let log = CallLog::new();
    let browser = MemoryBrowser::new("/");
    let mut router = redirect_router(&browser, &log, 4);

    router.navigate_to("/old").unwrap();

    assert_eq!(browser.entries(), vec!["/", "/old", "/home"]);
    assert_eq!(log.entries(), vec!["home.on_route_to"]);
    assert_eq!(router.navigator().pending(), 0);
}

#[test]
fn test_redirect_loop_hits_limit() {
    let log = CallLog::new();
    let browser = MemoryBrowser::new("/");
    let mut router = redirect_router(&browser, &log, 3);

    let err = router.navigate_to("/ping").unwrap_err();

    assert_eq!(
        err,
        NavigationError::RedirectLimit {
            limit: 3,
            path: "/ping".to_string(),
        }
    );
    // The initial entry, the first navigation, and three drained ones.
    assert_eq!(browser.entries().len(), 5);
    assert_eq!(router.navigator().pending(), 0);
}

#[test]
fn test_requests_outside_hooks_wait_for_drain() {
    let log = CallLog::new();
    let browser = MemoryBrowser::new("/");
    let mut router = redirect_router(&browser, &log, 4);

    let navigator = router.navigator();
    navigator.navigate_to("/home");
    assert_eq!(navigator.pending(), 1);
    assert_eq!(browser.path(), "/");

    assert_eq!(router.drain_pending(), Ok(1));
    assert_eq!(browser.path(), "/home");
    assert_eq!(router.drain_pending(), Ok(0));
}
