#![allow(dead_code)]

use burrow::{
    MemoryBrowser, Router,
    testing::{CallLog, RecordingApplication, RecordingTarget},
};

// ============================================================================
// Fixture
// ============================================================================

/// Route tree used across the integration tests:
///
/// ```text
/// /users                 users
///   /new                 new_user
///   /:id                 user
///     /posts             posts
///       /:post_id        post
/// /a                     a
///   /b                   b
///   /c                   c
/// (admin) /settings      settings
/// ```
pub struct Fixture {
    pub log: CallLog,
    pub browser: MemoryBrowser,
    pub app: RecordingApplication,
    pub router: Router,
    pub users: RecordingTarget,
    pub new_user: RecordingTarget,
    pub user: RecordingTarget,
    pub posts: RecordingTarget,
    pub post: RecordingTarget,
    pub a: RecordingTarget,
    pub b: RecordingTarget,
    pub c: RecordingTarget,
    pub settings: RecordingTarget,
}

impl Fixture {
    pub fn new() -> Self {
        Self::at("/")
    }

    pub fn at(initial_path: &str) -> Self {
        let log = CallLog::new();
        let target = |name: &str| RecordingTarget::with_log(name, &log);
        let users = target("users");
        let new_user = target("new_user");
        let user = target("user");
        let posts = target("posts");
        let post = target("post");
        let a = target("a");
        let b = target("b");
        let c = target("c");
        let settings = target("settings");

        let browser = MemoryBrowser::with_origin("https://app.test", initial_path);
        let app = RecordingApplication::new();

        let router = Router::builder()
            .memory(&browser)
            .application(app.clone())
            .routes(|r| {
                r.nest("users", users.handle(), |r| {
                    r.route("new", new_user.handle());
                    r.nest(":id", user.handle(), |r| {
                        r.nest("posts", posts.handle(), |r| {
                            r.route(":post_id", post.handle());
                        });
                    });
                });
                r.nest("a", a.handle(), |r| {
                    r.route("b", b.handle());
                    r.route("c", c.handle());
                });
                r.namespace("admin", |r| {
                    r.route("settings", settings.handle());
                });
            })
            .build()
            .unwrap();

        Self {
            log,
            browser,
            app,
            router,
            users,
            new_user,
            user,
            posts,
            post,
            a,
            b,
            c,
            settings,
        }
    }

    /// Navigate to `path` and forget the calls it made.
    pub fn settle_at(&mut self, path: &str) {
        self.router.navigate_to(path).unwrap();
        self.log.clear();
    }
}

pub fn names(targets: &[burrow::TargetRef]) -> Vec<&str> {
    targets.iter().map(|t| t.name()).collect()
}
