use typed_route::{add_segment, create_route, Route};

struct SegmentTest(Vec<(&'static str, Vec<&'static str>, &'static str)>);

impl SegmentTest {
    fn run(self) {
        for (initial, segments, expected) in self.0 {
            let route = segments
                .iter()
                .fold(create_route(initial), |route, segment| {
                    add_segment(*segment)(&route)
                });

            assert_eq!(route.template(), expected, "{segments:?}");
            assert_eq!(route.arity(), 0, "{segments:?}");
            assert_eq!(route.filler().as_terminal(), Some(expected), "{segments:?}");
            assert_eq!(
                route.fill_all(Vec::<Option<&str>>::new()).as_deref(),
                Ok(expected),
                "{segments:?}"
            );
        }
    }
}

#[test]
fn empty() {
    SegmentTest(vec![("", vec![], ""), ("/", vec![], "/")]).run()
}

#[test]
fn single_segment() {
    SegmentTest(vec![("", vec!["my-test-path"], "/my-test-path")]).run()
}

#[test]
fn multiple_segments() {
    SegmentTest(vec![
        ("", vec!["manage", "policies", "built-in"], "/manage/policies/built-in"),
        ("", vec!["hi", "there"], "/hi/there"),
        ("", vec!["1-manage", "users"], "/1-manage/users"),
    ])
    .run()
}

#[test]
fn initial_path() {
    SegmentTest(vec![
        ("my-test-path", vec![], "my-test-path"),
        ("/api", vec!["v1", "users"], "/api/v1/users"),
        ("https://example.com", vec!["docs"], "https://example.com/docs"),
    ])
    .run()
}

#[test]
fn segments_are_verbatim() {
    SegmentTest(vec![
        ("", vec!["a b", "ü", "x.json"], "/a b/ü/x.json"),
        ("", vec!["nested/path"], "/nested/path"),
    ])
    .run()
}

#[test]
fn base_is_untouched() {
    let base = Route::new();
    let users = add_segment("users")(&base);
    let posts = add_segment("posts")(&base);

    assert_eq!(base.template(), "");
    assert_eq!(base.filler().as_terminal(), Some(""));
    assert_eq!(users.template(), "/users");
    assert_eq!(posts.template(), "/posts");
}
