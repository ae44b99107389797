use typed_route::{
    add_optional_parameter, add_parameter, add_segment, create_route, Route, RouteBuilder,
};

fn user_editor() -> Route {
    RouteBuilder::new()
        .segment("1-manage")
        .segment("users")
        .parameter("id")
        .segment("edit")
        .parameter("field")
        .optional_parameter("redirect")
        .optional_parameter("hash")
        .build()
}

#[test]
fn user_editor_route() {
    let route = user_editor();

    assert_eq!(
        route.template(),
        "/1-manage/users/:id/edit/:field/:redirect?/:hash?"
    );
    assert_eq!(route.arity(), 4);
    assert_eq!(
        route
            .fill_all([Some("25"), Some("the_field_i_edit"), None, Some("#pound")])
            .unwrap(),
        "/1-manage/users/25/edit/the_field_i_edit/#pound"
    );
}

#[test]
fn builder_matches_nested_transforms() {
    let nested = add_optional_parameter("hash")(&add_optional_parameter("redirect")(
        &add_parameter("field")(&add_segment("edit")(&add_parameter("id")(&add_segment(
            "users",
        )(&add_segment("1-manage")(&create_route("")))))),
    ));

    let stepwise = {
        let r0 = create_route("");
        let r1 = add_segment("1-manage")(&r0);
        let r2 = add_segment("users")(&r1);
        let r3 = add_parameter("id")(&r2);
        let r4 = add_segment("edit")(&r3);
        let r5 = add_parameter("field")(&r4);
        let r6 = add_optional_parameter("redirect")(&r5);
        add_optional_parameter("hash")(&r6)
    };

    let built = user_editor();

    assert_eq!(built.template(), nested.template());
    assert_eq!(built.template(), stepwise.template());
    assert_eq!(built.components(), nested.components());

    let assignments: [[Option<&str>; 4]; 4] = [
        [Some("1"), Some("2nd"), Some("3rd"), Some("4th")],
        [Some("1"), Some("2nd"), None, Some("4th")],
        [Some("1"), Some("2nd"), Some("3rd"), None],
        [Some("1"), Some("2nd"), None, None],
    ];

    for values in assignments {
        let expected = built.fill_all(values).unwrap();
        assert_eq!(nested.fill_all(values).unwrap(), expected);
        assert_eq!(stepwise.fill_all(values).unwrap(), expected);

        let [id, field, redirect, hash] = values;
        for route in [&built, &nested, &stepwise] {
            let curried = route
                .filler()
                .call(hash)
                .and_then(|f| f.call(redirect))
                .and_then(|f| f.call(field))
                .and_then(|f| f.call(id))
                .and_then(|f| f.into_string());
            assert_eq!(curried.as_deref(), Ok(expected.as_str()));
        }
    }
}

#[test]
fn seeded_builder_leaves_seed_untouched() {
    let simple = RouteBuilder::new().segment("hi").segment("there").build();
    let complicated = RouteBuilder::from_route(&simple).parameter("id").build();

    assert_eq!(simple.template(), "/hi/there");
    assert_eq!(simple.filler().as_terminal(), Some("/hi/there"));
    assert_eq!(complicated.template(), "/hi/there/:id");
    assert_eq!(
        complicated.filler().with(42).unwrap().into_string().unwrap(),
        "/hi/there/42"
    );
}

#[test]
fn from_route() {
    let root = create_route("/");
    let route = RouteBuilder::from(root.clone()).segment("docs").build();

    assert_eq!(root.template(), "/");
    assert_eq!(route.template(), "//docs");
}

#[test]
fn peek_while_building() {
    let builder = RouteBuilder::new().segment("article").parameter("article_id");
    assert_eq!(builder.route().template(), "/article/:article_id");

    let route = builder.optional_parameter("as_user_id").build();
    assert_eq!(route.template(), "/article/:article_id/:as_user_id?");
    assert_eq!(
        route.filler().skip().unwrap().with(34).unwrap().into_string().unwrap(),
        "/article/34"
    );
}

#[test]
fn empty_builder() {
    let route = RouteBuilder::new().build();
    assert_eq!(route.template(), "");
    assert!(route.is_static());
}
