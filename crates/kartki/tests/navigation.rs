use kartki::{NavigationState, NotFoundError, PageId, RouteTable, Router, navigation};

#[test]
fn following_page_one_link_shows_page_two() {
    let mut router = Router::default();
    assert_eq!(router.current_path(), "/");

    let page_one = router.render();
    let link = page_one.controls()[0];
    router.activate(link).unwrap();

    assert_eq!(router.current_path(), "/pagetwo");
    assert_eq!(router.render().heading(), Some("Page Two"));
}

#[test]
fn round_trip_between_pages() {
    let mut router = Router::default();
    let initial = router.render();

    for _ in 0..3 {
        let link = router.render().controls()[0].clone();
        router.activate(&link).unwrap();
        assert_eq!(router.current_path(), "/pagetwo");

        let link = router.render().controls()[0].clone();
        router.activate(&link).unwrap();
        assert_eq!(router.current_path(), "/");
    }

    assert_eq!(router.render(), initial);
}

#[test]
fn reducer_leaves_previous_state_alone() {
    let routes = RouteTable::default();
    let initial = NavigationState::default();

    let on_two = initial.navigate(&routes, "/pagetwo").unwrap();
    let failed = on_two.navigate(&routes, "/does-not-exist");

    assert_eq!(initial.current_path(), "/");
    assert_eq!(on_two.current_path(), "/pagetwo");
    assert_eq!(failed, Err(NotFoundError::new("/does-not-exist")));
    assert_eq!(
        navigation::render(&on_two, &routes),
        PageId::PageTwo.render()
    );
}

#[test]
fn every_link_points_to_a_route() {
    let routes = RouteTable::default();

    for route in &routes {
        for link in route.page.render().controls() {
            assert!(
                routes.resolve(link.to).is_ok(),
                "{} links to unrouted {}",
                route.page,
                link.to
            );
        }
    }
}
