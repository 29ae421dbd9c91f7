use flowboard::error::Error;
use flowboard::route::Route;

#[test]
fn parses_known_paths() {
    assert_eq!("/".parse::<Route>().unwrap(), Route::Landing);
    assert_eq!("/dashboard".parse::<Route>().unwrap(), Route::Dashboard);
    assert_eq!("/sign-in".parse::<Route>().unwrap(), Route::SignIn);
    assert_eq!("/sign-up".parse::<Route>().unwrap(), Route::SignUp);
    assert_eq!(
        "/projects/proj-2".parse::<Route>().unwrap(),
        Route::Project("proj-2".to_string())
    );
}

#[test]
fn ignores_trailing_slashes() {
    assert_eq!("/dashboard/".parse::<Route>().unwrap(), Route::Dashboard);
    assert_eq!(
        "/projects/proj-1/".parse::<Route>().unwrap(),
        Route::Project("proj-1".to_string())
    );
    assert_eq!("//".parse::<Route>().unwrap(), Route::Landing);
}

#[test]
fn unknown_project_ids_still_route() {
    assert_eq!(
        "/projects/proj-404".parse::<Route>().unwrap(),
        Route::Project("proj-404".to_string())
    );
}

#[test]
fn rejects_unknown_paths() {
    for raw in ["/settings", "/projects", "/projects/", "/projects/a/b", "dashboard", ""] {
        match raw.parse::<Route>() {
            Err(Error::UnknownRoute(path)) => assert_eq!(path, raw),
            other => panic!("{raw:?} parsed to {other:?}"),
        }
    }
}

#[test]
fn path_round_trips_for_every_route() {
    let routes = [
        Route::Landing,
        Route::Dashboard,
        Route::Project("proj-3".to_string()),
        Route::SignIn,
        Route::SignUp,
    ];
    for route in routes {
        assert_eq!(route.path().parse::<Route>().unwrap(), route);
    }
}

#[test]
fn only_app_pages_use_the_layout() {
    assert!(Route::Dashboard.uses_app_layout());
    assert!(Route::Project("proj-1".to_string()).uses_app_layout());
    assert!(!Route::Landing.uses_app_layout());
    assert!(!Route::SignUp.uses_app_layout());
}
