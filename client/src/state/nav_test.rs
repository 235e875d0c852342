use super::*;

#[test]
fn root_highlights_only_home() {
    assert!(NavLink::Home.is_active("/"));
    assert!(!NavLink::Requests.is_active("/"));
    assert_eq!(active_link("/"), Some(NavLink::Home));
}

#[test]
fn requests_path_highlights_only_requests() {
    assert!(NavLink::Requests.is_active("/demandes"));
    assert!(!NavLink::Home.is_active("/demandes"));
    assert_eq!(active_link("/demandes"), Some(NavLink::Requests));
}

#[test]
fn other_paths_highlight_nothing() {
    for path in ["", "/demandes/", "/demandes/42", "/views", "/Demandes", "//"] {
        assert_eq!(active_link(path), None, "path {path:?}");
    }
}

#[test]
fn at_most_one_link_is_active() {
    for path in ["/", "/demandes", "/other"] {
        let active = NavLink::ALL.iter().filter(|link| link.is_active(path)).count();
        assert!(active <= 1);
    }
}
