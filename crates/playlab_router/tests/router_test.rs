//! Tests for hash parsing, route matching and dispatch.

use playlab_router::{
    Dispatch, HashLocation, MemoryLocation, ROOT_URL, RouteHandler, RouteMatch, RouteParams,
    RouteTable, Router, parse_hash,
};
use std::cell::RefCell;
use std::rc::Rc;

type Calls = Rc<RefCell<Vec<(String, RouteParams)>>>;

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn recorder(calls: &Calls, name: &'static str) -> (&'static str, RouteHandler) {
    let calls = Rc::clone(calls);
    let handler: RouteHandler = Box::new(move |p: &RouteParams| {
        calls.borrow_mut().push((name.to_string(), p.clone()));
    });
    (name, handler)
}

fn router_at(hash: &str) -> (Router<MemoryLocation>, Calls) {
    let calls: Calls = Rc::default();
    let mut router = Router::new(
        RouteTable::standard().unwrap(),
        MemoryLocation::with_hash(hash),
    );
    router.init([
        recorder(&calls, "catalogue"),
        recorder(&calls, "game"),
        recorder(&calls, "tool"),
        recorder(&calls, "parcours"),
        recorder(&calls, "slide"),
        recorder(&calls, "settings"),
    ]);
    (router, calls)
}

// ─────────────────────────────────────────────────────────────
//  parse_hash
// ─────────────────────────────────────────────────────────────

#[test]
fn test_parse_hash_root_forms() {
    assert_eq!(parse_hash(""), "/");
    assert_eq!(parse_hash("#"), "/");
    assert_eq!(parse_hash("#/"), "/");
}

#[test]
fn test_parse_hash_normalizes() {
    assert_eq!(parse_hash("#/games/checkers"), "/games/checkers");
    assert_eq!(parse_hash("#games/checkers"), "/games/checkers");
    assert_eq!(parse_hash("#/settings/"), "/settings");
    assert_eq!(parse_hash("/tools/timer"), "/tools/timer");
}

// ─────────────────────────────────────────────────────────────
//  match_route
// ─────────────────────────────────────────────────────────────

#[test]
fn test_match_each_standard_route() {
    let table = RouteTable::standard().unwrap();
    let name = |path: &str| table.match_route(path).map(|m| m.name);
    assert_eq!(name("/").as_deref(), Some("catalogue"));
    assert_eq!(name("/games/checkers").as_deref(), Some("game"));
    assert_eq!(name("/tools/timer").as_deref(), Some("tool"));
    assert_eq!(name("/parcours/ai").as_deref(), Some("parcours"));
    assert_eq!(name("/parcours/ai/3").as_deref(), Some("slide"));
    assert_eq!(name("/settings").as_deref(), Some("settings"));
}

#[test]
fn test_match_slide_params() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(
        table.match_route("/parcours/ai/3"),
        Some(RouteMatch {
            name: "slide".to_string(),
            params: params(&[("epic", "ai"), ("slide", "3")]),
        })
    );
}

#[test]
fn test_match_decodes_params() {
    let table = RouteTable::standard().unwrap();
    let matched = table.match_route("/games/tic%20tac%C3%A9").unwrap();
    assert_eq!(matched.params["id"], "tic tacé");
}

#[test]
fn test_match_malformed_escape_is_lossy() {
    let table = RouteTable::standard().unwrap();
    let matched = table.match_route("/games/bad%FF").unwrap();
    assert_eq!(matched.params["id"], "bad\u{FFFD}");
}

#[test]
fn test_no_match() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.match_route("/unknown"), None);
    assert_eq!(table.match_route("/games"), None);
    assert_eq!(table.match_route("/games/a/b"), None);
    assert_eq!(table.match_route("/games/"), None);
}

#[test]
fn test_first_match_wins_over_specificity() {
    let table = RouteTable::new([("/items/:id", "generic"), ("/items/new", "create")]).unwrap();
    assert_eq!(table.match_route("/items/new").unwrap().name, "generic");

    let table = RouteTable::new([("/items/new", "create"), ("/items/:id", "generic")]).unwrap();
    assert_eq!(table.match_route("/items/new").unwrap().name, "create");
}

// ─────────────────────────────────────────────────────────────
//  build_url
// ─────────────────────────────────────────────────────────────

#[test]
fn test_build_url() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.build_url("game", &params(&[("id", "checkers")])), "#/games/checkers");
    assert_eq!(
        table.build_url("slide", &params(&[("epic", "deep-learning"), ("slide", "3")])),
        "#/parcours/deep-learning/3"
    );
    assert_eq!(table.build_url("catalogue", &RouteParams::new()), "#/");
}

#[test]
fn test_build_url_encodes_like_uri_components() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(
        table.build_url("game", &params(&[("id", "a b/c?é")])),
        "#/games/a%20b%2Fc%3F%C3%A9"
    );
    assert_eq!(
        table.build_url("game", &params(&[("id", "keep-_.!~*'()")])),
        "#/games/keep-_.!~*'()"
    );
}

#[test]
fn test_build_url_unknown_route_falls_back() {
    let table = RouteTable::standard().unwrap();
    assert_eq!(table.build_url("nope", &RouteParams::new()), ROOT_URL);
}

#[test]
fn test_build_url_round_trips_through_match() {
    let table = RouteTable::standard().unwrap();
    let original = params(&[("epic", "maths & co"), ("slide", "12")]);
    let url = table.build_url("slide", &original);
    let matched = table.match_route(&parse_hash(&url)).unwrap();
    assert_eq!(matched.params, original);
}

// ─────────────────────────────────────────────────────────────
//  Dispatch
// ─────────────────────────────────────────────────────────────

#[test]
fn test_init_without_hash_dispatches_nothing() {
    let (router, calls) = router_at("");
    assert!(calls.borrow().is_empty());
    assert_eq!(router.current_route().unwrap().name, "catalogue");
}

#[test]
fn test_init_with_deep_link_dispatches() {
    let (_router, calls) = router_at("#/games/checkers");
    assert_eq!(
        calls.borrow().as_slice(),
        &[("game".to_string(), params(&[("id", "checkers")]))]
    );
}

#[test]
fn test_navigate_dispatches_on_delivery() {
    let (mut router, calls) = router_at("");
    router.navigate("/parcours/ai/3");
    assert!(calls.borrow().is_empty());

    let outcomes = router.process_changes();
    assert_eq!(outcomes.len(), 1);
    assert_eq!(
        calls.borrow().as_slice(),
        &[("slide".to_string(), params(&[("epic", "ai"), ("slide", "3")]))]
    );
    assert_eq!(router.location().hash(), "#/parcours/ai/3");
}

#[test]
fn test_navigate_adds_leading_slash() {
    let (mut router, _calls) = router_at("");
    router.navigate("settings");
    assert_eq!(router.location().hash(), "#/settings");
}

#[test]
fn test_duplicate_dispatch_suppressed() {
    let (mut router, calls) = router_at("#/games/checkers");
    assert_eq!(router.handle_hash_change(), Dispatch::Suppressed);
    assert_eq!(calls.borrow().len(), 1);

    router.navigate("/games/chess");
    router.process_changes();
    assert_eq!(calls.borrow().len(), 2);

    router.navigate("/games/checkers");
    router.process_changes();
    assert_eq!(calls.borrow().len(), 3);
}

#[test]
fn test_trailing_slash_counts_as_same_route() {
    let (mut router, calls) = router_at("#/settings");
    router.location_mut().set_hash("#/settings/");
    assert_eq!(router.process_changes(), vec![Dispatch::Suppressed]);
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_replace_route_is_silent_and_resets_guard() {
    let (mut router, calls) = router_at("#/parcours/ai/1");
    assert_eq!(calls.borrow().len(), 1);

    router.replace_route("/parcours/ai/2");
    assert!(router.process_changes().is_empty());
    assert_eq!(calls.borrow().len(), 1);
    assert_eq!(router.current_route().unwrap().params["slide"], "2");

    // The route just set silently is dispatched by the next real event.
    let outcome = router.handle_hash_change();
    assert!(matches!(outcome, Dispatch::Dispatched(ref m) if m.params["slide"] == "2"));
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_replace_route_then_navigate_back_dispatches() {
    let (mut router, calls) = router_at("#/parcours/ai/1");
    router.replace_route("/parcours/ai/2");
    router.navigate("/parcours/ai/1");
    router.process_changes();
    assert_eq!(calls.borrow().len(), 2);
}

#[test]
fn test_unknown_path_redirects_to_root() {
    let (mut router, calls) = router_at("");
    router.navigate("/nowhere/at/all");
    let outcomes = router.process_changes();
    assert_eq!(
        outcomes,
        vec![
            Dispatch::Redirected,
            Dispatch::Dispatched(RouteMatch {
                name: "catalogue".to_string(),
                params: RouteParams::new(),
            }),
        ]
    );
    assert_eq!(router.location().hash(), "#/");
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn test_missing_handler_is_reported_not_fatal() {
    let mut router = Router::new(RouteTable::standard().unwrap(), MemoryLocation::new());
    router.init(Vec::<(String, RouteHandler)>::new());
    router.navigate("/tools/timer");
    let outcomes = router.process_changes();
    assert!(matches!(outcomes.as_slice(), [Dispatch::Unhandled(m)] if m.name == "tool"));

    // The unhandled route still counts as last dispatched.
    assert_eq!(router.handle_hash_change(), Dispatch::Suppressed);
}

#[test]
fn test_on_registers_single_handler() {
    let seen = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&seen);
    let mut router = Router::new(RouteTable::standard().unwrap(), MemoryLocation::new());
    router.on("tool", move |p: &RouteParams| {
        *sink.borrow_mut() = p.get("id").cloned();
    });
    router.navigate("/tools/timer");
    router.process_changes();
    assert_eq!(seen.borrow().as_deref(), Some("timer"));
}

#[test]
fn test_router_build_url_delegates() {
    let (router, _calls) = router_at("");
    assert_eq!(router.build_url("tool", &params(&[("id", "x")])), "#/tools/x");
}
