//! Session completion over namespaces loaded from JSON snapshots

use nscomplete_core::{CompletionError, CompletionOptions, Session, MAIN_MODULE};
use nscomplete_types::snapshot::namespace_from_str;
use nscomplete_types::Module;

const SNAPSHOT: &str = r#"{
    "alpha": 1,
    "alphabet": "x",
    "beta": 2,
    "obj": {"name": "n", "value": 1, "namespace": "ns"},
    "geometry": {"$module": {
        "name": "geometry",
        "members": {
            "pi": 3.0,
            "Circle": {"$class": {
                "name": "Circle",
                "members": {"area": {"$function": {"name": "area", "arity": 0}}},
                "bases": [{"$class": {
                    "name": "Shape",
                    "members": {"describe": {"$function": "describe"}, "_id": 0}
                }}]
            }}
        }
    }},
    "c": {"$instance": {
        "class": {"$class": {"name": "Counter", "members": {"increment": {"$function": "increment"}}}},
        "fields": {"count": 0}
    }}
}"#;

fn session() -> Session {
    let globals = namespace_from_str(SNAPSHOT).expect("snapshot should parse");
    let session = Session::detached();
    session.register(Module::with_namespace(MAIN_MODULE, globals));
    session
}

#[test]
fn test_top_level_prefix() {
    assert_eq!(session().completions("alph").unwrap(), vec!["alpha", "alphabet"]);
}

#[test]
fn test_record_attribute() {
    assert_eq!(
        session().completions("obj.na").unwrap(),
        vec!["obj.name", "obj.namespace"]
    );
}

#[test]
fn test_module_class_ancestry() {
    assert_eq!(
        session().completions("geometry.Circle.").unwrap(),
        vec!["geometry.Circle.area", "geometry.Circle.describe"]
    );
    assert_eq!(
        session().completions("geometry.Circle._").unwrap(),
        vec!["geometry.Circle._id"]
    );
}

#[test]
fn test_instance_members() {
    assert_eq!(
        session().completions("c.").unwrap(),
        vec!["c.count", "c.increment"]
    );
    assert_eq!(session().completions("c.__class__.inc").unwrap(), vec!["c.__class__.increment"]);
}

#[test]
fn test_broken_chain() {
    assert!(session().completions("obj.bar.").unwrap().is_empty());
    assert!(session().completions("nothing.").unwrap().is_empty());
}

#[test]
fn test_decorated_session() {
    let globals = namespace_from_str(SNAPSHOT).unwrap();
    let session = Session::detached().with_options(CompletionOptions::default().decorated(true));
    session.register(Module::with_namespace(MAIN_MODULE, globals));

    assert_eq!(
        session.completions("geometry.").unwrap(),
        vec!["geometry.Circle(", "geometry.pi"]
    );
}

#[test]
fn test_missing_main_module() {
    let session = Session::detached();
    session.register(Module::new("other"));
    assert!(matches!(
        session.completions(""),
        Err(CompletionError::NamespaceUnavailable(_))
    ));
}

#[test]
fn test_pull_until_exhausted() {
    let session = session();
    let mut state = 0;
    let mut pulled = Vec::new();
    while let Some(candidate) = session.completion_at("", state).unwrap() {
        pulled.push(candidate);
        state += 1;
    }
    assert_eq!(pulled, session.completions("").unwrap());
    assert_eq!(pulled.len(), 6);
}
