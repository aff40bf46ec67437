//! Re-evaluation driver behavior on small hand-built pages.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::*;
use tutor_model::{ControlId, Payload, Value};
use tutor_reactive::{
    Binding, BindingError, Event, GraphError, LayoutNode, Page, SessionError, Session,
};

fn id(value: &str) -> ControlId {
    ControlId::new(value).unwrap()
}

/// a -> double -> plus-one, with b feeding plus-one directly.
fn chain_page(counter: Arc<AtomicUsize>) -> Page {
    Page::builder("/chain", "Chain")
        .number_input("a", Some(1.0))
        .number_input("b", Some(10.0))
        // Declared before its input's producer on purpose.
        .binding(Binding::new(
            "plus",
            ["doubled", "b"],
            ["sum"],
            move |inputs| {
                counter.fetch_add(1, Ordering::SeqCst);
                let doubled = inputs
                    .payload("doubled")?
                    .and_then(Payload::as_text)
                    .and_then(|text| text.parse::<f64>().ok())
                    .unwrap_or(0.0);
                Ok(vec![Payload::text(format!("{}", doubled + inputs.number("b")?))])
            },
        ))
        .binding(Binding::new("double", ["a"], ["doubled"], |inputs| {
            Ok(vec![Payload::text(format!("{}", inputs.number("a")? * 2.0))])
        }))
        .layout(LayoutNode::target("sum"))
        .build()
        .unwrap()
}

#[test]
fn bindings_are_stored_in_dependency_order() {
    let page = chain_page(Arc::default());
    let names: Vec<&str> = page.bindings().iter().map(Binding::name).collect();
    assert_eq!(names, ["double", "plus"]);
}

#[test]
fn load_runs_every_binding_once() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut session = Session::new(Arc::new(chain_page(Arc::clone(&counter))));

    let frame = session.load();

    assert_eq!(frame.evaluated, ["double", "plus"]);
    assert!(frame.triggered.is_empty());
    assert_eq!(counter.load(Ordering::SeqCst), 1);
    assert_eq!(frame.update("sum"), Some(&Payload::text("12")));
}

#[test]
fn change_propagates_transitively() {
    let mut session = Session::new(Arc::new(chain_page(Arc::default())));
    session.load();

    let frame = session.dispatch(Event::new(id("a"), 5.0)).unwrap();

    assert_eq!(frame.evaluated, ["double", "plus"]);
    assert_eq!(frame.update("doubled"), Some(&Payload::text("10")));
    assert_eq!(frame.update("sum"), Some(&Payload::text("20")));
}

#[test]
fn unrelated_bindings_do_not_run() {
    let mut session = Session::new(Arc::new(chain_page(Arc::default())));
    session.load();

    let frame = session.dispatch(Event::new(id("b"), 1.0)).unwrap();

    assert_eq!(frame.evaluated, ["plus"]);
    assert_eq!(frame.update("doubled"), None);
    assert_eq!(frame.update("sum"), Some(&Payload::text("3")));
}

#[test]
fn simultaneous_changes_coalesce() {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut session = Session::new(Arc::new(chain_page(Arc::clone(&counter))));
    session.load();

    let frame = session
        .dispatch_batch(vec![Event::new(id("a"), 2.0), Event::new(id("b"), 0.0)])
        .unwrap();

    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(frame.evaluated, ["double", "plus"]);
    assert_eq!(frame.update("sum"), Some(&Payload::text("4")));
    assert_eq!(frame.triggered, [id("a"), id("b")]);
}

#[test]
fn unknown_control_is_rejected() {
    let mut session = Session::new(Arc::new(chain_page(Arc::default())));
    let error = session.dispatch(Event::new(id("missing"), 1.0)).unwrap_err();
    assert!(matches!(error, SessionError::UnknownControl { .. }));
}

fn failing_page() -> Page {
    Page::builder("/failing", "Failing")
        .number_input("x", Some(1.0))
        .binding(Binding::new("broken", ["x"], ["first"], |inputs| {
            if inputs.number("x")? < 0.0 {
                return Err(BindingError::invalid("negative input"));
            }
            Ok(vec![Payload::text("ok")])
        }))
        .binding(Binding::new("after", ["first"], ["second"], |_| {
            Ok(vec![Payload::text("after")])
        }))
        .binding(Binding::new("panics", ["x"], ["third"], |inputs| {
            if inputs.number("x")? > 100.0 {
                panic!("too large");
            }
            Ok(vec![Payload::text("fine")])
        }))
        .binding(Binding::new("independent", ["x"], ["fourth"], |inputs| {
            Ok(vec![Payload::text(inputs.text("x")?.into_owned())])
        }))
        .build()
        .unwrap()
}

#[test]
fn failing_binding_is_isolated() {
    let mut session = Session::new(Arc::new(failing_page()));
    session.load();

    let frame = session.dispatch(Event::new(id("x"), -1.0)).unwrap();

    assert_eq!(frame.failures.len(), 1);
    assert_eq!(frame.failures[0].binding, "broken");
    assert_eq!(frame.skipped, ["after"]);
    assert_eq!(frame.update("first"), None);
    assert_eq!(frame.update("fourth"), Some(&Payload::text("-1")));
    assert_eq!(session.target("first"), Some(&Payload::text("ok")));
}

#[test]
fn panicking_binding_is_reported() {
    let mut session = Session::new(Arc::new(failing_page()));
    session.load();

    let frame = session.dispatch(Event::new(id("x"), 500.0)).unwrap();

    let failure = frame
        .failures
        .iter()
        .find(|failure| failure.binding == "panics")
        .unwrap();
    assert_eq!(failure.error, BindingError::Panicked("too large".to_string()));
    assert_eq!(frame.update("fourth"), Some(&Payload::text("500")));
}

#[test]
fn output_arity_mismatch_is_a_failure() {
    let page = Page::builder("/arity", "Arity")
        .button("go")
        .binding(Binding::new("short", ["go"], ["one", "two"], |_| {
            Ok(vec![Payload::Empty])
        }))
        .build()
        .unwrap();
    let mut session = Session::new(Arc::new(page));

    let frame = session.load();

    assert_eq!(
        frame.failures[0].error,
        BindingError::OutputArity {
            expected: 2,
            actual: 1
        }
    );
    assert!(frame.updates.is_empty());
}

fn counter_page() -> Page {
    Page::builder("/counter", "Counter")
        .button("inc")
        .store("history")
        .binding(Binding::new(
            "accumulate",
            ["inc", "history"],
            ["history", "count"],
            |inputs| {
                let mut history = inputs.sequence("history")?.to_vec();
                history.push(inputs.number("inc")?);
                let count = history.len();
                Ok(vec![
                    Payload::Value(Value::Sequence(history)),
                    Payload::text(count.to_string()),
                ])
            },
        ))
        .build()
        .unwrap()
}

#[test]
fn write_back_does_not_retrigger_writer() {
    let mut session = Session::new(Arc::new(counter_page()));
    session.load();

    let frame = session.click("inc").unwrap();

    assert_eq!(frame.evaluated, ["accumulate"]);
    assert_eq!(frame.control_updates.len(), 1);
    assert_eq!(session.value("history"), Some(&Value::Sequence(vec![0.0, 1.0])));
    assert_eq!(session.target("count"), Some(&Payload::text("2")));
}

#[test]
fn store_is_read_only_to_events() {
    let mut session = Session::new(Arc::new(counter_page()));
    let error = session
        .dispatch(Event::new(id("history"), Value::Sequence(vec![1.0])))
        .unwrap_err();
    assert!(matches!(error, SessionError::ReadOnlyControl(_)));
}

#[test]
fn click_requires_a_button() {
    let mut session = Session::new(Arc::new(chain_page(Arc::default())));
    assert!(matches!(
        session.click("a").unwrap_err(),
        SessionError::NotAButton(_)
    ));
}

#[test]
fn trigger_names_the_changed_source() {
    let page = Page::builder("/trigger", "Trigger")
        .button("left")
        .button("right")
        .binding(Binding::new("which", ["left", "right"], ["out"], |inputs| {
            let label = inputs.trigger().map_or("none", ControlId::as_str);
            Ok(vec![Payload::text(label)])
        }))
        .build()
        .unwrap();
    let mut session = Session::new(Arc::new(page));

    assert_eq!(session.load().update("out"), Some(&Payload::text("none")));
    assert_eq!(
        session.click("right").unwrap().update("out"),
        Some(&Payload::text("right"))
    );
    let both = session
        .dispatch_batch(vec![Event::new(id("right"), 5.0), Event::new(id("left"), 3.0)])
        .unwrap();
    assert_eq!(both.update("out"), Some(&Payload::text("right")));
}

#[test]
fn cycle_is_rejected() {
    let error = Page::builder("/cycle", "Cycle")
        .button("go")
        .binding(Binding::new("one", ["go", "b"], ["a"], |_| Ok(vec![Payload::Empty])))
        .binding(Binding::new("two", ["a"], ["b"], |_| Ok(vec![Payload::Empty])))
        .build()
        .unwrap_err();
    match error {
        GraphError::Cycle(names) => assert_eq!(names, ["one", "two"]),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn duplicate_producer_is_rejected() {
    let error = Page::builder("/dup", "Dup")
        .button("go")
        .binding(Binding::new("one", ["go"], ["out"], |_| Ok(vec![Payload::Empty])))
        .binding(Binding::new("two", ["go"], ["out"], |_| Ok(vec![Payload::Empty])))
        .build()
        .unwrap_err();
    assert!(matches!(error, GraphError::DuplicateProducer { .. }));
}

#[test]
fn unknown_source_is_rejected() {
    let error = Page::builder("/unknown", "Unknown")
        .binding(Binding::new("one", ["nowhere"], ["out"], |_| {
            Ok(vec![Payload::Empty])
        }))
        .build()
        .unwrap_err();
    assert!(matches!(error, GraphError::UnknownInput { .. }));
}

#[test]
fn writing_a_foreign_control_is_rejected() {
    let error = Page::builder("/foreign", "Foreign")
        .button("go")
        .number_input("value", None)
        .binding(Binding::new("one", ["go"], ["value"], |_| {
            Ok(vec![Payload::Value(Value::Empty)])
        }))
        .build()
        .unwrap_err();
    assert!(matches!(error, GraphError::ForeignControlWrite { .. }));
}

#[test]
fn layout_must_reference_known_nodes() {
    let error = Page::builder("/layout", "Layout")
        .layout(LayoutNode::target("ghost"))
        .build()
        .unwrap_err();
    assert!(matches!(error, GraphError::UnknownLayoutReference(_)));
}

proptest! {
    #[test]
    fn replaying_the_same_value_is_deterministic(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let mut first = Session::new(Arc::new(chain_page(Arc::default())));
        let mut second = Session::new(Arc::new(chain_page(Arc::default())));
        first.load();
        second.load();

        let events = vec![Event::new(id("a"), a), Event::new(id("b"), b)];
        let one = first.dispatch_batch(events.clone()).unwrap();
        let two = second.dispatch_batch(events).unwrap();

        prop_assert_eq!(one, two);
        prop_assert_eq!(first.render_state(), second.render_state());
    }

    #[test]
    fn every_click_appends_to_the_store(clicks in 0usize..20) {
        let mut session = Session::new(Arc::new(counter_page()));
        session.load();
        for _ in 0..clicks {
            session.click("inc").unwrap();
        }
        let history = session.value("history").unwrap().as_sequence();
        prop_assert_eq!(history.len(), clicks + 1);
    }
}
