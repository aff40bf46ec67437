//! Pages driven through a live session, the way a renderer would.

use std::sync::Arc;

use proptest::prelude::*;
use tutor_model::{ControlId, Payload, Value};
use tutor_pages::geometry::intersection_path;
use tutor_pages::pages::set_operations::{CIRCLE_A, CIRCLE_B};
use tutor_pages::trig::SineParams;
use tutor_pages::{PageError, PageRegistry, default_registry};
use tutor_reactive::{BindingError, Event, Session};

fn id(value: &str) -> ControlId {
    ControlId::new(value).unwrap()
}

fn session(path: &str) -> Session {
    let page = default_registry().build(path).unwrap();
    let mut session = Session::new(Arc::new(page));
    let frame = session.load();
    assert!(!frame.has_failures(), "{path} failed on load: {:?}", frame.failures);
    session
}

fn text<'a>(session: &'a Session, target: &str) -> &'a str {
    session
        .target(target)
        .and_then(Payload::as_text)
        .unwrap_or_else(|| panic!("{target} has no text"))
}

fn click_times(session: &mut Session, button: &str, times: usize) {
    for _ in 0..times {
        session.click(button).unwrap();
    }
}

#[test]
fn every_page_loads_all_its_targets() {
    for entry in default_registry().iter() {
        let session = session(entry.path);
        for target in session.page().targets() {
            assert!(
                session.target(target.as_str()).is_some(),
                "{} left {target} empty",
                entry.path
            );
        }
    }
}

#[test]
fn filter_matches_names_ignoring_case() {
    let registry = PageRegistry::default();
    let paths = |query: &str| -> Vec<&str> {
        registry.filter(query).iter().map(|entry| entry.path).collect()
    };

    assert_eq!(registry.filter("").len(), 12);
    assert_eq!(paths("TRIANGLE"), ["/triangle-area", "/triangle-sum"]);
    assert_eq!(paths("percent"), ["/percent", "/percent-promille-ppm"]);
    assert!(paths("calculus").is_empty());
}

#[test]
fn unknown_page_is_reported() {
    assert!(matches!(
        default_registry().build("/missing"),
        Err(PageError::UnknownPage(_))
    ));
}

#[test]
fn percent_round_trip_does_not_return_to_start() {
    let mut session = session("/percent");
    click_times(&mut session, "btn-incPercent", 10);
    assert!(text(&session, "end-amount").ends_with("= 110"));

    click_times(&mut session, "btn-incStart", 10);
    click_times(&mut session, "btn-decPercent", 20);
    assert_eq!(text(&session, "start-amount"), "Start amount: 110");
    assert_eq!(text(&session, "percent-change"), "Percent change: -10");
    assert!(text(&session, "end-amount").ends_with("= 99"));
}

#[test]
fn conversion_rewrites_the_other_inputs() {
    let mut session = session("/percent-promille-ppm");
    let frame = session
        .dispatch(Event::new(id("promille-input"), 25.0))
        .unwrap();

    assert_eq!(session.value("percent-input"), Some(&Value::Number(2.5)));
    assert_eq!(session.value("ppm-input"), Some(&Value::Number(25_000.0)));
    assert_eq!(frame.control_updates.len(), 3);
    assert_eq!(frame.evaluated, ["update_all"]);
}

#[test]
fn cleared_conversion_input_reads_as_zero() {
    let mut session = session("/percent-promille-ppm");
    let frame = session
        .dispatch(Event::new(id("percent-input"), Value::Empty))
        .unwrap();

    assert!(!frame.has_failures(), "{:?}", frame.failures);
    for control in ["percent-input", "promille-input", "ppm-input"] {
        assert_eq!(session.value(control), Some(&Value::Number(0.0)), "{control}");
    }
}

#[test]
fn primitive_history_is_drawn_as_steps() {
    let mut session = session("/primitive-area");
    click_times(&mut session, "btn-incArea", 3);
    click_times(&mut session, "btn-sameArea", 1);
    session.click("btn-decArea").unwrap();

    assert_eq!(
        session.value("prev_y_prim"),
        Some(&Value::Sequence(vec![0.0, 1.0, 2.0, 3.0, 3.0, 2.0]))
    );
    let derivative = session
        .target("derivative_function")
        .and_then(Payload::as_figure)
        .unwrap();
    assert_eq!(
        derivative.data[0].y,
        [1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, -1.0, -1.0]
    );
    assert_eq!(derivative.layout.xaxis.range, Some([0.0, 6.0]));
    insta::assert_snapshot!(
        text(&session, "area_calculation_primitive_function"),
        @"Area under derivative function equals primitive function"
    );
}

#[test]
fn venn_regions_follow_the_inputs() {
    let mut session = session("/set-theory");
    session
        .dispatch_batch(vec![
            Event::new(id("input-set-a"), "1, 2, 3, 10"),
            Event::new(id("input-set-b"), "3,4,x"),
        ])
        .unwrap();
    let regions = ["A_only", "B_only", "A_and_B"]
        .map(|target| text(&session, target))
        .join("\n");
    insta::assert_snapshot!(regions, @r"
    1, 2, 10
    4
    3
    ");

    session.click("btn-A-minus-B").unwrap();
    let visible = |target: &str| match session.target(target) {
        Some(Payload::Region(fill)) => fill.is_visible(),
        other => panic!("{target} holds {other:?}"),
    };
    assert!(visible("path-A-only"));
    assert!(!visible("path-B-only"));
    assert!(!visible("path-intersection"));
}

#[test]
fn venn_circles_overlap() {
    assert!(intersection_path(CIRCLE_A, CIRCLE_B).is_some_and(|path| !path.is_empty()));
}

#[test]
fn multiplication_grids_are_transposed() {
    let mut session = session("/multiplication-commutative");
    assert_eq!(session.target("top-grid-row"), Some(&Payload::Empty));
    assert_eq!(text(&session, "equality-label"), "");

    session
        .dispatch_batch(vec![
            Event::new(id("input-rows"), 3.0),
            Event::new(id("input-cols"), 4.0),
        ])
        .unwrap();
    insta::assert_json_snapshot!(session.target("bottom-grid-row").unwrap(), @r#"
    {
      "kind": "grid",
      "data": {
        "rows": 4,
        "cols": 3,
        "square_size": 50.0,
        "color": "blue"
      }
    }
    "#);
    assert_eq!(text(&session, "equality-label"), "4 × 3 = 3 × 4");
}

#[test]
fn fractional_row_count_fails_only_that_binding() {
    let mut session = session("/multiplication-commutative");
    session
        .dispatch(Event::new(id("input-cols"), 2.0))
        .unwrap();
    let frame = session
        .dispatch(Event::new(id("input-rows"), 2.5))
        .unwrap();

    assert_eq!(frame.failures.len(), 1);
    assert!(matches!(frame.failures[0].error, BindingError::Invalid(_)));
    assert!(frame.updates.is_empty());
    assert_eq!(text(&session, "equality-label"), "");
}

#[test]
fn unsolvable_equation_explains_itself() {
    let mut session = session("/trig-eq-all-solutions");
    insta::assert_snapshot!(
        text(&session, "sin_equation_solution"),
        @"y = 1 * sin(1 * x + 0) + 0 = 0 => x1 = 0, x2 = 3.1415926536"
    );
    click_times(&mut session, "btn-incY", 2);
    assert!(text(&session, "sin_equation_solution").ends_with("has no solution"));
    let figure = session
        .target("sin_curve_solution")
        .and_then(Payload::as_figure)
        .unwrap();
    assert_eq!(figure.data.len(), 1);
}

#[test]
fn zero_frequency_degrades() {
    let mut session = session("/trig-curve-param");
    session.click("btn-decFreq").unwrap();
    assert!(text(&session, "sin_equation_2").contains("(x + undefined)"));
}

const STATELESS_PAGES: [&str; 8] = [
    "/triangle-area",
    "/percent",
    "/trig-curve-param",
    "/trig-eq-all-solutions",
    "/trig-curve-unit-circle",
    "/trig-all-solutions",
    "/set-theory",
    "/multiplication-commutative",
];

proptest! {
    #[test]
    fn primitive_tracks_increase_and_decrease(
        presses in proptest::collection::vec(any::<bool>(), 0..25)
    ) {
        let mut session = session("/primitive-area");
        for &increase in &presses {
            session
                .click(if increase { "btn-incArea" } else { "btn-decArea" })
                .unwrap();
        }
        let increases = presses.iter().filter(|&&increase| increase).count();
        let decreases = presses.len() - increases;

        let history = session.value("prev_y_prim").unwrap().as_sequence();
        prop_assert_eq!(history.len(), increases + decreases + 1);
        prop_assert_eq!(history.last().copied(), Some(increases as f64 - decreases as f64));
    }

    #[test]
    fn sine_solutions_solve_the_equation(
        amplitude in prop_oneof![-5.0f64..-0.5, 0.5f64..5.0],
        frequency in prop_oneof![-4.0f64..-0.5, 0.5f64..4.0],
        phase in -3.0f64..3.0,
        center in -3.0f64..3.0,
        ratio in -0.999f64..0.999,
    ) {
        let params = SineParams { amplitude, frequency, phase, center };
        let y = center + ratio * amplitude;
        let (x1, x2) = params.solutions(y).unwrap();
        prop_assert!((params.eval(x1) - y).abs() < 1e-9);
        prop_assert!((params.eval(x2) - y).abs() < 1e-9);
    }

    #[test]
    fn stateless_pages_are_deterministic(
        page in proptest::sample::select(STATELESS_PAGES.to_vec()),
        clicks in proptest::collection::vec(0usize..16, 0..6),
    ) {
        let mut first = session(page);
        let mut second = session(page);
        let buttons: Vec<String> = first
            .page()
            .controls()
            .iter()
            .filter(|control| control.kind == tutor_reactive::ControlKind::Button)
            .map(|control| control.id.to_string())
            .collect();
        prop_assume!(!buttons.is_empty());

        for click in clicks {
            let button = &buttons[click % buttons.len()];
            let one = first.click(button).unwrap();
            let two = second.click(button).unwrap();
            prop_assert_eq!(one, two);
        }
        prop_assert_eq!(first.render_state(), second.render_state());
    }
}
