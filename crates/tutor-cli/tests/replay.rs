//! Config files, replay scripts and step replay against real pages.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tutor_cli::config::{Config, ConfigError, LogLevel};
use tutor_cli::logging::LogFormat;
use tutor_cli::steps::{Step, StepError, load_script, parse_script, replay};
use tutor_model::{Payload, Value};
use tutor_pages::default_registry;

fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn config_file_resolves_relative_log_file() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "tutor.toml",
        "[log]\nlevel = \"info\"\nformat = \"compact\"\nfile = \"logs/tutor.log\"\n",
    );

    let config = Config::load(&path).unwrap();

    assert_eq!(config.log.level, Some(LogLevel::Info));
    assert_eq!(config.log.format, Some(LogFormat::Compact));
    assert_eq!(config.log.file, Some(dir.path().join("logs/tutor.log")));
    assert_eq!(config.output.pretty, None);
}

#[test]
fn missing_config_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let error = Config::load(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(error, ConfigError::Read { .. }));
    assert_eq!(Config::load_optional(None).unwrap(), Config::default());
}

#[test]
fn script_steps_are_loaded_in_order() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "steps.toml",
        r#"
[[step]]
set = "input-rows"
value = 3

[[step]]
set = "input-set-a"
value = "1, 2"

[[step]]
click = "btn-incArea"
"#,
    );

    let steps = load_script(&path).unwrap();
    let rendered: Vec<String> = steps.iter().map(ToString::to_string).collect();
    assert_eq!(rendered, ["set:input-rows=3", "set:input-set-a=1, 2", "click:btn-incArea"]);
    assert!(matches!(&steps[0], Step::Set(_, Value::Number(rows)) if *rows == 3.0));
}

#[test]
fn script_step_needs_exactly_one_action() {
    let error = parse_script(
        "[[step]]\nclick = \"a\"\nset = \"b\"\n",
        &PathBuf::from("both.toml"),
    )
    .unwrap_err();
    insta::assert_snapshot!(
        error.to_string(),
        @"step 1 in both.toml needs exactly one of `click` or `set`"
    );

    let error = parse_script("[[step]]\npress = \"a\"\n", &PathBuf::from("bad.toml")).unwrap_err();
    assert!(matches!(error, StepError::Parse { .. }));
}

#[test]
fn replay_reports_final_state() {
    let page = default_registry().build("/primitive-area").unwrap();
    let steps: Vec<Step> = ["click:btn-incArea", "click:btn-incArea", "click:btn-decArea"]
        .iter()
        .map(|step| step.parse().unwrap())
        .collect();

    let result = replay(page, &steps).unwrap();

    assert!(!result.has_failures());
    assert_eq!(result.steps, 3);
    assert_eq!(
        result.state.controls.get("prev_y_prim"),
        Some(&Value::Sequence(vec![0.0, 1.0, 2.0, 1.0]))
    );
}

#[test]
fn replay_collects_binding_failures() {
    let page = default_registry()
        .build("/multiplication-commutative")
        .unwrap();
    let steps: Vec<Step> = ["set:input-cols=2", "set:input-rows=1.5"]
        .iter()
        .map(|step| step.parse().unwrap())
        .collect();

    let result = replay(page, &steps).unwrap();

    assert!(result.has_failures());
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].step.as_deref(), Some("set:input-rows=1.5"));
    assert_eq!(result.failures[0].binding, "update_grids");
    assert_eq!(
        result.state.targets.get("top-grid-row"),
        Some(&Payload::Empty)
    );
}

#[test]
fn set_steps_keep_text_input_literals() {
    let cases = [("2.0", ""), ("007", "007"), ("1e3", ""), ("3, 1, 2", "1, 2, 3")];
    for (literal, expected) in cases {
        let page = default_registry().build("/set-theory").unwrap();
        let step: Step = format!("set:input-set-a={literal}").parse().unwrap();

        let result = replay(page, &[step]).unwrap();

        assert_eq!(
            result.state.controls.get("input-set-a"),
            Some(&Value::Text(literal.to_string()))
        );
        assert_eq!(
            result.state.targets.get("A_only"),
            Some(&Payload::Text(expected.to_string())),
            "{literal}"
        );
    }
}

#[test]
fn set_steps_parse_number_inputs() {
    let page = default_registry()
        .build("/multiplication-commutative")
        .unwrap();
    let steps: Vec<Step> = ["set:input-rows=3", "set:input-cols= 4 "]
        .iter()
        .map(|step| step.parse().unwrap())
        .collect();

    let result = replay(page, &steps).unwrap();

    assert!(!result.has_failures());
    assert_eq!(result.state.controls.get("input-rows"), Some(&Value::Number(3.0)));
    assert_eq!(result.state.controls.get("input-cols"), Some(&Value::Number(4.0)));
}

#[test]
fn replay_stops_on_unknown_control() {
    let page = default_registry().build("/percent").unwrap();
    let steps = vec!["click:btn-nowhere".parse::<Step>().unwrap()];
    assert!(replay(page, &steps).is_err());
}
