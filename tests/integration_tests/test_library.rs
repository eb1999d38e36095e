// integration tests for the library API

use mediaq::config::{self, Config};
use mediaq::media::{
    compile, detect_prefix, intercepts_static_breakpoint, media, Breakpoints, Engine, ErrorKind,
    Length, Media, MediaContext, MediaExpressions, Operator, Prefix, Scope, StaticFallback,
    Tables, Unit, UnitIntervals,
};

fn px(value: f64) -> Length {
    Length::new(value, Unit::Px)
}

fn tables(phone: f64, tablet: f64) -> Tables {
    let mut breakpoints = Breakpoints::new();
    breakpoints.insert("phone".to_string(), px(phone));
    breakpoints.insert("tablet".to_string(), px(tablet));
    breakpoints.insert("desktop".to_string(), px(1024.0));

    let mut expressions = MediaExpressions::new();
    expressions.insert("screen".to_string(), "screen".to_string());

    Tables::new(breakpoints, expressions)
}

fn intervals() -> UnitIntervals {
    config::default_unit_intervals()
}

#[test]
fn test_prefix_is_max_only_for_less_than_operators() {
    for operator in Operator::CANDIDATES {
        let expected = matches!(
            operator,
            Operator::Lt | Operator::Lte | Operator::LteSymbol
        );
        assert_eq!(
            detect_prefix(operator) == Prefix::Max,
            expected,
            "{}",
            operator.as_str()
        );
    }
}

#[test]
fn test_exclusive_phone_breakpoint() {
    let tables = tables(360.0, 768.0);
    assert_eq!(
        compile(">phone", &tables, &intervals()).unwrap(),
        "(min-width: 361px)"
    );
}

#[test]
fn test_static_rejects_min_below_reference() {
    let tables = tables(320.0, 578.0);
    let intervals = intervals();
    let fallback = StaticFallback::default();
    let ctx = MediaContext::new(&tables, &intervals, &fallback).with_media_support(false);

    assert!(!intercepts_static_breakpoint(&[">=tablet"], &ctx).unwrap());
    assert_eq!(media(&[">=tablet"], &ctx).unwrap(), Media::Suppressed);
}

#[test]
fn test_empty_list_with_media_support() {
    let tables = tables(320.0, 768.0);
    let intervals = intervals();
    let fallback = StaticFallback::default();
    let ctx = MediaContext::new(&tables, &intervals, &fallback);

    assert_eq!(media::<&str>(&[], &ctx).unwrap(), Media::Unconditional);
}

#[test]
fn test_operator_free_condition_is_syntax_error() {
    let engine = Engine::from_config(&Config::default());
    let err = engine.media(&["screen", "tablet"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Syntax);
}

#[test]
fn test_tweakpoint_is_gone_after_context() {
    let mut scope = Scope::new(tables(320.0, 768.0));
    let mut custom = Breakpoints::new();
    custom.insert("custom".to_string(), px(678.0));

    let inside = scope.with_context(&custom, &MediaExpressions::new(), |scope| {
        compile(">=custom", scope.tables(), &intervals())
    });
    assert_eq!(inside.unwrap(), "(min-width: 678px)");
    assert_eq!(scope.tables().breakpoint("custom"), None);

    let failed: Result<String, _> = scope.with_context(&custom, &MediaExpressions::new(), |scope| {
        compile("custom", scope.tables(), &intervals())
    });
    assert!(failed.is_err());
    assert_eq!(scope.tables().breakpoint("custom"), None);
}

#[test]
fn test_engine_from_json5_config() {
    let config = config::parse(
        r#"{
            breakpoints: { small: '30em', large: '64em' },
            settings: { static_breakpoint: 'large' },
        }"#,
    )
    .unwrap();
    assert!(config::verify(&config).is_empty());

    let engine = Engine::from_config(&config);
    assert_eq!(engine.compile(">small").unwrap(), "(min-width: 30.01em)");
    assert_eq!(engine.compile("<large").unwrap(), "(max-width: 63.99em)");

    let engine = engine.with_media_support(false);
    assert!(engine.intercepts(&["<=large"]).unwrap());
    assert!(!engine.intercepts(&[">=small"]).unwrap());
}
