use config_converters::{
    symbolic_enum, Convert, EnumConverter, EnumRegistry, Error, ErrorKind, SymbolicEnum,
    TypedEnumConverter,
};
use std::sync::Arc;

symbolic_enum! {
    enum DayOfWeek = "java.time.DayOfWeek" {
        MONDAY, TUESDAY, WEDNESDAY, THURSDAY, FRIDAY, SATURDAY, SUNDAY
    }
}

symbolic_enum! {
    enum TimeUnit = "java.util.concurrent.TimeUnit" {
        NANOSECONDS, MICROSECONDS, MILLISECONDS, SECONDS, MINUTES, HOURS, DAYS
    }
}

fn registry() -> Arc<EnumRegistry> {
    let mut registry = EnumRegistry::new();
    registry
        .register_enum::<DayOfWeek>()
        .register_enum::<TimeUnit>()
        .register_type("java.lang.Exception")
        .register_type("java.lang.String");
    Arc::new(registry)
}

#[test]
fn test_convert_time_unit() {
    let converter = EnumConverter::new(registry());
    let member = converter
        .convert("java.util.concurrent.TimeUnit.NANOSECONDS")
        .unwrap();
    assert_eq!(member.type_name(), TimeUnit::TYPE_NAME);
    assert_eq!(member.ordinal(), TimeUnit::NANOSECONDS.ordinal());
}

#[test]
fn test_convert_day_of_week() {
    let converter = EnumConverter::new(registry());
    let member = converter.convert("java.time.DayOfWeek#MONDAY").unwrap();
    assert_eq!(member.name(), "MONDAY");
    assert_eq!(member.type_name(), "java.time.DayOfWeek");
}

#[test]
fn test_member_name_only_from_bound_converter() {
    let converter = EnumConverter::new(registry())
        .with_required("java.time.DayOfWeek")
        .unwrap();
    assert_eq!(converter.convert("MONDAY").unwrap().ordinal(), 0);
    assert_eq!(converter.required().map(|d| d.name()), Some("java.time.DayOfWeek"));

    let typed = TypedEnumConverter::<DayOfWeek>::new(registry());
    assert_eq!(typed.convert("MONDAY").unwrap(), DayOfWeek::MONDAY);
    assert_eq!(typed.convert("java.time.DayOfWeek.SUNDAY").unwrap(), DayOfWeek::SUNDAY);
}

#[test]
fn test_bound_member_name_is_case_sensitive() {
    let typed = TypedEnumConverter::<DayOfWeek>::new(registry());
    assert_eq!(typed.convert("monday").unwrap_err().kind(), ErrorKind::FormatMismatch);
}

#[test]
fn test_wrong_enum_type() {
    let converter = EnumConverter::new(registry()).with_required_enum::<TimeUnit>();
    assert_eq!(
        converter.convert("java.time.DayOfWeek#MONDAY").unwrap_err(),
        Error::type_mismatch("java.util.concurrent.TimeUnit", "java.time.DayOfWeek")
    );

    let typed = TypedEnumConverter::<TimeUnit>::new(registry());
    assert_eq!(
        typed.convert("java.time.DayOfWeek#MONDAY").unwrap_err().kind(),
        ErrorKind::TypeMismatch
    );
}

#[test]
fn test_broken_naming_convention() {
    let converter = EnumConverter::new(registry());
    for input in [
        "JAVA.TIME.DAYOFWEEK#MONDAY",
        "JAVA-TIME-DAYOFWEEK#MONDAY",
        "Java.time.DayOfWeek#MONDAY",
        "java.time.dayOfWeek#MONDAY",
        "java.time.DayOfWeek#Monday",
        "DayOfWeek#MONDAY",
        "java.time.DayOfWeek:MONDAY",
    ] {
        assert_eq!(
            converter.convert(input).unwrap_err().kind(),
            ErrorKind::FormatMismatch,
            "input {}",
            input
        );
    }
}

#[test]
fn test_non_enum_types() {
    let converter = EnumConverter::new(registry());
    for input in ["java.lang.Exception#MONDAY", "java.lang.String#MONDAY"] {
        let err = converter.convert(input).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnresolvableSymbol, "input {}", input);
        assert!(err.to_string().contains("not an enumerated type"));
    }
}

#[test]
fn test_non_existing_types() {
    let converter = EnumConverter::new(registry());
    for input in ["class.does.not.Exist#MONDAY", "java.lang.does.not.Exist#MONDAY"] {
        assert_eq!(
            converter.convert(input).unwrap_err().kind(),
            ErrorKind::UnresolvableSymbol,
            "input {}",
            input
        );
    }

    // A lower-case final segment is not a type name at all.
    for input in ["class.does.not.exist#MONDAY", "java.lang.does.not.exist#MONDAY"] {
        assert_eq!(
            converter.convert(input).unwrap_err().kind(),
            ErrorKind::FormatMismatch,
            "input {}",
            input
        );
    }
}

#[test]
fn test_missing_member() {
    let converter = EnumConverter::new(registry());
    assert_eq!(
        converter.convert("java.time.DayOfWeek#WEEKEND").unwrap_err().kind(),
        ErrorKind::UnresolvableSymbol
    );
}
