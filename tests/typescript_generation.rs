//! TypeScript Generation Tests
//!
//! Validates that the output schema types can be exported to TypeScript
//! when the typescript feature is enabled.

#[cfg(feature = "typescript")]
#[test]
fn test_output_types_implement_specta_type() {
    use specta::Type;

    // If this compiles, the front-end can generate matching definitions.
    fn assert_type<T: Type>() {}

    assert_type::<trackcast::Coordinate>();
    assert_type::<trackcast::DriverRecord>();
    assert_type::<trackcast::PlaybackConfig>();
}

#[cfg(not(feature = "typescript"))]
#[test]
fn test_typescript_feature_disabled() {
    // Types still compile without specta::Type
    let _ = trackcast::Coordinate { x: 1.0, y: 0.0, z: 0.0 };
}
