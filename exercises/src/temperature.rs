//! Temperature conversion exercise.

/// Convert whole degrees Fahrenheit to whole degrees Celsius.
///
/// Integer arithmetic throughout: the result truncates toward zero
/// instead of rounding, so 98°F converts to 36°C.
pub fn fahrenheit_to_celsius(fahrenheit: i32) -> i32 {
    (fahrenheit - 32) * 5 / 9
}
