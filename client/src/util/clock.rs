//! Wall-clock helpers.

/// Current time formatted with the browser's locale conventions.
///
/// Returns an empty string outside the browser; click handlers only run
/// after hydration.
pub fn locale_time_string() -> String {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::new_0().to_locale_time_string("default").into()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
