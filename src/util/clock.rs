//! Wall-clock helpers for summary timestamps.
//!
//! The browser build reads `Date` through `js-sys`; native builds (tests)
//! use the `time` crate, since `std::time` has no calendar formatting.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current UTC time as an ISO-8601 string.
pub fn now_iso8601() -> String {
    #[cfg(feature = "csr")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Rfc3339)
            .unwrap_or_default()
    }
}

/// Render an ISO-8601 timestamp for display ("Generated on: ...").
///
/// In the browser this is the user's locale format; elsewhere, and for
/// strings `Date` cannot parse, the input is returned unchanged.
pub fn display_timestamp(iso: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
        if date.get_time().is_nan() {
            return iso.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        iso.to_owned()
    }
}
