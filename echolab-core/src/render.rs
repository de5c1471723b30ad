//! Response rendering by direct string interpolation.
//!
//! WARNING: every function here embeds its input into the response body with
//! NO escaping. That is the pedagogical payload of this service (reflected
//! XSS / reflected input), so the behavior must not be "fixed". Keeping all
//! of the unescaped interpolation in this one module lets scanning exercises
//! point at it precisely.

/// HTML landing page served by the `landing` variant's `/` route.
pub fn landing_page() -> String {
    "<html><body><h1>day2 Custom App</h1><div>Try /user?id=123 or /search?q=hello</div></body></html>"
        .to_string()
}

/// User lookup page. BAD: echoes `id` verbatim (simulates unsafe usage).
pub fn user_lookup_page(id: &str) -> String {
    format!(
        "<html><body><h1>User lookup</h1><div>Fetching user with id: {id}</div></body></html>"
    )
}

/// Search results page. BAD: reflected XSS, `q` is displayed unescaped.
pub fn search_results_page(q: &str) -> String {
    format!(
        "<html><body><h1>Search results</h1><div>Results for: {q}</div></body></html>"
    )
}

/// `/` body for the `presence` variant: reports only whether the API key
/// environment variable is set, never its value.
pub fn presence_banner(key_present: bool) -> String {
    format!("Hello DevSecOps! API key (env): {key_present}")
}

/// `/` body for the `reveal` variant. BAD: leaks the literal secret value.
pub fn reveal_banner(my_api_key: Option<&str>) -> String {
    format!(
        "Hello DevSecOps! API key (env): {}",
        my_api_key.unwrap_or("not set")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_lookup_reflects_markup_unescaped() {
        let body = user_lookup_page("<b>x</b>");
        assert!(body.contains("<b>x</b>"));
        assert!(!body.contains("&lt;b&gt;"));
    }

    #[test]
    fn user_lookup_with_empty_id_shows_bare_sentence() {
        let body = user_lookup_page("");
        assert!(body.contains("Fetching user with id: </div>"));
    }

    #[test]
    fn search_reflects_script_tags_unescaped() {
        let payload = "<script>alert(1)</script>";
        let body = search_results_page(payload);
        assert!(body.contains(payload));
        assert!(!body.contains("&lt;script&gt;"));
    }

    #[test]
    fn search_with_empty_query_shows_bare_sentence() {
        let body = search_results_page("");
        assert!(body.contains("Results for: </div>"));
    }

    #[test]
    fn presence_banner_never_contains_a_value() {
        assert_eq!(presence_banner(true), "Hello DevSecOps! API key (env): true");
        assert_eq!(
            presence_banner(false),
            "Hello DevSecOps! API key (env): false"
        );
    }

    #[test]
    fn reveal_banner_leaks_the_literal_value() {
        assert_eq!(
            reveal_banner(Some("secretvalue")),
            "Hello DevSecOps! API key (env): secretvalue"
        );
        assert_eq!(reveal_banner(None), "Hello DevSecOps! API key (env): not set");
    }

    #[test]
    fn landing_page_points_at_the_echo_endpoints() {
        let body = landing_page();
        assert!(body.contains("/user?id=123"));
        assert!(body.contains("/search?q=hello"));
    }
}
