use maud::{DOCTYPE, Markup, Render, html};

use crate::{GENERATOR, rewrite::Redirect};

/// Can be used to create a generator tag in the output HTML. See [`GENERATOR`](crate::GENERATOR).
pub fn generator() -> Markup {
    html! {
        meta name="generator" content=(GENERATOR);
    }
}

/// A standalone page sending the browser to `target`.
///
/// Static hosts can't answer with a real redirect, so the page relies on a meta refresh, with a plain link as a fallback.
pub fn redirect_page(target: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { "Redirecting to " (target) }
                meta http-equiv="refresh" content=(format!("0; url={}", target));
                meta name="robots" content="noindex";
                link rel="canonical" href=(target);
                (generator())
            }
            body {
                p {
                    "Redirecting to "
                    a href=(target) { (target) }
                    "."
                }
            }
        }
    }
}

impl Render for Redirect {
    fn render(&self) -> Markup {
        redirect_page(&self.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rewrite::RewriteParams;

    #[test]
    fn test_redirect_page() {
        let page = redirect_page("https://github.com/AutomationD/atun/releases/tag/v2.0.0").into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(
            r#"<meta http-equiv="refresh" content="0; url=https://github.com/AutomationD/atun/releases/tag/v2.0.0">"#
        ));
        assert!(page.contains(
            r#"<link rel="canonical" href="https://github.com/AutomationD/atun/releases/tag/v2.0.0">"#
        ));
        assert!(page.contains(r#"<meta name="robots" content="noindex">"#));
    }

    #[test]
    fn test_redirect_page_escapes_target() {
        let page = redirect_page("https://example.com/?a=1&b=\"2\"").into_string();

        assert!(page.contains("https://example.com/?a=1&amp;b=&quot;2&quot;"));
        assert!(!page.contains("b=\"2\""));
    }

    #[test]
    fn test_render_redirect() {
        let redirect = Redirect {
            pattern: "release/:version".to_string(),
            params: RewriteParams::single("version", "v1"),
            target: "https://example.com/v1".to_string(),
        };

        assert_eq!(
            redirect.render().into_string(),
            redirect_page("https://example.com/v1").into_string()
        );
    }
}
