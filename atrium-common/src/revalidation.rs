//! Invalidation rule tables
//!
//! Static mapping from a CMS content-type change to the site paths and cache
//! tags that must be purged. The tables are fixed at compile time; the
//! webhook handler feeds `(post_type, slug)` through [`plan`] and purges
//! whatever comes back.

/// Site paths and cache tags to purge for one webhook call.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InvalidationPlan {
    pub paths: Vec<String>,
    pub tags: Vec<String>,
}

/// Static page slug → site path table.
pub const PAGE_PATHS: &[(&str, &str)] = &[
    ("home", "/"),
    ("about", "/about"),
    ("services", "/services"),
    ("solutions", "/solutions"),
    ("products", "/products"),
    ("industries", "/industries"),
    ("blog", "/blog"),
    ("contact", "/contact"),
    ("careers", "/careers"),
];

struct TypeRule {
    paths: &'static [&'static str],
    tags: &'static [&'static str],
}

/// Static post-type → {paths, tags} table. Types whose items render on the
/// home page purge `/`; catalog types purge their index page (and `/` where
/// the home page lists them).
fn type_rule(post_type: &str) -> Option<TypeRule> {
    let rule = match post_type {
        "post" => TypeRule { paths: &["/blog"], tags: &["blog-posts"] },
        "service" => TypeRule { paths: &["/services", "/"], tags: &["services"] },
        "solution" => TypeRule { paths: &["/solutions"], tags: &["solutions"] },
        "product" => TypeRule { paths: &["/products", "/"], tags: &["products"] },
        "industry" => TypeRule { paths: &["/industries"], tags: &["industries"] },
        "stat" => TypeRule { paths: &["/"], tags: &["stats"] },
        "step" => TypeRule { paths: &["/"], tags: &["steps"] },
        "process_step" => TypeRule { paths: &["/"], tags: &["process-steps"] },
        "faq_item" => TypeRule { paths: &["/"], tags: &["faq-items"] },
        "testimonial" => TypeRule { paths: &["/products"], tags: &["testimonials"] },
        "team_department" => TypeRule { paths: &["/about"], tags: &["team-departments"] },
        "value_prop" => TypeRule { paths: &["/about"], tags: &["value-props"] },
        "career_position" => TypeRule { paths: &["/careers"], tags: &["career-positions"] },
        "career_benefit" => TypeRule { paths: &["/careers"], tags: &["career-benefits"] },
        "client_logo" => TypeRule { paths: &["/", "/about"], tags: &["client-logos"] },
        "office_location" => TypeRule { paths: &["/contact"], tags: &["office-locations"] },
        _ => return None,
    };
    Some(rule)
}

/// Look up the site path for a page slug.
pub fn page_path(slug: &str) -> Option<&'static str> {
    PAGE_PATHS
        .iter()
        .find(|(s, _)| *s == slug)
        .map(|(_, path)| *path)
}

/// Compute the invalidation plan for a content change.
///
/// Unknown post types produce an empty plan: the webhook treats them as a
/// no-op success, not an error.
pub fn plan(post_type: &str, slug: Option<&str>) -> InvalidationPlan {
    let mut plan = InvalidationPlan::default();

    // Page edits invalidate the single matching path plus its page tag
    if post_type == "page" {
        if let Some(path) = slug.and_then(page_path) {
            push_unique(&mut plan.paths, path.to_string());
            plan.tags.push(format!("page-{}", slug.unwrap_or_default()));
        }
    }

    if let Some(rule) = type_rule(post_type) {
        for path in rule.paths {
            push_unique(&mut plan.paths, path.to_string());
        }
        for tag in rule.tags {
            plan.tags.push(tag.to_string());
        }
    }

    // A single post change also purges its own detail path and per-post tag
    if post_type == "post" {
        if let Some(slug) = slug.filter(|s| !s.is_empty()) {
            push_unique(&mut plan.paths, format!("/blog/{slug}"));
            plan.tags.push(format!("post-{slug}"));
        }
    }

    plan
}

fn push_unique(paths: &mut Vec<String>, path: String) {
    if !paths.contains(&path) {
        paths.push(path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_slug_maps_to_single_path() {
        let plan = plan("page", Some("about"));
        assert_eq!(plan.paths, vec!["/about"]);
        assert_eq!(plan.tags, vec!["page-about"]);
    }

    #[test]
    fn home_page_maps_to_root() {
        let plan = plan("page", Some("home"));
        assert_eq!(plan.paths, vec!["/"]);
        assert_eq!(plan.tags, vec!["page-home"]);
    }

    #[test]
    fn page_without_known_slug_is_a_noop() {
        assert_eq!(plan("page", Some("landing-2019")), InvalidationPlan::default());
        assert_eq!(plan("page", None), InvalidationPlan::default());
    }

    #[test]
    fn post_with_slug_includes_detail_path() {
        let plan = plan("post", Some("my-post"));
        assert_eq!(plan.paths, vec!["/blog", "/blog/my-post"]);
        assert_eq!(plan.tags, vec!["blog-posts", "post-my-post"]);
    }

    #[test]
    fn post_without_slug_only_purges_the_index() {
        let plan = plan("post", None);
        assert_eq!(plan.paths, vec!["/blog"]);
        assert_eq!(plan.tags, vec!["blog-posts"]);
    }

    #[test]
    fn catalog_types_purge_index_and_home() {
        let plan = plan("product", Some("ignored-for-products"));
        assert_eq!(plan.paths, vec!["/products", "/"]);
        assert_eq!(plan.tags, vec!["products"]);

        let plan = super::plan("service", None);
        assert_eq!(plan.paths, vec!["/services", "/"]);
    }

    #[test]
    fn home_section_types_purge_root() {
        for post_type in ["stat", "step", "process_step", "faq_item"] {
            let plan = plan(post_type, None);
            assert_eq!(plan.paths, vec!["/"], "post_type {post_type}");
            assert_eq!(plan.tags.len(), 1);
        }
    }

    #[test]
    fn client_logo_purges_home_and_about() {
        let plan = plan("client_logo", None);
        assert_eq!(plan.paths, vec!["/", "/about"]);
        assert_eq!(plan.tags, vec!["client-logos"]);
    }

    #[test]
    fn unknown_type_is_an_empty_plan() {
        assert_eq!(plan("navigation_menu", None), InvalidationPlan::default());
        assert_eq!(plan("", Some("whatever")), InvalidationPlan::default());
    }

    #[test]
    fn every_page_slug_resolves() {
        for (slug, path) in PAGE_PATHS {
            assert_eq!(page_path(slug), Some(*path));
        }
        assert_eq!(page_path("unknown"), None);
    }
}
