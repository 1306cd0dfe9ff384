//! Static fallback datasets
//!
//! Hand-authored editorial content substituted wholesale when the live CMS
//! collection for a type resolves empty. Only editorial types carry fallback
//! data; section content (stats, steps, logos, ...) simply renders empty when
//! the CMS has nothing.
//!
//! Fallback is all-or-nothing per collection: it is never merged item-by-item
//! with live data.

use crate::views::{CatalogItemView, PostView, BLOG_IMAGE_PLACEHOLDER};
use once_cell::sync::Lazy;

fn post(
    slug: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    category: &str,
    date: &str,
    read_time: &str,
) -> PostView {
    PostView {
        slug: slug.to_string(),
        title: title.to_string(),
        excerpt: excerpt.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        date: date.to_string(),
        read_time: read_time.to_string(),
        image: BLOG_IMAGE_PLACEHOLDER.to_string(),
    }
}

fn catalog_item(slug: &str, title: &str, summary: &str, icon: &str, features: &[&str]) -> CatalogItemView {
    CatalogItemView {
        slug: slug.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        icon: icon.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

pub static POSTS: Lazy<Vec<PostView>> = Lazy::new(|| {
    vec![
        post(
            "choosing-a-headless-cms",
            "Choosing a Headless CMS Without Regretting It",
            "The CMS decision outlives most of the code around it. Here is the checklist we walk clients through before committing.",
            "<p>The CMS decision outlives most of the code around it. Editorial teams keep working in it long after the launch team has moved on, so the evaluation has to weigh authoring ergonomics as heavily as API ergonomics.</p>\
             <p>We score candidates on four axes: editorial workflow, content modeling flexibility, delivery API stability, and the cost of leaving. The last one is the most often skipped and the most expensive to learn live.</p>",
            "Strategy",
            "March 4, 2024",
            "6 min read",
        ),
        post(
            "cache-invalidation-for-marketing-sites",
            "Cache Invalidation for Marketing Sites, Minus the Folklore",
            "Tag-based invalidation turns the hardest problem in computer science into a lookup table. A walkthrough of the pattern we deploy.",
            "<p>Marketing sites have a cache profile most infrastructure advice ignores: reads dominate by orders of magnitude, writes arrive in editorial bursts, and a stale hero headline is embarrassing rather than catastrophic.</p>\
             <p>That profile makes tag-based invalidation a near-perfect fit. Every cached response is labeled with the content types it depends on; when an editor publishes, a webhook purges exactly those labels and nothing else.</p>",
            "Engineering",
            "February 12, 2024",
            "8 min read",
        ),
        post(
            "measuring-what-a-redesign-earns",
            "Measuring What a Redesign Actually Earns",
            "Redesigns get approved on aesthetics and judged on revenue. Closing that gap starts before the first wireframe.",
            "<p>Most redesign retrospectives compare screenshots. The useful ones compare funnels. Before we touch a wireframe we instrument the three conversion paths the site already has, so the new design inherits a baseline instead of an argument.</p>",
            "Strategy",
            "January 29, 2024",
            "5 min read",
        ),
    ]
});

pub static PRODUCTS: Lazy<Vec<CatalogItemView>> = Lazy::new(|| {
    vec![
        catalog_item(
            "atrium-insight",
            "Atrium Insight",
            "Customer analytics that marketing teams can self-serve, from first touch to closed revenue.",
            "chart",
            &[
                "Funnel and attribution dashboards",
                "Warehouse-native, no data copies",
                "Alerts on conversion regressions",
            ],
        ),
        catalog_item(
            "atrium-flow",
            "Atrium Flow",
            "Workflow automation connecting your CMS, CRM, and support stack without glue-code sprawl.",
            "workflow",
            &[
                "Visual pipeline builder",
                "Versioned, reviewable automations",
                "Audit trail for every run",
            ],
        ),
        catalog_item(
            "atrium-edge",
            "Atrium Edge",
            "Global content delivery tuned for headless sites, with invalidation hooks your CMS can call.",
            "globe",
            &[
                "Tag-level cache purging",
                "Per-route TTL policies",
                "Zero-config image optimization",
            ],
        ),
    ]
});

pub static SERVICES: Lazy<Vec<CatalogItemView>> = Lazy::new(|| {
    vec![
        catalog_item(
            "cloud-migration",
            "Cloud Migration",
            "Move legacy workloads to managed infrastructure with zero-downtime cutover plans.",
            "cloud",
            &[
                "Workload assessment and sequencing",
                "Cutover rehearsals on production data",
                "Cost model before and after",
            ],
        ),
        catalog_item(
            "custom-software",
            "Custom Software Development",
            "Product engineering teams that ship with your stack and your standards.",
            "code",
            &[
                "Embedded senior engineers",
                "CI/CD from the first sprint",
                "Handover documented, not hoarded",
            ],
        ),
        catalog_item(
            "managed-devops",
            "Managed DevOps",
            "Your pipelines, environments, and on-call, run by people who do only this.",
            "server",
            &[
                "24/7 incident response",
                "Infrastructure as code throughout",
                "Monthly reliability reviews",
            ],
        ),
        catalog_item(
            "security-compliance",
            "Security & Compliance",
            "Audits, hardening, and certification support for teams facing their first enterprise deal.",
            "shield",
            &[
                "SOC 2 readiness programs",
                "Penetration test coordination",
                "Policy templates that fit startups",
            ],
        ),
    ]
});

pub static SOLUTIONS: Lazy<Vec<CatalogItemView>> = Lazy::new(|| {
    vec![
        catalog_item(
            "ecommerce-acceleration",
            "E-commerce Acceleration",
            "Storefront performance and conversion work for brands outgrowing their platform.",
            "cart",
            &[
                "Core Web Vitals remediation",
                "Checkout funnel instrumentation",
                "Headless storefront migrations",
            ],
        ),
        catalog_item(
            "data-platform-modernization",
            "Data Platform Modernization",
            "From nightly batch jobs and spreadsheet exports to a warehouse your teams trust.",
            "database",
            &[
                "Warehouse and pipeline design",
                "Self-serve BI enablement",
                "Data quality monitoring",
            ],
        ),
        catalog_item(
            "legacy-modernization",
            "Legacy System Modernization",
            "Strangler-pattern rewrites that keep the business running while the monolith shrinks.",
            "refresh",
            &[
                "Incremental extraction roadmap",
                "Parallel-run verification",
                "Team upskilling alongside delivery",
            ],
        ),
    ]
});

pub static INDUSTRIES: Lazy<Vec<CatalogItemView>> = Lazy::new(|| {
    vec![
        catalog_item(
            "healthcare",
            "Healthcare",
            "Patient-facing platforms built to HIPAA constraints from the first commit.",
            "heart",
            &["Compliance-aware architecture", "EHR integration experience"],
        ),
        catalog_item(
            "financial-services",
            "Financial Services",
            "Digital channels for banks and fintechs where audit trails are a feature, not overhead.",
            "bank",
            &["Regulatory reporting pipelines", "High-availability deployments"],
        ),
        catalog_item(
            "retail",
            "Retail & E-commerce",
            "Omnichannel experiences that survive Black Friday without a war room.",
            "store",
            &["Peak-load capacity planning", "Inventory system integrations"],
        ),
        catalog_item(
            "manufacturing",
            "Manufacturing",
            "Connecting shop-floor systems to the dashboards the front office actually reads.",
            "factory",
            &["IoT data ingestion", "ERP modernization"],
        ),
        catalog_item(
            "logistics",
            "Logistics",
            "Tracking, routing, and customer notification systems for fleets of any size.",
            "truck",
            &["Real-time shipment visibility", "Carrier API integrations"],
        ),
    ]
});

pub fn post_by_slug(slug: &str) -> Option<PostView> {
    POSTS.iter().find(|p| p.slug == slug).cloned()
}

pub fn product_by_slug(slug: &str) -> Option<CatalogItemView> {
    PRODUCTS.iter().find(|p| p.slug == slug).cloned()
}

pub fn service_by_slug(slug: &str) -> Option<CatalogItemView> {
    SERVICES.iter().find(|s| s.slug == slug).cloned()
}

pub fn solution_by_slug(slug: &str) -> Option<CatalogItemView> {
    SOLUTIONS.iter().find(|s| s.slug == slug).cloned()
}

pub fn industry_by_slug(slug: &str) -> Option<CatalogItemView> {
    INDUSTRIES.iter().find(|i| i.slug == slug).cloned()
}
