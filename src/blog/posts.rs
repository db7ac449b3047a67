use chrono::NaiveDate;
use log::warn;

pub struct BlogPost {
    pub slug: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    /// ISO dates, `YYYY-MM-DD`.
    pub published: &'static str,
    pub modified: &'static str,
    pub body: &'static [&'static str],
}

pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "turning-65-medicare-checklist",
        title: "Turning 65? A Medicare Checklist",
        summary: "The dates, documents and decisions to line up before your Initial Enrollment Period.",
        published: "2025-02-10",
        modified: "2025-03-01",
        body: &[
            "Your Initial Enrollment Period starts three months before the month you turn 65 and ends three months after it.",
            "A full guide is on the way. In the meantime, book a free consultation and we will walk you through every step.",
        ],
    },
    BlogPost {
        slug: "small-business-benefits-renewal",
        title: "Preparing for Your Group Benefits Renewal",
        summary: "What small employers should review 90 days before their medical plan renews.",
        published: "2025-04-15",
        modified: "2025-04-15",
        body: &[
            "Renewal season is the best time to revisit plan design, contributions and carrier options.",
            "This article is being written. Reach out and we will share our renewal checklist directly.",
        ],
    },
    BlogPost {
        slug: "open-enrollment-2026",
        title: "Open Enrollment 2026: What Is Changing",
        summary: "Marketplace deadlines and subsidy changes for individuals and families.",
        published: "2025-09-22",
        modified: "2025-10-05",
        body: &[
            "Marketplace open enrollment for 2026 coverage begins November 1.",
            "We will publish the details once carriers release final rates.",
        ],
    },
];

pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|post| post.slug == slug)
}

/// Newest first.
pub fn posts_by_date() -> Vec<&'static BlogPost> {
    let mut posts: Vec<_> = POSTS.iter().collect();
    posts.sort_by(|a, b| b.published.cmp(a.published));
    posts
}

/// "2025-03-04" -> "March 4, 2025". Unparseable input is shown as-is.
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(e) => {
            warn!("Invalid post date {}: {}", iso, e);
            iso.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn post_dates_are_valid_and_ordered() {
        for post in POSTS {
            let published = NaiveDate::parse_from_str(post.published, "%Y-%m-%d").unwrap();
            let modified = NaiveDate::parse_from_str(post.modified, "%Y-%m-%d").unwrap();
            assert!(modified >= published, "{} modified before published", post.slug);
        }
    }

    #[test]
    fn slugs_are_unique() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn newest_post_comes_first() {
        let posts = posts_by_date();
        assert_eq!(posts[0].slug, "open-enrollment-2026");
        assert!(find_post("open-enrollment-2026").is_some());
        assert!(find_post("missing").is_none());
    }

    #[test]
    fn formats_dates_for_readers() {
        assert_eq!(display_date("2025-03-04"), "March 4, 2025");
        assert_eq!(display_date("soon"), "soon");
    }
}
