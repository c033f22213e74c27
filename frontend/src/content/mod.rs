//! Hard-coded display content shared by both pages.

pub mod academy;
pub mod studio;

use chrono::NaiveDate;
use log::warn;

use crate::components::icon::IconKind;

#[derive(Clone, Debug, PartialEq)]
pub struct Testimonial {
    pub text: &'static str,
    pub author_name: &'static str,
    pub role: &'static str,
    pub rating: u8,
}

impl Testimonial {
    /// Letter shown in the avatar bubble.
    pub fn initial(&self) -> String {
        self.author_name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }

    /// Number of stars to draw, never more than five.
    pub fn stars(&self) -> usize {
        usize::from(self.rating.min(5))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BlogPost {
    pub photo_id: &'static str,
    pub category: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// ISO date, `YYYY-MM-DD`.
    pub published: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: IconKind,
    pub title: &'static str,
    pub bullets: [&'static str; 4],
    pub cta_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stat {
    pub icon: IconKind,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactDetail {
    pub icon: IconKind,
    pub label: &'static str,
    pub lines: &'static [&'static str],
}

/// Renders an ISO date as `15 Nov 2024`. Malformed input is shown as is.
pub fn display_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%d %b %Y").to_string(),
        Err(e) => {
            warn!("Bad content date {:?}: {}", iso, e);
            iso.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2024-11-15"), "15 Nov 2024");
        assert_eq!(display_date("2024-11-05"), "05 Nov 2024");
        assert_eq!(display_date("2025-01-13"), "13 Jan 2025");
    }

    #[test]
    fn test_display_date_keeps_garbage() {
        assert_eq!(display_date("bientôt"), "bientôt");
    }

    #[test]
    fn test_testimonial_avatar_and_stars() {
        let t = Testimonial {
            text: "",
            author_name: "élodie R.",
            role: "",
            rating: 9,
        };
        assert_eq!(t.initial(), "É");
        assert_eq!(t.stars(), 5);
    }

    #[test]
    fn test_all_testimonials_are_rated() {
        for t in studio::TESTIMONIALS.iter().chain(academy::TESTIMONIALS.iter()) {
            assert!((1..=5).contains(&t.rating), "{}", t.author_name);
            assert!(!t.initial().is_empty());
        }
    }

    #[test]
    fn test_content_dates_parse() {
        for post in studio::BLOG_POSTS.iter() {
            assert_ne!(display_date(post.published), post.published);
        }
        for course in academy::COURSES.iter() {
            assert_ne!(display_date(course.next_session), course.next_session);
        }
    }
}
