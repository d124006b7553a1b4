// SPDX-License-Identifier: MPL-2.0
//! Sample articles shown while the backend has no published post.

use super::records::{BlogPost, Entry};
use chrono::{DateTime, NaiveDate, Utc};

fn day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn tags(items: &[&str]) -> Option<Vec<String>> {
    Some(items.iter().map(|item| (*item).to_string()).collect())
}

/// The built-in demo posts, newest first.
#[must_use]
pub fn demo_posts() -> Vec<Entry<BlogPost>> {
    vec![
        Entry::new(
            "1",
            BlogPost {
                title: "Getting Started with Flutter for Cross-Platform Development".to_string(),
                title_ar: Some("البدء مع Flutter لتطوير التطبيقات متعددة المنصات".to_string()),
                slug: "flutter-getting-started".to_string(),
                excerpt: Some(
                    "Learn how to build beautiful, natively compiled applications for mobile, web, and desktop from a single codebase."
                        .to_string(),
                ),
                excerpt_ar: Some(
                    "تعلم كيفية بناء تطبيقات جميلة ومترجمة أصلياً للهاتف والويب وسطح المكتب من قاعدة كود واحدة."
                        .to_string(),
                ),
                cover_image: Some(
                    "https://images.unsplash.com/photo-1551650975-87deedd944c3?w=600".to_string(),
                ),
                category: Some("Mobile Development".to_string()),
                tags: tags(&["Flutter", "Dart", "Mobile"]),
                published: true,
                published_at: day(2024, 1, 15),
                read_time: Some(8),
                ..BlogPost::default()
            },
        ),
        Entry::new(
            "2",
            BlogPost {
                title: "Building RESTful APIs with PHP and MySQL".to_string(),
                title_ar: Some("بناء واجهات برمجة التطبيقات RESTful باستخدام PHP و MySQL".to_string()),
                slug: "restful-apis-php".to_string(),
                excerpt: Some(
                    "A comprehensive guide to creating secure and scalable REST APIs using PHP and MySQL database."
                        .to_string(),
                ),
                excerpt_ar: Some(
                    "دليل شامل لإنشاء واجهات برمجة تطبيقات REST آمنة وقابلة للتطوير باستخدام PHP وقاعدة بيانات MySQL."
                        .to_string(),
                ),
                cover_image: Some(
                    "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=600".to_string(),
                ),
                category: Some("Backend".to_string()),
                tags: tags(&["PHP", "MySQL", "API"]),
                published: true,
                published_at: day(2024, 1, 10),
                read_time: Some(12),
                ..BlogPost::default()
            },
        ),
        Entry::new(
            "3",
            BlogPost {
                title: "Introduction to AI and Expert Systems".to_string(),
                title_ar: Some("مقدمة في الذكاء الاصطناعي والنظم الخبيرة".to_string()),
                slug: "ai-expert-systems".to_string(),
                excerpt: Some(
                    "Explore the fundamentals of artificial intelligence and how expert systems can solve complex problems."
                        .to_string(),
                ),
                excerpt_ar: Some(
                    "استكشف أساسيات الذكاء الاصطناعي وكيف يمكن للنظم الخبيرة حل المشاكل المعقدة."
                        .to_string(),
                ),
                cover_image: Some(
                    "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=600".to_string(),
                ),
                category: Some("AI".to_string()),
                tags: tags(&["AI", "Expert Systems", "Machine Learning"]),
                published: true,
                published_at: day(2024, 1, 5),
                read_time: Some(10),
                ..BlogPost::default()
            },
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_posts_are_published_newest_first() {
        let posts = demo_posts();
        assert_eq!(posts.len(), 3);
        assert!(posts.iter().all(|post| post.fields.published));
        assert!(posts
            .windows(2)
            .all(|pair| pair[0].fields.published_at > pair[1].fields.published_at));
    }

    #[test]
    fn demo_posts_carry_both_languages() {
        for post in demo_posts() {
            assert!(post.fields.title_ar.is_some());
            assert!(post.fields.excerpt_ar.is_some());
            assert!(!post.fields.slug.is_empty());
        }
    }
}
