//! Course catalog offerings and their conversion into cart lines.
//!
//! DESIGN
//! ======
//! One course can be sold at several price points (grade band, duration).
//! Each price point becomes its own cart line, so the line id joins the
//! course id with the chosen grade and duration.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use cart::CartItem;
use serde::{Deserialize, Serialize};

/// A purchasable variant of a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceOption {
    pub grade: Option<String>,
    pub duration: Option<String>,
    pub price: f64,
}

impl PriceOption {
    #[must_use]
    pub fn new(grade: Option<&str>, duration: Option<&str>, price: f64) -> Self {
        Self { grade: grade.map(str::to_owned), duration: duration.map(str::to_owned), price }
    }

    /// Human label such as `Grade 9-10, 8 weeks`, or `Standard` when the
    /// option has neither grade nor duration.
    #[must_use]
    pub fn label(&self) -> String {
        match (self.grade.as_deref(), self.duration.as_deref()) {
            (Some(grade), Some(duration)) => format!("{grade}, {duration}"),
            (Some(grade), None) => grade.to_owned(),
            (None, Some(duration)) => duration.to_owned(),
            (None, None) => "Standard".to_owned(),
        }
    }
}

/// A course, camp, or workshop shown in the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseOffering {
    pub id: String,
    pub name: String,
    pub summary: String,
    pub category: String,
    pub kind: String,
    pub level: Option<String>,
    pub instructor: Option<String>,
    pub image: Option<String>,
    pub options: Vec<PriceOption>,
}

impl CourseOffering {
    /// Snapshot `option` into a quantity-1 cart line.
    #[must_use]
    pub fn to_cart_item(&self, option: &PriceOption) -> CartItem {
        let id = line_id(&self.id, option.grade.as_deref(), option.duration.as_deref());
        let name = if self.options.len() > 1 {
            format!("{} ({})", self.name, option.label())
        } else {
            self.name.clone()
        };

        let mut item = CartItem::new(id, name, option.price)
            .with_category(self.category.clone())
            .with_kind(self.kind.clone());
        if let Some(duration) = &option.duration {
            item = item.with_duration(duration.clone());
        }
        if let Some(level) = option.grade.as_ref().or(self.level.as_ref()) {
            item = item.with_level(level.clone());
        }
        if let Some(image) = &self.image {
            item = item.with_image(image.clone());
        }
        if let Some(instructor) = &self.instructor {
            item = item.with_instructor(instructor.clone());
        }
        item
    }

    /// Lowest option price, for "from $X" labels.
    #[must_use]
    pub fn starting_price(&self) -> Option<f64> {
        self.options.iter().map(|option| option.price).reduce(f64::min)
    }
}

/// Cart line id for `base` customized by `grade` and `duration`.
#[must_use]
pub fn line_id(base: &str, grade: Option<&str>, duration: Option<&str>) -> String {
    let mut id = base.to_owned();
    for part in [grade, duration].into_iter().flatten() {
        let slug = slugify(part);
        if !slug.is_empty() {
            id.push('-');
            id.push_str(&slug);
        }
    }
    id
}

fn slugify(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Offerings rendered on the catalog page.
#[must_use]
pub fn featured_courses() -> Vec<CourseOffering> {
    vec![
        CourseOffering {
            id: "sat-prep".to_owned(),
            name: "SAT Prep Intensive".to_owned(),
            summary: "Small-group SAT preparation with weekly full-length practice tests.".to_owned(),
            category: "Test Prep".to_owned(),
            kind: "course".to_owned(),
            level: Some("High School".to_owned()),
            instructor: Some("Dana Whitfield".to_owned()),
            image: Some("/images/courses/sat-prep.jpg".to_owned()),
            options: vec![
                PriceOption::new(Some("Grade 10"), Some("8 weeks"), 899.0),
                PriceOption::new(Some("Grade 11"), Some("8 weeks"), 949.0),
                PriceOption::new(Some("Grade 11"), Some("12 weeks"), 1_299.0),
            ],
        },
        CourseOffering {
            id: "coding-camp".to_owned(),
            name: "Summer Coding Camp".to_owned(),
            summary: "Build games and web apps in a project-based day camp.".to_owned(),
            category: "Camps".to_owned(),
            kind: "camp".to_owned(),
            level: Some("Middle School".to_owned()),
            instructor: None,
            image: Some("/images/courses/coding-camp.jpg".to_owned()),
            options: vec![
                PriceOption::new(Some("Grades 6-8"), Some("1 week"), 425.0),
                PriceOption::new(Some("Grades 6-8"), Some("2 weeks"), 799.0),
            ],
        },
        CourseOffering {
            id: "essay-workshop".to_owned(),
            name: "College Essay Workshop".to_owned(),
            summary: "Draft, revise, and polish a personal statement with an admissions coach.".to_owned(),
            category: "Admissions".to_owned(),
            kind: "workshop".to_owned(),
            level: Some("Grade 12".to_owned()),
            instructor: Some("Marcus Ortega".to_owned()),
            image: None,
            options: vec![PriceOption::new(None, None, 349.0)],
        },
        CourseOffering {
            id: "math-tutoring".to_owned(),
            name: "Math Tutoring".to_owned(),
            summary: "One-on-one sessions tailored to the current school curriculum.".to_owned(),
            category: "Tutoring".to_owned(),
            kind: "tutoring".to_owned(),
            level: None,
            instructor: None,
            image: Some("/images/courses/math-tutoring.jpg".to_owned()),
            options: vec![
                PriceOption::new(None, Some("4 sessions"), 260.0),
                PriceOption::new(None, Some("10 sessions"), 600.0),
            ],
        },
    ]
}
