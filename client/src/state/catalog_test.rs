use super::*;

fn offering() -> CourseOffering {
    CourseOffering {
        id: "sat-prep".to_owned(),
        name: "SAT Prep".to_owned(),
        summary: String::new(),
        category: "Test Prep".to_owned(),
        kind: "course".to_owned(),
        level: Some("High School".to_owned()),
        instructor: Some("Dana".to_owned()),
        image: None,
        options: vec![
            PriceOption::new(Some("Grade 11"), Some("8 weeks"), 949.0),
            PriceOption::new(Some("Grade 11"), Some("12 weeks"), 1_299.0),
        ],
    }
}

// =============================================================
// line_id
// =============================================================

#[test]
fn line_id_without_customization_is_base_id() {
    assert_eq!(line_id("essay", None, None), "essay");
}

#[test]
fn line_id_joins_grade_and_duration_slugs() {
    assert_eq!(line_id("sat-prep", Some("Grade 11"), Some("8 weeks")), "sat-prep-grade-11-8-weeks");
}

#[test]
fn line_id_collapses_punctuation() {
    assert_eq!(line_id("camp", Some("Grades 6–8"), None), "camp-grades-6-8");
    assert_eq!(line_id("camp", Some("  "), Some("(2 weeks)")), "camp-2-weeks");
}

#[test]
fn different_customizations_produce_distinct_lines() {
    let course = offering();
    let first = course.to_cart_item(&course.options[0]);
    let second = course.to_cart_item(&course.options[1]);
    assert_ne!(first.id, second.id);
}

// =============================================================
// to_cart_item
// =============================================================

#[test]
fn to_cart_item_snapshots_price_and_metadata() {
    let course = offering();
    let item = course.to_cart_item(&course.options[1]);
    assert_eq!(item.id, "sat-prep-grade-11-12-weeks");
    assert_eq!(item.name, "SAT Prep (Grade 11, 12 weeks)");
    assert!((item.price - 1_299.0).abs() < f64::EPSILON);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.category.as_deref(), Some("Test Prep"));
    assert_eq!(item.kind.as_deref(), Some("course"));
    assert_eq!(item.duration.as_deref(), Some("12 weeks"));
    assert_eq!(item.level.as_deref(), Some("Grade 11"));
    assert_eq!(item.instructor.as_deref(), Some("Dana"));
    assert_eq!(item.image, None);
    assert_eq!(item.validate(), Ok(()));
}

#[test]
fn to_cart_item_carries_image_when_offering_has_one() {
    let mut course = offering();
    course.image = Some("/images/courses/sat-prep.jpg".to_owned());
    course.instructor = None;
    let item = course.to_cart_item(&course.options[0]);
    assert_eq!(item.image.as_deref(), Some("/images/courses/sat-prep.jpg"));
    assert_eq!(item.instructor, None);
}

#[test]
fn single_option_course_keeps_plain_name_and_course_level() {
    let mut course = offering();
    course.options = vec![PriceOption::new(None, None, 349.0)];
    let item = course.to_cart_item(&course.options[0]);
    assert_eq!(item.id, "sat-prep");
    assert_eq!(item.name, "SAT Prep");
    assert_eq!(item.level.as_deref(), Some("High School"));
}

#[test]
fn starting_price_is_lowest_option() {
    assert_eq!(offering().starting_price(), Some(949.0));
    let mut course = offering();
    course.options.clear();
    assert_eq!(course.starting_price(), None);
}

#[test]
fn price_option_labels() {
    assert_eq!(PriceOption::new(Some("Grade 9"), Some("4 weeks"), 1.0).label(), "Grade 9, 4 weeks");
    assert_eq!(PriceOption::new(None, Some("4 sessions"), 1.0).label(), "4 sessions");
    assert_eq!(PriceOption::new(None, None, 1.0).label(), "Standard");
}

// =============================================================
// featured_courses
// =============================================================

#[test]
fn featured_courses_produce_valid_unique_lines() {
    let mut ids = Vec::new();
    for course in featured_courses() {
        assert!(!course.options.is_empty(), "{} has no options", course.id);
        for option in &course.options {
            let item = course.to_cart_item(option);
            assert_eq!(item.validate(), Ok(()));
            ids.push(item.id);
        }
    }
    let len = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), len);
}
