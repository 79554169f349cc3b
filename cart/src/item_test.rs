use super::*;

// =============================================================
// CartItem
// =============================================================

#[test]
fn new_item_defaults_to_quantity_one_without_metadata() {
    let item = CartItem::new("sat-prep", "SAT Prep", 499.0);
    assert_eq!(item.quantity, 1);
    assert_eq!(item.category, None);
    assert_eq!(item.kind, None);
    assert_eq!(item.instructor, None);
}

#[test]
fn line_total_multiplies_price_by_quantity() {
    let item = CartItem::new("a", "A", 12.5).with_quantity(4);
    assert!((item.line_total() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn validate_accepts_free_item() {
    assert_eq!(CartItem::new("intro", "Intro session", 0.0).validate(), Ok(()));
}

#[test]
fn validate_rejects_blank_id() {
    assert_eq!(CartItem::new("  ", "Blank", 10.0).validate(), Err(CartItemError::EmptyId));
}

#[test]
fn validate_rejects_negative_price() {
    let err = CartItem::new("a", "A", -1.0).validate().expect_err("negative price");
    assert!(matches!(err, CartItemError::NegativePrice { .. }));
}

#[test]
fn validate_rejects_nan_price() {
    let err = CartItem::new("a", "A", f64::NAN).validate().expect_err("nan price");
    assert!(matches!(err, CartItemError::NonFinitePrice { .. }));
}

#[test]
fn validate_rejects_zero_quantity() {
    let err = CartItem::new("a", "A", 1.0).with_quantity(0).validate().expect_err("zero quantity");
    assert_eq!(err, CartItemError::ZeroQuantity { id: "a".to_owned() });
}

#[test]
fn item_serializes_kind_as_type_and_skips_missing_metadata() {
    let item = CartItem::new("camp-g5-2w", "Summer Camp", 300.0)
        .with_kind("camp")
        .with_duration("2 weeks");
    let json = serde_json::to_value(&item).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "id": "camp-g5-2w",
            "name": "Summer Camp",
            "price": 300.0,
            "quantity": 1,
            "type": "camp",
            "duration": "2 weeks"
        })
    );
}

// =============================================================
// CartState
// =============================================================

#[test]
fn empty_state_has_zero_aggregates() {
    let state = CartState::empty();
    assert!(state.is_empty());
    assert_eq!(state.item_count(), 0);
    assert!(state.total().abs() < f64::EPSILON);
}

#[test]
fn from_items_recomputes_aggregates() {
    let state = CartState::from_items(vec![
        CartItem::new("a", "A", 5.0),
        CartItem::new("b", "B", 7.0).with_quantity(2),
    ]);
    assert_eq!(state.item_count(), 3);
    assert!((state.total() - 19.0).abs() < f64::EPSILON);
}

#[test]
fn line_finds_item_by_id() {
    let state = CartState::from_items(vec![CartItem::new("a", "A", 5.0)]);
    assert_eq!(state.line("a").map(|item| item.name.as_str()), Some("A"));
    assert!(state.line("missing").is_none());
}

#[test]
fn state_serializes_with_camel_case_item_count() {
    let state = CartState::from_items(vec![CartItem::new("a", "A", 10.0).with_quantity(2)]);
    let json = serde_json::to_value(&state).expect("serialize");
    assert_eq!(json["itemCount"], 2);
    assert_eq!(json["total"], 20.0);
    assert_eq!(json["items"][0]["id"], "a");
}
