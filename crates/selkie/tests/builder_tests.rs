//! Integration tests for fluent selector building and order checking.

use selkie::{
    Fragment, Render, SelectorBuilder, SelectorError, attr, class, element, id, pseudo_class,
    pseudo_element,
};

// Rendering Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_render_empty_builder() {
    assert_eq!(SelectorBuilder::new().render(), "");
}

#[test]
fn test_render_single_fragment_per_entry_point() {
    assert_eq!(element("div").render(), "div");
    assert_eq!(id("main").render(), "#main");
    assert_eq!(class("active").render(), ".active");
    assert_eq!(attr("href").render(), "[href]");
    assert_eq!(pseudo_class("hover").render(), ":hover");
    assert_eq!(pseudo_element("before").render(), "::before");
}

#[test]
fn test_render_id_and_classes() {
    let rendered = id("main")
        .with_class("container")
        .unwrap()
        .with_class("editable")
        .unwrap()
        .render();
    assert_eq!(rendered, "#main.container.editable");
}

#[test]
fn test_render_attribute_and_pseudo_class() {
    let rendered = element("a")
        .with_attribute("href$=\".png\"")
        .unwrap()
        .with_pseudo_class("focus")
        .unwrap()
        .render();
    assert_eq!(rendered, "a[href$=\".png\"]:focus");
}

#[test]
fn test_render_all_categories_in_fixed_order() {
    let rendered = element("input")
        .with_id("email")
        .unwrap()
        .with_class("form-field")
        .unwrap()
        .with_attribute("type=\"text\"")
        .unwrap()
        .with_pseudo_class("focus")
        .unwrap()
        .with_pseudo_element("placeholder")
        .unwrap()
        .render();
    assert_eq!(
        rendered,
        "input#email.form-field[type=\"text\"]:focus::placeholder"
    );
}

#[test]
fn test_render_preserves_insertion_order_within_repeatable_categories() {
    let rendered = class("btn")
        .with_class("btn-large")
        .unwrap()
        .with_attribute("disabled")
        .unwrap()
        .with_attribute("data-kind=\"primary\"")
        .unwrap()
        .with_pseudo_class("hover")
        .unwrap()
        .with_pseudo_class("first-child")
        .unwrap()
        .render();
    assert_eq!(
        rendered,
        ".btn.btn-large[disabled][data-kind=\"primary\"]:hover:first-child"
    );
}

#[test]
fn test_render_is_pure_and_idempotent() {
    let mut builder = element("div");
    let _ = builder.with_class("container").unwrap();
    let first = builder.render();
    let second = builder.render();
    assert_eq!(first, "div.container");
    assert_eq!(first, second);
}

// Duplicate Rejection Tests
// Singleton categories: element, id, pseudo-element.

#[test]
fn test_second_element_is_rejected() {
    let mut builder = element("div");
    let err = builder.with_element("span").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Fragment::Element));
}

#[test]
fn test_second_id_is_rejected() {
    let mut builder = id("main");
    let err = builder.with_id("other").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Fragment::Id));
}

#[test]
fn test_second_pseudo_element_is_rejected() {
    let mut builder = pseudo_element("before");
    let err = builder.with_pseudo_element("after").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Fragment::PseudoElement));
}

#[test]
fn test_duplicate_is_reported_before_ordering() {
    // Element both duplicated and out of order; duplicate wins.
    let mut builder = element("div");
    let _ = builder.with_class("container").unwrap();
    let err = builder.with_element("span").unwrap_err();
    assert_eq!(err, SelectorError::Duplicate(Fragment::Element));
}

// Ordering Tests
// Fixed order: element, id, class, attribute, pseudo-class, pseudo-element.

#[test]
fn test_element_after_class_is_out_of_order() {
    let mut builder = class("container");
    let err = builder.with_element("div").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::Element,
            present: Fragment::Class,
        }
    );
}

#[test]
fn test_id_after_attribute_is_out_of_order() {
    let mut builder = attr("href");
    let err = builder.with_id("main").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::Id,
            present: Fragment::Attribute,
        }
    );
}

#[test]
fn test_class_after_pseudo_class_is_out_of_order() {
    let mut builder = pseudo_class("hover");
    let err = builder.with_class("active").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::Class,
            present: Fragment::PseudoClass,
        }
    );
}

#[test]
fn test_attribute_after_pseudo_element_is_out_of_order() {
    let mut builder = pseudo_element("before");
    let err = builder.with_attribute("href").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::Attribute,
            present: Fragment::PseudoElement,
        }
    );
}

#[test]
fn test_pseudo_class_after_pseudo_element_is_out_of_order() {
    let mut builder = pseudo_element("before");
    let err = builder.with_pseudo_class("hover").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::PseudoClass,
            present: Fragment::PseudoElement,
        }
    );
}

#[test]
fn test_out_of_order_names_the_latest_populated_category() {
    let mut builder = element("div");
    let _ = builder.with_class("a").unwrap();
    let _ = builder.with_pseudo_class("hover").unwrap();
    let err = builder.with_class("b").unwrap_err();
    assert_eq!(
        err,
        SelectorError::OutOfOrder {
            attempted: Fragment::Class,
            present: Fragment::PseudoClass,
        }
    );
}

#[test]
fn test_failed_call_leaves_builder_in_pre_call_state() {
    let mut builder = id("main");
    let _ = builder.with_class("container").unwrap();
    let before = builder.render();

    assert!(builder.with_element("div").is_err());
    assert!(builder.with_id("other").is_err());

    assert_eq!(builder.render(), before);
    assert_eq!(builder.render(), "#main.container");
}

#[test]
fn test_skipping_categories_is_allowed() {
    // Order only forbids going backwards; gaps are fine.
    let rendered = element("p").with_pseudo_element("first-line").unwrap().render();
    assert_eq!(rendered, "p::first-line");
}

// Error and Category Display Tests

#[test]
fn test_fragment_display_names() {
    assert_eq!(Fragment::Element.to_string(), "element");
    assert_eq!(Fragment::Id.to_string(), "id");
    assert_eq!(Fragment::Class.to_string(), "class");
    assert_eq!(Fragment::Attribute.to_string(), "attribute");
    assert_eq!(Fragment::PseudoClass.to_string(), "pseudo-class");
    assert_eq!(Fragment::PseudoElement.to_string(), "pseudo-element");
}

#[test]
fn test_error_messages_name_the_categories() {
    let duplicate = SelectorError::Duplicate(Fragment::Id).to_string();
    assert_eq!(duplicate, "duplicate id fragment: a selector holds at most one id");

    let out_of_order = SelectorError::OutOfOrder {
        attempted: Fragment::Element,
        present: Fragment::Class,
    }
    .to_string();
    assert!(out_of_order.starts_with("element fragment after class"));
}

#[test]
fn test_display_matches_render() {
    let mut builder = element("div");
    let _ = builder.with_class("container").unwrap();
    assert_eq!(builder.to_string(), builder.render());
}

#[test]
fn test_builder_serializes_by_category() {
    let mut builder = element("a");
    let _ = builder.with_class("external").unwrap();
    let _ = builder.with_pseudo_class("visited").unwrap();

    let value = serde_json::to_value(&builder).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "element": "a",
            "id": null,
            "classes": ["external"],
            "attributes": [],
            "pseudo_classes": ["visited"],
            "pseudo_element": null,
        })
    );
}
