//! Fluent accumulation of selector fragments with order checking.
//!
//! [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
//! "A compound selector is a sequence of simple selectors that are not
//! separated by a combinator." This module builds that sequence one fragment
//! at a time and enforces the conventional writing order before rendering.

use serde::Serialize;
use strum_macros::Display;

use crate::error::SelectorError;
use crate::render::Render;

/// The six selector fragment categories, in their required writing order.
///
/// Derives `Ord` so the ordering invariant is a single comparison: a fragment
/// may be added only while no strictly later category is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize)]
#[strum(serialize_all = "kebab-case")]
pub enum Fragment {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// Bare element name, e.g. `div`. Singleton.
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// Rendered with a `#` prefix, e.g. `#main`. Singleton.
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// Rendered with a `.` prefix, e.g. `.active`. Repeatable.
    Class,

    /// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// Rendered in square brackets, e.g. `[href$=".png"]`. Repeatable.
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// Rendered with a `:` prefix, e.g. `:focus`. Repeatable.
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// Rendered with a `::` prefix, e.g. `::before`. Singleton.
    PseudoElement,
}

/// A fluent accumulator of selector fragments.
///
/// Fragments must be supplied in [`Fragment`] order; once a later category has
/// been started, no earlier category may be added to. The singleton categories
/// (element, id, pseudo-element) reject a second value.
///
/// Mutating methods return `Result<&mut Self, _>` so chains read fluently with
/// `?` while a rejected call leaves the builder in its pre-call state:
///
/// ```
/// use selkie::{id, Render};
///
/// # fn main() -> Result<(), selkie::SelectorError> {
/// let rendered = id("main").with_class("container")?.with_class("editable")?.render();
/// assert_eq!(rendered, "#main.container.editable");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectorBuilder {
    element: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<String>,
    pseudo_classes: Vec<String>,
    pseudo_element: Option<String>,
}

impl SelectorBuilder {
    /// Create an empty builder with no fragments.
    ///
    /// The per-category entry points ([`element`](crate::element),
    /// [`id`](crate::id), ...) are usually the more convenient way to start a
    /// chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element tag, rendered bare at the front of the selector.
    ///
    /// # Errors
    /// [`SelectorError::Duplicate`] if an element tag is already set;
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn with_element(&mut self, tag: &str) -> Result<&mut Self, SelectorError> {
        if self.element.is_some() {
            return Err(SelectorError::Duplicate(Fragment::Element));
        }
        self.check_order(Fragment::Element)?;
        self.element = Some(tag.to_string());
        Ok(self)
    }

    /// Set the id value, rendered as `#value`.
    ///
    /// # Errors
    /// [`SelectorError::Duplicate`] if an id is already set;
    /// [`SelectorError::OutOfOrder`] if any later category is populated.
    pub fn with_id(&mut self, value: &str) -> Result<&mut Self, SelectorError> {
        if self.id.is_some() {
            return Err(SelectorError::Duplicate(Fragment::Id));
        }
        self.check_order(Fragment::Id)?;
        self.id = Some(value.to_string());
        Ok(self)
    }

    /// Append a class name, rendered as `.name`. Insertion order is preserved.
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrder`] if an attribute, pseudo-class, or
    /// pseudo-element is already present.
    pub fn with_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.check_order(Fragment::Class)?;
        self.classes.push(name.to_string());
        Ok(self)
    }

    /// Append an attribute expression, rendered as `[expr]`.
    ///
    /// The expression is carried verbatim; its internal syntax is not
    /// validated.
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrder`] if a pseudo-class or pseudo-element is
    /// already present.
    pub fn with_attribute(&mut self, expr: &str) -> Result<&mut Self, SelectorError> {
        self.check_order(Fragment::Attribute)?;
        self.attributes.push(expr.to_string());
        Ok(self)
    }

    /// Append a pseudo-class name, rendered as `:name`.
    ///
    /// # Errors
    /// [`SelectorError::OutOfOrder`] if a pseudo-element is already present.
    pub fn with_pseudo_class(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        self.check_order(Fragment::PseudoClass)?;
        self.pseudo_classes.push(name.to_string());
        Ok(self)
    }

    /// Set the pseudo-element, rendered as `::name` at the very end.
    ///
    /// # Errors
    /// [`SelectorError::Duplicate`] if a pseudo-element is already set.
    pub fn with_pseudo_element(&mut self, name: &str) -> Result<&mut Self, SelectorError> {
        if self.pseudo_element.is_some() {
            return Err(SelectorError::Duplicate(Fragment::PseudoElement));
        }
        self.pseudo_element = Some(name.to_string());
        Ok(self)
    }

    /// Reject `attempted` if a strictly later category is already populated.
    fn check_order(&self, attempted: Fragment) -> Result<(), SelectorError> {
        match self.latest_populated() {
            Some(present) if present > attempted => {
                Err(SelectorError::OutOfOrder { attempted, present })
            }
            _ => Ok(()),
        }
    }

    /// The latest (rightmost in writing order) category with a value, if any.
    fn latest_populated(&self) -> Option<Fragment> {
        if self.pseudo_element.is_some() {
            Some(Fragment::PseudoElement)
        } else if !self.pseudo_classes.is_empty() {
            Some(Fragment::PseudoClass)
        } else if !self.attributes.is_empty() {
            Some(Fragment::Attribute)
        } else if !self.classes.is_empty() {
            Some(Fragment::Class)
        } else if self.id.is_some() {
            Some(Fragment::Id)
        } else if self.element.is_some() {
            Some(Fragment::Element)
        } else {
            None
        }
    }
}

/// Start a chain from an element tag: `element("div")` renders as `"div"`.
#[must_use]
pub fn element(tag: &str) -> SelectorBuilder {
    SelectorBuilder {
        element: Some(tag.to_string()),
        ..SelectorBuilder::default()
    }
}

/// Start a chain from an id value: `id("main")` renders as `"#main"`.
#[must_use]
pub fn id(value: &str) -> SelectorBuilder {
    SelectorBuilder {
        id: Some(value.to_string()),
        ..SelectorBuilder::default()
    }
}

/// Start a chain from a class name: `class("active")` renders as `".active"`.
#[must_use]
pub fn class(name: &str) -> SelectorBuilder {
    SelectorBuilder {
        classes: vec![name.to_string()],
        ..SelectorBuilder::default()
    }
}

/// Start a chain from an attribute expression: `attr("href")` renders as
/// `"[href]"`.
#[must_use]
pub fn attr(expr: &str) -> SelectorBuilder {
    SelectorBuilder {
        attributes: vec![expr.to_string()],
        ..SelectorBuilder::default()
    }
}

/// Start a chain from a pseudo-class: `pseudo_class("hover")` renders as
/// `":hover"`.
#[must_use]
pub fn pseudo_class(name: &str) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_classes: vec![name.to_string()],
        ..SelectorBuilder::default()
    }
}

/// Start a chain from a pseudo-element: `pseudo_element("before")` renders as
/// `"::before"`.
#[must_use]
pub fn pseudo_element(name: &str) -> SelectorBuilder {
    SelectorBuilder {
        pseudo_element: Some(name.to_string()),
        ..SelectorBuilder::default()
    }
}

impl Render for SelectorBuilder {
    /// Concatenate the populated categories in fixed order with their prefix
    /// markers: bare element, `#id`, `.class`, `[attr]`, `:pseudo-class`,
    /// `::pseudo-element`. Empty categories are omitted.
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(tag) = &self.element {
            out.push_str(tag);
        }
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        for attr in &self.attributes {
            out.push('[');
            out.push_str(attr);
            out.push(']');
        }
        for pseudo in &self.pseudo_classes {
            out.push(':');
            out.push_str(pseudo);
        }
        if let Some(pseudo) = &self.pseudo_element {
            out.push_str("::");
            out.push_str(pseudo);
        }
        out
    }
}

impl std::fmt::Display for SelectorBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
