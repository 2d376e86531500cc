//! Fluent, order-checked CSS selector string builder.
//!
//! # Scope
//!
//! This crate implements:
//! - **Selector building** ([Selectors Level 4](https://www.w3.org/TR/selectors-4/))
//!   - One entry point per fragment category: [`element`], [`id`], [`class`],
//!     [`attr`], [`pseudo_class`], [`pseudo_element`]
//!   - Chained accumulation with the category order
//!     {element, id, class, attribute, pseudo-class, pseudo-element} enforced
//!   - Singleton categories (element, id, pseudo-element) limited to one value
//!
//! - **Combinators** ([§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators))
//!   - Descendant, child (`>`), next-sibling (`+`), subsequent-sibling (`~`)
//!   - [`combine`] joins any two values with the [`Render`] capability,
//!     including the results of previous `combine` calls
//!
//! # Not Implemented
//!
//! - Parsing selector strings back into fragments
//! - Syntax validation inside a fragment (an attribute expression is carried
//!   verbatim)
//! - Specificity calculation
//! - Any DOM matching
//!
//! # Example
//!
//! ```
//! use selkie::{Combinator, Render, combine, element};
//!
//! # fn main() -> Result<(), selkie::SelectorError> {
//! let selector = combine(
//!     element("div").with_id("main")?,
//!     Combinator::NextSibling,
//!     element("table").with_id("data")?,
//! );
//! assert_eq!(selector.render(), "div#main + table#data");
//! # Ok(())
//! # }
//! ```

/// Selector fragment categories and the fluent builder.
pub mod builder;
/// Combinator tokens and selector joining.
pub mod combine;
/// Builder error taxonomy.
pub mod error;
/// The shared render capability.
pub mod render;

// Re-exports for convenience
pub use builder::{
    Fragment, SelectorBuilder, attr, class, element, id, pseudo_class, pseudo_element,
};
pub use combine::{CombinedSelector, Combinator, combine};
pub use error::SelectorError;
pub use render::Render;
