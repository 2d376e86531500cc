//! Errors reported while accumulating selector fragments.

use thiserror::Error;

use crate::builder::Fragment;

/// Why a fragment was rejected by the builder.
///
/// Both variants are raised synchronously at the offending call and leave the
/// builder exactly as it was before the call; the violating mutation is never
/// applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A singleton category (element, id, pseudo-element) was given a second
    /// value.
    ///
    /// [§ 5.1 Type selectors](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// and [§ 6.7 ID selectors](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// each appear at most once in a compound selector.
    #[error("duplicate {0} fragment: a selector holds at most one {0}")]
    Duplicate(Fragment),

    /// A fragment arrived after a later category had already been populated.
    ///
    /// Fragments must follow the fixed order element, id, class, attribute,
    /// pseudo-class, pseudo-element.
    #[error("{attempted} fragment after {present}: fragments must be supplied in element, id, class, attribute, pseudo-class, pseudo-element order")]
    OutOfOrder {
        /// The category the rejected call tried to add to.
        attempted: Fragment,
        /// The latest already-populated category that forbids it.
        present: Fragment,
    },
}
