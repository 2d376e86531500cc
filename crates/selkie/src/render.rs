//! The render capability shared by everything that can produce a selector string.

/// Anything that can produce a CSS selector string on demand.
///
/// Both [`SelectorBuilder`](crate::SelectorBuilder) and
/// [`CombinedSelector`](crate::CombinedSelector) implement this, which is what
/// lets [`combine`](crate::combine) accept either side of a combinator
/// uniformly, including the result of a previous `combine`.
pub trait Render {
    /// Produce the selector string.
    ///
    /// Rendering never mutates the receiver, so repeated calls on an
    /// unmutated value return identical strings.
    fn render(&self) -> String;
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: Render + ?Sized> Render for &mut T {
    fn render(&self) -> String {
        (**self).render()
    }
}
