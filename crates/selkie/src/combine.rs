//! Joining two rendered selectors with a combinator token.
//!
//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."

use serde::Serialize;
use strum_macros::Display;

use crate::render::Render;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// The four combinator tokens. `Display` renders the raw token, which for
/// [`Combinator::Descendant`] is itself a single space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A descendant combinator is whitespace that separates two compound
    /// selectors."
    #[strum(serialize = " ")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A child combinator is a greater-than sign (>) that separates two
    /// compound selectors."
    #[strum(serialize = ">")]
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A next-sibling combinator is a plus sign (+) that separates two
    /// compound selectors."
    #[strum(serialize = "+")]
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A subsequent-sibling combinator is a tilde (~) that separates two
    /// compound selectors."
    #[strum(serialize = "~")]
    SubsequentSibling,
}

impl Combinator {
    /// The raw combinator token.
    #[must_use]
    pub const fn token(self) -> char {
        match self {
            Self::Descendant => ' ',
            Self::Child => '>',
            Self::NextSibling => '+',
            Self::SubsequentSibling => '~',
        }
    }
}

impl TryFrom<char> for Combinator {
    type Error = char;

    /// Map a raw token from the set `{' ', '>', '+', '~'}` back to its
    /// combinator; any other character is returned unchanged as the error.
    fn try_from(token: char) -> Result<Self, char> {
        match token {
            ' ' => Ok(Self::Descendant),
            '>' => Ok(Self::Child),
            '+' => Ok(Self::NextSibling),
            '~' => Ok(Self::SubsequentSibling),
            other => Err(other),
        }
    }
}

/// Two selectors joined by a combinator, pre-rendered at construction.
///
/// Immutable: [`combine`] renders both operands once and stores the joined
/// string; `render` hands back that fixed string from then on. Implements
/// [`Render`] itself, so a combined selector can be an operand of a further
/// [`combine`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CombinedSelector {
    rendered: String,
}

impl Render for CombinedSelector {
    fn render(&self) -> String {
        self.rendered.clone()
    }
}

impl std::fmt::Display for CombinedSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rendered)
    }
}

/// Join two selectors as `"<left> <token> <right>"`.
///
/// The token is padded with a single space on each side regardless of which
/// token it is; the descendant combinator, whose token is itself a space,
/// therefore yields three spaces between the operands. Both operands only
/// need the [`Render`] capability, so builders, `&mut` chain results, and
/// prior [`CombinedSelector`]s all work on either side.
#[must_use]
#[allow(clippy::needless_pass_by_value)]
pub fn combine<L, R>(left: L, combinator: Combinator, right: R) -> CombinedSelector
where
    L: Render,
    R: Render,
{
    CombinedSelector {
        rendered: format!("{} {combinator} {}", left.render(), right.render()),
    }
}
