//! Feature cards and the `cards!` collector.

use std::fmt;
use uuid::Uuid;

/// Synthetic, generated identifier of a card.
///
/// Unique by construction; never derived from card content.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CardId(String);

impl CardId {
    /// Generates a fresh random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The identifier as a string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One feature-highlight row: symbol, title and subtitle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    symbol: String,
    title: String,
    subtitle: String,
}

impl Card {
    /// Creates a card with a freshly generated id.
    #[must_use]
    pub fn new(symbol: impl Into<String>, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            id: CardId::generate(),
            symbol: symbol.into(),
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }

    /// Unique id.
    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    /// Symbol glyph name.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Headline.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Supporting text.
    #[must_use]
    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }
}

/// Ordered card list. Absent entries are dropped; order is kept.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardList(Vec<Card>);

impl CardList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Collects present entries, keeping their order.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = Option<Card>>,
    {
        Self(entries.into_iter().flatten().collect())
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// Cards as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }
}

impl From<Vec<Card>> for CardList {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards)
    }
}

impl FromIterator<Card> for CardList {
    fn from_iter<T: IntoIterator<Item = Card>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CardList {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Collects cards into a [`CardList`].
///
/// Each entry may be a [`Card`] or an `Option<Card>`; `None` entries are
/// dropped and the rest keep their order.
///
/// ```
/// use onboard_sheet::{cards, Card};
///
/// let show_friends = false;
/// let list = cards![
///     Card::new("list.bullet", "What's New", "Fresh picks."),
///     show_friends.then(|| Card::new("person.2", "Friends", "Play together.")),
///     Card::new("square.stack", "Library", "Everything in one place."),
/// ];
/// assert_eq!(list.len(), 2);
/// ```
#[macro_export]
macro_rules! cards {
    () => {
        $crate::CardList::new()
    };
    ($($entry:expr),+ $(,)?) => {
        $crate::CardList::from_entries([
            $(::std::option::Option::<$crate::Card>::from($entry)),+
        ])
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique_for_identical_content() {
        let a = Card::new("star", "Same", "Same");
        let b = Card::new("star", "Same", "Same");
        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_is_uuid_string() {
        let card = Card::new("star", "t", "s");
        assert!(Uuid::parse_str(card.id().as_str()).is_ok());
    }

    #[test]
    fn test_macro_filters_none_and_keeps_order() {
        let list = crate::cards![
            Card::new("a", "first", ""),
            None,
            Some(Card::new("b", "second", "")),
            Card::new("c", "third", ""),
        ];

        let titles: Vec<_> = list.iter().map(Card::title).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_macro_empty() {
        let list = crate::cards![];
        assert!(list.is_empty());
    }
}
