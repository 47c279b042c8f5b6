use crate::model::ids::ItemId;
use crate::model::item::QuizItem;
use crate::model::media::MediaUri;

/// One multiple-choice option: a composer name and the portrait shown next
/// to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposerOption {
    composer: String,
    image: MediaUri,
}

impl ComposerOption {
    #[must_use]
    pub fn composer(&self) -> &str {
        &self.composer
    }

    #[must_use]
    pub fn image(&self) -> &MediaUri {
        &self.image
    }
}

/// Ordered, immutable list of quiz items.
///
/// The option set is derived once from every item's composer and never
/// shrinks while items are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    items: Vec<QuizItem>,
    options: Vec<ComposerOption>,
}

impl Catalog {
    #[must_use]
    pub fn new(items: Vec<QuizItem>) -> Self {
        let mut options: Vec<ComposerOption> = Vec::new();
        for item in &items {
            if options.iter().any(|opt| opt.composer == item.composer()) {
                continue;
            }
            options.push(ComposerOption {
                composer: item.composer().to_owned(),
                image: item.image().clone(),
            });
        }
        Self { items, options }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&QuizItem> {
        id.index().and_then(|index| self.items.get(index))
    }

    /// Items paired with their identity, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &QuizItem)> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, item)| (ItemId::from_index(index), item))
    }

    #[must_use]
    pub fn items(&self) -> &[QuizItem] {
        &self.items
    }

    /// Distinct composers in first-appearance order.
    #[must_use]
    pub fn options(&self) -> &[ComposerOption] {
        &self.options
    }

    #[must_use]
    pub fn has_option(&self, composer: &str) -> bool {
        self.options.iter().any(|opt| opt.composer == composer)
    }
}

impl FromIterator<QuizItem> for Catalog {
    fn from_iter<T: IntoIterator<Item = QuizItem>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
