use quiz_core::model::{Catalog, QuizItemDraft};

use crate::repository::{CatalogSource, StorageError, catalog_from_drafts};

const MUSIC_BASE: &str = "https://raw.githubusercontent.com/mariolambe/classical-music-quiz/main/src/music";

struct Entry {
    composer: &'static str,
    title: &'static str,
    clip: &'static str,
    image: &'static str,
    trivia: &'static str,
}

const ENTRIES: [Entry; 5] = [
    Entry {
        composer: "Wolfgang Amadeus Mozart",
        title: "Die Zauberflöte",
        clip: "mozart.mp3",
        image: "https://upload.wikimedia.org/wikipedia/commons/1/1e/Wolfgang-amadeus-mozart_1.jpg",
        trivia: "Mozart began composing at the age of 5 and wrote over 600 pieces of music!",
    },
    Entry {
        composer: "Antonio Vivaldi",
        title: "The Four Seasons - Summer",
        clip: "vivaldi.mp3",
        image: "https://upload.wikimedia.org/wikipedia/commons/b/bd/Vivaldi.jpg",
        trivia: "Vivaldi wrote over 500 concertos, with about 230 of them for violin!",
    },
    Entry {
        composer: "Johann Sebastian Bach",
        title: "Cello Suite No. 1 in G",
        clip: "bach.mp3",
        image: "https://upload.wikimedia.org/wikipedia/commons/6/6a/Johann_Sebastian_Bach.jpg",
        trivia: "Bach had 20 children and many of them became musicians too!",
    },
    Entry {
        composer: "Giuseppe Verdi",
        title: "Requiem",
        clip: "verdi.mp3",
        image: "https://upload.wikimedia.org/wikipedia/commons/1/19/Verdi_by_Giovanni_Boldini.jpg",
        trivia: "Giuseppe Verdi was so passionate about gardening that he once said if he hadn't been a composer, he would have been a farmer!",
    },
    Entry {
        composer: "Frédéric Chopin",
        title: "Nocturne in E-flat major, Op. 9, No. 2",
        clip: "chopin.mp3",
        image: "https://upload.wikimedia.org/wikipedia/commons/e/e8/Frederic_Chopin_photo.jpeg",
        trivia: "Chopin's heart is buried in Warsaw, while the rest of him is buried in Paris!",
    },
];

/// The five-composer classical catalog shipped with the app.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    #[must_use]
    pub fn drafts() -> Vec<QuizItemDraft> {
        ENTRIES
            .iter()
            .map(|entry| QuizItemDraft {
                composer: entry.composer.to_owned(),
                title: entry.title.to_owned(),
                audio: format!("{MUSIC_BASE}/{}", entry.clip),
                image: entry.image.to_owned(),
                trivia: entry.trivia.to_owned(),
            })
            .collect()
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> Result<Catalog, StorageError> {
        catalog_from_drafts(Self::drafts())
    }

    fn describe(&self) -> String {
        "built-in classical catalog".to_string()
    }
}
