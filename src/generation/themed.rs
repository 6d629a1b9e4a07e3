//! Closed-vocabulary sentence templates seeded with themed corpus words

use crate::analysis::themes::Theme;
use crate::analysis::vocabulary::Vocabulary;
use crate::generation::sampling::{coin_flip, pick_from_union};
use rand::Rng;
use rand::seq::IndexedRandom;

const VIOLENT_ACTIONS: [&str; 5] = ["KILL", "DESTROY", "OBLITERATE", "SMASH", "CRUSH"];
const TECH_SYMBOLS: [&str; 6] = ["@", "#", "/", "\\", "*", "&"];
const TECH_NOUNS: [&str; 5] = ["SYSTEM", "PROTOCOL", "RUNTIME", "MEMORY", "DATABASE"];

const EMOTIONS: [&str; 5] = ["LOVE", "HATE", "NEED", "WANT", "CRAVE"];
const EMOTION_OBJECTS: [&str; 5] = ["BRAIN", "SYSTEM", "REALITY", "EXISTENCE", "VOID"];

const CORPORATIONS: [&str; 4] = ["MEGACORP", "BRAINTECH", "MINDCO", "THOUGHTWARE"];
const PRODUCTS: [&str; 4] = ["BRAIN", "MIND", "SOUL", "REALITY"];

const GIBBERISH_PREFIXES: [&str; 4] = ["SYS", "MIND", "BRAIN", "SOUL"];
const GIBBERISH_SYMBOLS: [&str; 7] = ["@", "#", "/", "\\", "*", "&", "$"];
const FILE_EXTENSIONS: [&str; 4] = ["exe", "dll", "sys", "bin"];

const BODY_PARTS: [&str; 5] = ["BRAIN", "HEAD", "FACE", "BODY", "SKULL"];
const BODY_ACTIONS: [&str; 5] = ["MELT", "EXPLODE", "DISSOLVE", "TRANSCEND", "VAPORIZE"];

/// Template families for the thematic strategy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ThemedTemplate {
    /// `SMASH#DATABASE` or `(KILL.exe has stopped responding)`
    ViolentTech,
    /// `*CRAVE VOID intensifies*` and friends
    EmotionalOutburst,
    /// `NEW from MINDCO: SOUL 2.0` and friends
    CorporateParody,
    /// `SYS@BRAIN.dll`
    TechGibberish,
    /// `WARNING: SKULL WILL MELT` or `(FACE status: EXPLODED)`
    BodyHumor,
}

impl ThemedTemplate {
    /// Every family, drawn from uniformly
    pub const ALL: [Self; 5] = [
        Self::ViolentTech,
        Self::EmotionalOutburst,
        Self::CorporateParody,
        Self::TechGibberish,
        Self::BodyHumor,
    ];

    /// Pick a family uniformly at random
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL.choose(rng).copied().unwrap_or(Self::ViolentTech)
    }

    /// Fill this family's template
    ///
    /// Noun and verb slots draw from the fixed list together with the words
    /// of the matching theme bucket, so a violent corpus leaks its own verbs
    /// into the output.
    pub fn render<R: Rng + ?Sized>(self, vocabulary: &Vocabulary, rng: &mut R) -> String {
        let themes = vocabulary.themes();
        let none: &[String] = &[];

        match self {
            Self::ViolentTech => {
                let action = slot(&VIOLENT_ACTIONS, themes.words(Theme::Violent), rng);
                if coin_flip(rng) {
                    let symbol = slot(&TECH_SYMBOLS, none, rng);
                    let noun = slot(&TECH_NOUNS, themes.words(Theme::Tech), rng);
                    format!("{action}{symbol}{noun}")
                } else {
                    format!("({action}.exe has stopped responding)")
                }
            }
            Self::EmotionalOutburst => {
                let emotion = slot(&EMOTIONS, none, rng);
                let object = slot(&EMOTION_OBJECTS, themes.words(Theme::Emotional), rng);
                match rng.random_range(0..4) {
                    0 => format!("{emotion}ing your {object}..."),
                    1 => format!("*{emotion} {object} intensifies*"),
                    2 => format!("cannot {emotion} enough {object}"),
                    _ => format!("{emotion} {object} until death"),
                }
            }
            Self::CorporateParody => {
                let corporation = slot(&CORPORATIONS, none, rng);
                let product = slot(&PRODUCTS, themes.words(Theme::Tech), rng);
                match rng.random_range(0..4) {
                    0 => format!("{corporation}™ - Now with more {product}!"),
                    1 => format!("NEW from {corporation}: {product} 2.0"),
                    2 => format!("{corporation}'s Patent-Pending {product}"),
                    _ => format!("9/10 {corporation} Users Prefer New {product}"),
                }
            }
            Self::TechGibberish => {
                let head = slot(&GIBBERISH_PREFIXES, none, rng);
                let symbol = slot(&GIBBERISH_SYMBOLS, none, rng);
                let tail = slot(&GIBBERISH_PREFIXES, none, rng);
                let extension = slot(&FILE_EXTENSIONS, none, rng);
                format!("{head}{symbol}{tail}.{extension}")
            }
            Self::BodyHumor => {
                let part = slot(&BODY_PARTS, none, rng);
                let action = slot(&BODY_ACTIONS, themes.words(Theme::Violent), rng);
                if coin_flip(rng) {
                    format!("WARNING: {part} WILL {action}")
                } else {
                    format!("({part} status: {})", past_tense(&action))
                }
            }
        }
    }
}

fn slot<R: Rng + ?Sized>(fixed: &[&str], derived: &[String], rng: &mut R) -> String {
    pick_from_union(fixed, derived, rng)
        .unwrap_or_default()
        .to_owned()
}

/// Crude uppercase past tense: `MELT` -> `MELTED`, `EXPLODE` -> `EXPLODED`
pub fn past_tense(verb: &str) -> String {
    if verb.ends_with(['E', 'e']) {
        format!("{verb}D")
    } else {
        format!("{verb}ED")
    }
}
