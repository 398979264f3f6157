//! Reference tables for reading composition.
//!
//! Five table families drive the oracle: the ten heavenly stems (with their
//! elements and polarities), the twelve earthly branches (with animal
//! glyphs), the food taboos, the misfortune categories, and the advice tips.
//! Tables are loaded once, validated, and stay immutable for the process
//! lifetime; every reading references them by index.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{UnkeError, UnkeResult};

/// The ten heavenly stems, in cycle order.
pub const STEM_GLYPHS: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];

/// The five elements; a stem's element is `stem_index / 2`.
pub const ELEMENTS: [&str; 5] = ["Wood", "Fire", "Earth", "Metal", "Water"];

/// Stem polarity; a stem's polarity is `stem_index % 2`.
pub const POLARITIES: [&str; 2] = ["yang", "yin"];

/// The twelve earthly branches as `(glyph, code, name)`, in cycle order.
/// `code` is the stable identifier used for asset lookup.
pub const BRANCH_DEFAULTS: [(&str, &str, &str); 12] = [
    ("子", "zi", "Rat"),
    ("丑", "chou", "Ox"),
    ("寅", "yin", "Tiger"),
    ("卯", "mao", "Rabbit"),
    ("辰", "chen", "Dragon"),
    ("巳", "si", "Snake"),
    ("午", "wu", "Horse"),
    ("未", "wei", "Goat"),
    ("申", "shen", "Monkey"),
    ("酉", "you", "Rooster"),
    ("戌", "xu", "Dog"),
    ("亥", "hai", "Pig"),
];

/// Animal glyph per branch code.
pub const ANIMAL_DEFAULTS: [(&str, &str); 12] = [
    ("zi", "🐀"),
    ("chou", "🐂"),
    ("yin", "🐅"),
    ("mao", "🐇"),
    ("chen", "🐉"),
    ("si", "🐍"),
    ("wu", "🐎"),
    ("wei", "🐐"),
    ("shen", "🐒"),
    ("you", "🐓"),
    ("xu", "🐕"),
    ("hai", "🐖"),
];

/// Food-clash taboos (食物相克 folklore), one per branch in the builtin set.
/// The taboo list length is independent of the 12-branch cycle; selection
/// uses a decoupled hash, so custom lists may be any non-zero length.
const TABOO_DEFAULTS: [&str; 12] = [
    "crab + persimmon (螃蟹+柿子)",
    "milk + orange (牛奶+橙)",
    "shrimp or crab + large doses of vitamin C",
    "tofu + spinach (豆腐+菠菜)",
    "strong tea right after crab (浓茶+蟹)",
    "lychee + alcohol (荔枝+酒)",
    "watermelon + mutton (西瓜+羊肉)",
    "honey + spring onion (蜂蜜+葱)",
    "river snails + corn (田螺+玉米)",
    "egg + soy milk (鸡蛋+豆浆)",
    "red date + cucumber (红枣+黄瓜)",
    "shrimp + pumpkin (虾+南瓜)",
];

/// Misfortune categories as `(emoji, code, name, description)`.
/// Codes are unique and stable: they feed both the selection arithmetic and
/// external asset lookup, and they end up in exported calendar UIDs.
const MISFORTUNE_DEFAULTS: [(&str, &str, &str, &str); 18] = [
    (
        "🔥",
        "fire",
        "Everything Is Fine",
        "Something will catch fire today. Probably a deadline, possibly the kitchen.",
    ),
    (
        "🌊",
        "flood",
        "Noah Goes Hard",
        "Water finds a way: a burst pipe, a spilled mug, or your neighbor's washing machine above your ceiling.",
    ),
    (
        "🕳️",
        "hole",
        "The Black Hole",
        "Existential dread, the usual void, business as usual. Nothing new under the absent sun.",
    ),
    (
        "🧲",
        "theft",
        "Sticky Fingers",
        "Keep a hand on your wallet. Someone with remarkable manners and no conscience is nearby.",
    ),
    (
        "💻",
        "tech_fail",
        "Blue Screen of Destiny",
        "Your devices will stage a small coordinated rebellion. The VPN falls first.",
    ),
    (
        "🧳",
        "lost",
        "The Misplacer",
        "High risk of losing keys, documents, money, or dignity. Lose the last one, it was mostly decorative.",
    ),
    (
        "🤒",
        "illness",
        "Sudden Ailment",
        "A suspicious sniffle approaches. Cordyceps spores are not ruled out.",
    ),
    (
        "🧿",
        "curse",
        "Someone Is Wrong Online",
        "The evil eye manifests as comment threads. You will argue. You will lose. Every time.",
    ),
    (
        "⏰",
        "deadline",
        "Deadlines Ablaze",
        "An ex, a boss, or a past decision calls you within the hour. Do not pick up.",
    ),
    (
        "🗯️",
        "arguments",
        "Quarrel Out of Nowhere",
        "You will fall out with loved ones over a detail nobody will remember by Thursday.",
    ),
    (
        "🙈",
        "embarr",
        "Public Embarrassment",
        "You will be asked to present something on no notice, and the audience will remember forever.",
    ),
    (
        "🗃️",
        "bureau",
        "Bureaucratic Quest",
        "A form requires a stamp that requires a form. Pack snacks, the queue is generational.",
    ),
    (
        "🚧",
        "transport",
        "Roads of Wrath",
        "Every route you pick is under repair. The detour is also under repair.",
    ),
    (
        "🩹",
        "bruise",
        "Minor Injuries",
        "A stubbed toe, a paper cut, a bruised ego. Scroll memes until the healing completes.",
    ),
    (
        "🧯",
        "appliance",
        "Household Uprising",
        "The cockroaches unionize and seize the refrigerator. Their demands are non-negotiable.",
    ),
    (
        "🧒🐶",
        "kids_pets",
        "Domestic Mischief",
        "Every wall within reach will be decorated. Occasionally even by the child.",
    ),
    (
        "👻",
        "ghost",
        "Night Visitors",
        "Your late great-grandfather spends the night lecturing you on filial piety. He has notes.",
    ),
    (
        "🪦",
        "grim",
        "Grim Portent",
        "The exchange rate does something unspeakable. Avoid checking it before breakfast.",
    ),
];

/// Advice tips (TCM and daoist practice, kept gentle).
const TIP_DEFAULTS: [&str; 20] = [
    "Belly breathing into the lower dantian for 5 minutes, exhale longer than inhale.",
    "The six healing sounds: xu for liver, he for heart, hu for spleen, si for lungs, chui for kidneys, xi for the triple burner.",
    "Rub your palms warm and cup them over your eyes for 30-60 seconds.",
    "Tap the chest gently with open palms, 36 times.",
    "Roll each foot over a ball for 1-2 minutes.",
    "Warm the lower dantian with a heat pad for 10 minutes, warm, never hot.",
    "Ginger tea with red date and goji berries, to taste.",
    "A warm foot bath with a pinch of salt, 10-15 minutes before sleep.",
    "Self-massage HeGu (LI4) and ZuSanLi (ST36), 1-2 minutes per side.",
    "NeiGuan (PC6) for 1-2 minutes against unease or nausea, soft circles.",
    "Warm up FengChi (GB20) at the base of the skull with gentle circles.",
    "Slow shoulder and neck rolls, 6 in each direction.",
    "Shake the whole body loosely for 1-2 minutes to move stagnation.",
    "5-10 minutes of Baduanjin or stretching, pick 3-4 movements.",
    "Air the room for 3 minutes; light incense if you like.",
    "Less cold food on a cold day; choose warm meals.",
    "Warm water in small sips throughout the day.",
    "Rub the lower back over the kidneys for 1-2 minutes until warm.",
    "Five minutes without a screen: gaze into the distance, drop the shoulders.",
    "Clockwise belly self-massage for 1-2 minutes.",
];

/// One earthly branch: display glyph, stable code, localized name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchEntry {
    /// Display glyph (漢字).
    pub glyph: String,
    /// Stable identifier, used for asset lookup.
    pub code: String,
    /// Localized display name.
    pub name: String,
}

/// One misfortune category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Misfortune {
    /// Display emoji.
    pub emoji: String,
    /// Unique stable identifier, used for asset lookup and calendar UIDs.
    pub code: String,
    /// Display name.
    pub name: String,
    /// One-line description.
    pub description: String,
}

/// The full set of reference tables.
///
/// Construct via [`Tables::builtin`] or load a custom set with
/// [`Tables::from_path`]. Loaded tables are validated before use; a table
/// set that failed validation must never reach reading composition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tables {
    /// Ten stem glyphs, in cycle order.
    pub stems: Vec<String>,
    /// Five elements; stem's element is `stem_index / 2`.
    pub elements: Vec<String>,
    /// Two polarities; stem's polarity is `stem_index % 2`.
    pub polarities: Vec<String>,
    /// Twelve branches, in cycle order.
    pub branches: Vec<BranchEntry>,
    /// Animal glyph per branch code.
    pub animals: BTreeMap<String, String>,
    /// Food taboos, any non-zero length.
    pub taboos: Vec<String>,
    /// Misfortune categories, any non-zero length, unique codes.
    pub misfortunes: Vec<Misfortune>,
    /// Advice tips, any non-zero length.
    pub tips: Vec<String>,
}

impl Tables {
    /// The builtin table set. Always valid.
    pub fn builtin() -> Self {
        Self {
            stems: STEM_GLYPHS.iter().map(|s| (*s).to_string()).collect(),
            elements: ELEMENTS.iter().map(|s| (*s).to_string()).collect(),
            polarities: POLARITIES.iter().map(|s| (*s).to_string()).collect(),
            branches: BRANCH_DEFAULTS
                .iter()
                .map(|(glyph, code, name)| BranchEntry {
                    glyph: (*glyph).to_string(),
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                })
                .collect(),
            animals: ANIMAL_DEFAULTS
                .iter()
                .map(|(code, glyph)| ((*code).to_string(), (*glyph).to_string()))
                .collect(),
            taboos: TABOO_DEFAULTS.iter().map(|s| (*s).to_string()).collect(),
            misfortunes: MISFORTUNE_DEFAULTS
                .iter()
                .map(|(emoji, code, name, description)| Misfortune {
                    emoji: (*emoji).to_string(),
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                    description: (*description).to_string(),
                })
                .collect(),
            tips: TIP_DEFAULTS.iter().map(|s| (*s).to_string()).collect(),
        }
    }

    /// Parse and validate a custom table set from JSON text.
    ///
    /// A broken custom table is a fatal configuration error; no silent
    /// fallback to the builtin set, since that would change deterministic
    /// output behind the caller's back.
    pub fn from_json_str(json: &str) -> UnkeResult<Self> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Read, parse, and validate a custom table set from a JSON file.
    pub fn from_path(path: &Path) -> UnkeResult<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Check the structural invariants the cycle arithmetic relies on.
    pub fn validate(&self) -> UnkeResult<()> {
        Self::expect_len("stems", &self.stems, STEM_GLYPHS.len())?;
        Self::expect_len("elements", &self.elements, ELEMENTS.len())?;
        Self::expect_len("polarities", &self.polarities, POLARITIES.len())?;
        if self.branches.len() != BRANCH_DEFAULTS.len() {
            return Err(UnkeError::WrongLength {
                name: "branches",
                expected: BRANCH_DEFAULTS.len(),
                found: self.branches.len(),
            });
        }
        for branch in &self.branches {
            if !self.animals.contains_key(&branch.code) {
                return Err(UnkeError::MissingAnimal(branch.code.clone()));
            }
        }
        if self.taboos.is_empty() {
            return Err(UnkeError::EmptyTable("taboos"));
        }
        if self.misfortunes.is_empty() {
            return Err(UnkeError::EmptyTable("misfortunes"));
        }
        if self.tips.is_empty() {
            return Err(UnkeError::EmptyTable("tips"));
        }
        let mut seen = std::collections::BTreeSet::new();
        for misfortune in &self.misfortunes {
            if !seen.insert(misfortune.code.as_str()) {
                return Err(UnkeError::DuplicateCode(misfortune.code.clone()));
            }
        }
        Ok(())
    }

    /// The element for a stem index.
    pub fn element_of(&self, stem: u32) -> &str {
        &self.elements[(stem / 2) as usize]
    }

    /// The polarity for a stem index.
    pub fn polarity_of(&self, stem: u32) -> &str {
        &self.polarities[(stem % 2) as usize]
    }

    /// The animal glyph for a branch code, if one is mapped.
    pub fn animal(&self, code: &str) -> Option<&str> {
        self.animals.get(code).map(String::as_str)
    }

    fn expect_len(name: &'static str, list: &[String], expected: usize) -> UnkeResult<()> {
        if list.len() == expected {
            Ok(())
        } else {
            Err(UnkeError::WrongLength {
                name,
                expected,
                found: list.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_is_valid() {
        Tables::builtin().validate().unwrap();
    }

    #[test]
    fn builtin_sizes() {
        let t = Tables::builtin();
        assert_eq!(t.stems.len(), 10);
        assert_eq!(t.elements.len(), 5);
        assert_eq!(t.polarities.len(), 2);
        assert_eq!(t.branches.len(), 12);
        assert_eq!(t.animals.len(), 12);
        assert_eq!(t.taboos.len(), 12);
        assert_eq!(t.misfortunes.len(), 18);
        assert_eq!(t.tips.len(), 20);
    }

    #[test]
    fn misfortune_codes_unique() {
        let t = Tables::builtin();
        let codes: std::collections::BTreeSet<_> =
            t.misfortunes.iter().map(|m| m.code.as_str()).collect();
        assert_eq!(codes.len(), t.misfortunes.len());
    }

    #[test]
    fn every_branch_has_animal() {
        let t = Tables::builtin();
        for branch in &t.branches {
            assert!(t.animal(&branch.code).is_some(), "no animal for {}", branch.code);
        }
    }

    #[test]
    fn element_and_polarity_mapping() {
        let t = Tables::builtin();
        assert_eq!(t.element_of(0), "Wood");
        assert_eq!(t.element_of(1), "Wood");
        assert_eq!(t.element_of(2), "Fire");
        assert_eq!(t.element_of(9), "Water");
        assert_eq!(t.polarity_of(0), "yang");
        assert_eq!(t.polarity_of(1), "yin");
        assert_eq!(t.polarity_of(8), "yang");
    }

    #[test]
    fn json_round_trip() {
        let builtin = Tables::builtin();
        let json = serde_json::to_string(&builtin).unwrap();
        let loaded = Tables::from_json_str(&json).unwrap();
        assert_eq!(loaded.misfortunes, builtin.misfortunes);
        assert_eq!(loaded.taboos, builtin.taboos);
    }

    #[test]
    fn wrong_stem_count_rejected() {
        let mut t = Tables::builtin();
        t.stems.pop();
        match t.validate() {
            Err(UnkeError::WrongLength { name: "stems", expected: 10, found: 9 }) => {}
            other => panic!("expected WrongLength, got {other:?}"),
        }
    }

    #[test]
    fn empty_misfortunes_rejected() {
        let mut t = Tables::builtin();
        t.misfortunes.clear();
        assert!(matches!(t.validate(), Err(UnkeError::EmptyTable("misfortunes"))));
    }

    #[test]
    fn duplicate_code_rejected() {
        let mut t = Tables::builtin();
        let dup = t.misfortunes[0].clone();
        t.misfortunes.push(dup);
        assert!(matches!(t.validate(), Err(UnkeError::DuplicateCode(_))));
    }

    #[test]
    fn missing_animal_rejected() {
        let mut t = Tables::builtin();
        t.animals.remove("wu");
        assert!(matches!(t.validate(), Err(UnkeError::MissingAnimal(code)) if code == "wu"));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            Tables::from_json_str("{ not json"),
            Err(UnkeError::Json(_))
        ));
    }

    #[test]
    fn taboo_list_length_is_not_coupled_to_branches() {
        let mut t = Tables::builtin();
        t.taboos.push("instant noodles + ambition".to_string());
        t.validate().unwrap();
    }
}
