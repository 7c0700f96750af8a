//! Palm-reading fortune generator.
//!
//! Entirely theatrical: predictions are drawn from fixed Hindi/English
//! pools, seeded by the uploaded images and the time of day so repeat
//! readings feel distinct while the same upload in the same minute
//! reads the same. The coin-flip embellishments come from the injected
//! rng so tests can pin them.

use chrono::{DateTime, Local, Timelike};
use rand::Rng;
use serde::Serialize;

// ── Input ───────────────────────────────────────────────────────────

/// One uploaded palm photo, reduced to what the seed needs.
#[derive(Debug, Clone)]
pub struct PalmImage {
    pub name: String,
    pub byte_len: u64,
    /// Last-modified time, milliseconds since the epoch.
    pub modified_ms: u64,
}

// ── Output ──────────────────────────────────────────────────────────

/// One category prediction of a reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub category: &'static str,
    pub hindi: String,
    pub english: String,
}

/// A bilingual closing fortune.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fortune {
    pub hindi: String,
    pub english: String,
}

/// A complete palm reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PalmReading {
    pub predictions: Vec<Prediction>,
    pub life_line: String,
    pub fortune: Fortune,
    /// Claimed accuracy, 85..=99 percent.
    pub accuracy: u8,
    /// Hindi summary line handed to the synthesizer.
    pub spoken_summary: String,
}

// ── Pools ───────────────────────────────────────────────────────────

const PERSONALITY_TRAITS: &[&str] = &[
    "रचनात्मक और कलात्मक",
    "बुद्धिमान और विश्लेषणात्मक",
    "दयालु और संवेदनशील",
    "साहसी और निडर",
    "धैर्यवान और स्थिर",
    "उत्साही और ऊर्जावान",
    "व्यावहारिक और तर्कसंगत",
    "स्वतंत्र और आत्मनिर्भर",
    "सामाजिक और मिलनसार",
];

const CAREER_FIELDS: &[&str] = &[
    "तकनीक और इंजीनियरिंग",
    "कला और डिज़ाइन",
    "व्यापार और उद्यमिता",
    "शिक्षा और अनुसंधान",
    "स्वास्थ्य सेवा",
    "मीडिया और संचार",
    "वित्त और बैंकिंग",
    "कानून और न्याय",
    "खेल और फिटनेस",
];

const LOVE_TIMINGS: &[&str] = &[
    "आने वाले 6 महीनों में",
    "इस वर्ष के अंत तक",
    "नए साल में",
    "वसंत के मौसम में",
    "आपके 25वें जन्मदिन के आसपास",
    "किसी त्योहार के दिन",
];

const HEALTH_ADVICE: &[&str] = &[
    "योग और प्राणायाम",
    "नियमित व्यायाम",
    "संतुलित आहार",
    "ध्यान और तनाव प्रबंधन",
    "पर्याप्त नींद",
    "सकारात्मक सोच",
];

const WEALTH_TIMINGS: &[&str] = &[
    "अगले 2 वर्षों में",
    "35 की उम्र के बाद",
    "किसी नए प्रोजेक्ट से",
    "पारिवारिक व्यापार से",
    "विदेश से जुड़े काम से",
    "तकनीकी निवेश से",
];

const LIFE_LINES: &[&str] = &[
    "आपकी जीवन रेखा लंबी और मजबूत है, जो दीर्घायु का संकेत है।",
    "आपकी हृदय रेखा साफ और स्पष्ट है, जो प्रेम में सफलता दर्शाती है।",
    "आपकी मस्तिष्क रेखा तीक्ष्ण और लंबी है, जो तेज बुद्धि का प्रमाण है।",
    "आपकी भाग्य रेखा मजबूत और गहरी है, जो निरंतर सफलता का संकेत देती है।",
    "आपके हाथ में सूर्य रेखा स्पष्ट दिख रही है, जो प्रसिद्धि का संकेत है।",
];

const SPECIAL_SIGNS: &[(&str, &str)] = &[
    ("त्रिशूल का निशान", "trident mark"),
    ("तारे का निशान", "star mark"),
    ("मछली का निशान", "fish mark"),
    ("कमल का निशान", "lotus mark"),
];

const FORTUNE_MESSAGES: &[(&str, &str)] = &[
    (
        "आने वाले महीने आपके लिए बहुत शुभ हैं। सफलता आपके कदम चूमेगी।",
        "The coming months are very auspicious for you. Success will kiss your feet.",
    ),
    (
        "आपकी मेहनत जल्द ही रंग लाएगी। धैर्य रखें और आगे बढ़ते रहें।",
        "Your hard work will pay off soon. Be patient and keep moving forward.",
    ),
    (
        "आपके जीवन में नई खुशियां आने वाली हैं। परिवार के साथ अच्छा समय बिताएं।",
        "New happiness is coming into your life. Spend good time with family.",
    ),
    (
        "बृहस्पति ग्रह आपके अनुकूल है। नया काम शुरू करने का समय है।",
        "Planet Jupiter is favorable for you. Time to start new work.",
    ),
];

// ── Generator ───────────────────────────────────────────────────────

fn seed_from(images: &[PalmImage], now: DateTime<Local>) -> u64 {
    let image_part: u64 = images
        .iter()
        .map(|img| img.byte_len.wrapping_add(img.modified_ms))
        .fold(0, u64::wrapping_add);
    image_part
        .wrapping_add(u64::from(now.hour()) + u64::from(now.minute()))
        .wrapping_add(images.len() as u64)
}

fn pick(pool: &'static [&'static str], seed: u64, stride: u64) -> &'static str {
    pool[(seed.wrapping_mul(stride) % pool.len() as u64) as usize]
}

/// Produce a reading for the uploaded palm photos.
///
/// Returns `None` when no images were uploaded. The pool picks are a
/// pure function of the images and the clock; only the embellishments
/// (special signs, lucky numbers, accuracy) consume the rng.
pub fn read_palms<R: Rng>(
    images: &[PalmImage],
    now: DateTime<Local>,
    rng: &mut R,
) -> Option<PalmReading> {
    if images.is_empty() {
        return None;
    }

    let seed = seed_from(images, now);
    let personality = pick(PERSONALITY_TRAITS, seed, 1);
    let career = pick(CAREER_FIELDS, seed, 3);
    let love = pick(LOVE_TIMINGS, seed, 5);
    let health = pick(HEALTH_ADVICE, seed, 7);
    let wealth = pick(WEALTH_TIMINGS, seed, 11);

    let mut predictions = vec![
        Prediction {
            category: "व्यक्तित्व (Personality)",
            hindi: format!(
                "आप एक {} व्यक्ति हैं। आपमें प्राकृतिक नेतृत्व क्षमता है और लोग आपकी सलाह मानते हैं।",
                personality
            ),
            english: format!(
                "You are a {} person with natural leadership abilities and people value your advice.",
                personality
            ),
        },
        Prediction {
            category: "करियर (Career)",
            hindi: format!(
                "आपका करियर {} क्षेत्र में विशेष रूप से सफल होगा। नई शुरुआत का समय बहुत अच्छा है।",
                career
            ),
            english: format!(
                "Your career will be especially successful in the {} field. It's a great time for new beginnings.",
                career
            ),
        },
        Prediction {
            category: "प्रेम जीवन (Love Life)",
            hindi: format!("आपको सच्चा प्रेम {} मिलने की प्रबल संभावना है।", love),
            english: format!("You have strong chances of finding true love {}.", love),
        },
        Prediction {
            category: "स्वास्थ्य (Health)",
            hindi: format!("आपका स्वास्थ्य {} से और भी बेहतर होगा।", health),
            english: format!("Your health will improve significantly with {}.", health),
        },
        Prediction {
            category: "धन (Wealth)",
            hindi: format!("आर्थिक उन्नति {} होगी।", wealth),
            english: format!("Financial growth will happen {}.", wealth),
        },
    ];

    if rng.gen_bool(0.3) {
        let (hi, en) = SPECIAL_SIGNS[rng.gen_range(0..SPECIAL_SIGNS.len())];
        predictions.push(Prediction {
            category: "विशेष संकेत (Special Sign)",
            hindi: format!("आपके हाथ में {} दिख रहा है, जो अत्यंत शुभ है।", hi),
            english: format!(
                "A {} is visible in your palm, which is extremely auspicious.",
                en
            ),
        });
    }

    if rng.gen_bool(0.4) {
        let a = rng.gen_range(1..=9);
        let b = rng.gen_range(10..=18);
        let c = rng.gen_range(20..=28);
        predictions.push(Prediction {
            category: "भाग्यशाली संख्या (Lucky Numbers)",
            hindi: format!("आपके लिए {}, {}, और {} संख्याएं भाग्यशाली हैं।", a, b, c),
            english: format!("Numbers {}, {}, and {} are lucky for you.", a, b, c),
        });
    }

    let life_line = pick(LIFE_LINES, seed, 13).to_string();
    let (fortune_hi, fortune_en) = FORTUNE_MESSAGES[(seed.wrapping_mul(17)
        % FORTUNE_MESSAGES.len() as u64) as usize];
    let accuracy = rng.gen_range(85..=99u8);

    let plural = if images.len() > 1 { "ओं" } else { "" };
    let spoken_summary = format!(
        "{} हस्तरेखा{} का विश्लेषण पूरा हुआ। {}% सटीकता के साथ, {}",
        images.len(),
        plural,
        accuracy,
        fortune_hi
    );

    Some(PalmReading {
        predictions,
        life_line,
        fortune: Fortune {
            hindi: fortune_hi.to_string(),
            english: fortune_en.to_string(),
        },
        accuracy,
        spoken_summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn images() -> Vec<PalmImage> {
        vec![
            PalmImage {
                name: "left.jpg".into(),
                byte_len: 120_000,
                modified_ms: 1_700_000_000_000,
            },
            PalmImage {
                name: "right.jpg".into(),
                byte_len: 98_500,
                modified_ms: 1_700_000_100_000,
            },
        ]
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 3, 7, 11, 42, 0).unwrap()
    }

    #[test]
    fn no_images_no_reading() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(read_palms(&[], fixed_now(), &mut rng).is_none());
    }

    #[test]
    fn reading_has_core_categories_and_plausible_accuracy() {
        let mut rng = StdRng::seed_from_u64(1);
        let reading = read_palms(&images(), fixed_now(), &mut rng).unwrap();
        assert!(reading.predictions.len() >= 5);
        assert!(reading.predictions.len() <= 7);
        assert!((85..=99).contains(&reading.accuracy));
        assert!(!reading.life_line.is_empty());
        for p in &reading.predictions {
            assert!(!p.hindi.is_empty());
            assert!(!p.english.is_empty());
        }
    }

    #[test]
    fn same_inputs_same_reading() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let ra = read_palms(&images(), fixed_now(), &mut a).unwrap();
        let rb = read_palms(&images(), fixed_now(), &mut b).unwrap();
        assert_eq!(ra.accuracy, rb.accuracy);
        assert_eq!(ra.life_line, rb.life_line);
        assert_eq!(ra.fortune.hindi, rb.fortune.hindi);
        assert_eq!(ra.predictions.len(), rb.predictions.len());
    }

    #[test]
    fn different_uploads_change_pool_picks() {
        let mut rng = StdRng::seed_from_u64(1);
        let base = read_palms(&images(), fixed_now(), &mut rng).unwrap();

        let mut other_images = images();
        other_images[0].byte_len += 3;
        let mut rng = StdRng::seed_from_u64(1);
        let other = read_palms(&other_images, fixed_now(), &mut rng).unwrap();

        // Seed moved by 3: the stride-1 personality pick must differ.
        assert_ne!(base.predictions[0].hindi, other.predictions[0].hindi);
    }

    #[test]
    fn spoken_summary_mentions_count_and_accuracy() {
        let mut rng = StdRng::seed_from_u64(9);
        let reading = read_palms(&images(), fixed_now(), &mut rng).unwrap();
        assert!(reading.spoken_summary.starts_with("2 हस्तरेखाओं"));
        assert!(reading
            .spoken_summary
            .contains(&format!("{}%", reading.accuracy)));
    }
}
