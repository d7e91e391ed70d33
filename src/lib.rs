use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Label {
    #[serde(rename = "SPAM JUDI")]
    SpamJudi,
    #[serde(rename = "SAFE")]
    Safe,
}

/// Classification result for a single message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub label: Label,
    pub confidence: i32,
    /// Whether normalization changed the original text (decorative glyphs,
    /// accents, or other non-ASCII were present). Omitted on safe verdicts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_detected: Option<bool>,
}

impl Verdict {
    pub fn is_spam(&self) -> bool {
        self.label == Label::SpamJudi
    }
}

/// Aggregate totals over a batch of verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScanSummary {
    pub scanned: usize,
    pub spam: usize,
    pub spam_rate_pct: f64,
}

// ---------------------------------------------------------------------------
// Scoring weights
// ---------------------------------------------------------------------------

struct Weights {
    high_risk_term: i32,
    med_risk_term: i32,
    link_pattern: i32,
    phone_pattern: i32,
    circled_pattern: i32,
    spam_threshold: i32,
    confidence_cap: i32,
}

static WEIGHTS: Weights = Weights {
    high_risk_term: 45,
    med_risk_term: 20,
    link_pattern: 35,
    phone_pattern: 30,
    circled_pattern: 15,
    spam_threshold: 40,
    confidence_cap: 100,
};

// ---------------------------------------------------------------------------
// Vocabularies
// ---------------------------------------------------------------------------

/// Replaces letters with look-alike digits the way spammers type keywords
/// past literal filters. The five substitutions run in a fixed order, each
/// over every occurrence, so the generated variant for a term is unique
/// ("slot" -> "5l0t", "gacor" -> "g4c0r").
fn leet_variant(term: &str) -> String {
    term.replace('a', "4")
        .replace('o', "0")
        .replace('e', "3")
        .replace('i', "1")
        .replace('s', "5")
}

static HIGH_RISK: Lazy<HashSet<String>> = Lazy::new(|| {
    let terms = [
        // Slot games and providers
        "slot",
        "gacor",
        "maxwin",
        "berkah99",
        "scatter",
        "olympus",
        "mahjong",
        "zeus",
        "starlight",
        "pragmatic",
        "pgsoft",
        "habanero",
        "joker123",
        "spadegaming",
        "slot88",
        // Win bait and game jargon
        "rtp",
        "sensasional",
        "jackpot",
        "jp",
        "x500",
        "x1000",
        "x5000",
        "petir",
        "kakek",
        "merah",
        "biru",
        "pola",
        "admin",
        "bocoranslot",
        "infogacor",
        "linkgacor",
        // Gambling products and operators
        "pusatjudi",
        "bandar",
        "togel",
        "toto",
        "livecasino",
        "baccarat",
        "roulette",
        "sicbo",
        "sabungayam",
        "poker",
        "dominoqq",
        "ceme",
        "pkv",
        "idnpoker",
        "judibola",
        "sbobet",
        "maxbet",
        "parlay",
        "handicap",
        // Guarantee and payout bait
        "pastiwin",
        "pastijp",
        "dibayar",
        "antiungrung",
        "situshub",
        "gampangmenang",
        "megawin",
        "gigawin",
        "tergacor",
        "sensational",
        "freepin",
        "buyspin",
        "doublechance",
        "dc",
        "polaolympus",
        "polamahjong",
        "jackpotpaus",
        "pecah",
        "perkalian",
        "megajp",
        "autowin",
        "pastiwd",
        "garansikekalahan",
        "antirungkad",
        "rungkad",
        // Call-to-action compounds
        "mainslot",
        "daftarslot",
        "loginslot",
        "agenslot",
        "judislot",
        "judionline",
        "slotgampang",
        "slotterpercaya",
    ];
    // Effective vocabulary: the curated terms plus their leet variants,
    // deduplicated (terms without substitutable letters map to themselves).
    let mut vocab: HashSet<String> = terms.iter().map(|t| t.to_string()).collect();
    vocab.extend(terms.iter().map(|t| leet_variant(t)));
    vocab
});

static MED_RISK: Lazy<HashSet<String>> = Lazy::new(|| {
    [
        // Payments and balance
        "depo",
        "wd",
        "withdraw",
        "deposit",
        "min-depo",
        "saldo",
        "modal",
        "receh",
        "dana",
        "pulsa",
        "ovo",
        "gopay",
        "linkaja",
        "qris",
        // Promos and bonuses
        "tanpapotongan",
        "bonus",
        "newmember",
        "cashback",
        "rollingan",
        "referral",
        "hoki",
        "cuan",
        "melimpah",
        "saldo-gratis",
        "freebet",
        "promo",
        // Trust and licensing claims
        "terpercaya",
        "resmi",
        "lisensi",
        "pagcor",
        "terbukti",
        "lunas",
        "tuntas",
        "vVIP",
        "eksklusif",
        // Urgency and hype
        "gasken",
        "buruan",
        "cekbio",
        // Link shorteners and contact channels
        "linktr",
        "heylink",
        "bitly",
        "s.id",
        "tinyurl",
        "wa",
        "tele",
        "whatsapp",
        "telegram",
        "hubungi",
        // Calls to action
        "klik",
        "daftar",
        "gabung",
        "join",
        "profit",
        "menang",
        // Urgency phrases
        "hari-ini",
        "malam-ini",
        "pagi-ini",
        "tunggu-apa-lagi",
        "kesempatan",
        "terbatas",
        "pasti-bayar",
        // Credibility claims
        "amanah",
        "berlisensi",
        "internasional",
        "terbesar",
        "no1",
        "terbaik",
        "jaminan",
        "menang-berapapun",
    ]
    .into_iter()
    .map(str::to_owned)
    .collect()
});

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

/// Which text a signal pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextSource {
    /// Normalized, lowercased text.
    Normalized,
    /// The untouched original input.
    Raw,
}

struct SignalPattern {
    source: TextSource,
    weight: i32,
    pattern: Regex,
}

static SIGNAL_PATTERNS: Lazy<Vec<SignalPattern>> = Lazy::new(|| {
    vec![
        // Shortened/known link domains or a bare .com/ / .id/ path marker
        SignalPattern {
            source: TextSource::Normalized,
            weight: WEIGHTS.link_pattern,
            pattern: Regex::new(r"bit\.ly|s\.id|linktr|heylink|me-qr|\.com/|\.id/").unwrap(),
        },
        // Phone-number-like digit runs behind an Indonesian prefix
        SignalPattern {
            source: TextSource::Normalized,
            weight: WEIGHTS.phone_pattern,
            pattern: Regex::new(r"(\+62|62|08)[0-9]{8,12}").unwrap(),
        },
        // Decorative circled letters left in the original input
        SignalPattern {
            source: TextSource::Raw,
            weight: WEIGHTS.circled_pattern,
            pattern: Regex::new(r"[\u{24D0}-\u{24E9}\u{24B6}-\u{24CF}]").unwrap(),
        },
    ]
});

// ---------------------------------------------------------------------------
// Text pipeline
// ---------------------------------------------------------------------------

/// Converts decorative Unicode (circled, fullwidth, mathematical-alphanumeric
/// letters, accents) to plain ASCII: NFKD decomposition toward base letters,
/// then every code point outside the 7-bit range is dropped.
pub fn normalize(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Lowercases, turns every non-word character into whitespace, and collects
/// the unique tokens. An empty or all-punctuation input yields an empty set.
pub fn tokenize(normalized: &str) -> HashSet<String> {
    let lowered = normalized.to_lowercase();
    NON_WORD_RE
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_owned)
        .collect()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Classifies one message. Keyword hits count once per distinct token;
/// pattern weights stack on top; a total of 40 or more is spam, anything
/// below reports as safe with zero confidence.
pub fn classify(text: &str) -> Verdict {
    let normalized = normalize(text);
    let tokens = tokenize(&normalized);
    let normalized_lower = normalized.to_lowercase();

    let mut score = 0;

    let high_hits = tokens
        .iter()
        .filter(|t| HIGH_RISK.contains(t.as_str()))
        .count();
    score += high_hits as i32 * WEIGHTS.high_risk_term;

    let med_hits = tokens
        .iter()
        .filter(|t| MED_RISK.contains(t.as_str()))
        .count();
    score += med_hits as i32 * WEIGHTS.med_risk_term;

    for signal in SIGNAL_PATTERNS.iter() {
        let haystack = match signal.source {
            TextSource::Normalized => normalized_lower.as_str(),
            TextSource::Raw => text,
        };
        if signal.pattern.is_match(haystack) {
            score += signal.weight;
        }
    }

    if score >= WEIGHTS.spam_threshold {
        Verdict {
            label: Label::SpamJudi,
            confidence: score.min(WEIGHTS.confidence_cap),
            original_detected: Some(text != normalized),
        }
    } else {
        Verdict {
            label: Label::Safe,
            confidence: 0,
            original_detected: None,
        }
    }
}

pub fn summarize(verdicts: &[Verdict]) -> ScanSummary {
    let scanned = verdicts.len();
    let spam = verdicts.iter().filter(|v| v.is_spam()).count();
    let spam_rate_pct = if scanned == 0 {
        0.0
    } else {
        spam as f64 / scanned as f64 * 100.0
    };

    ScanSummary {
        scanned,
        spam,
        spam_rate_pct,
    }
}
