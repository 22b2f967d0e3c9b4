//! Tier-indexed jargon dictionaries, affix tables, and connective phrases.
//!
//! Pure data. Insertion order is substitution order: the pattern rewriter
//! walks each table front to back, and replacements may re-match later keys
//! (cascading is deliberate). Every tier carries the same key set so that a
//! tier switch always changes at least the entries whose replacements
//! differ.

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::module::ComplexityTier;

/// Ordered phrase-to-replacement mapping for one tier.
pub type TierDictionary = IndexMap<&'static str, &'static str>;

/// Affix position within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AffixPosition {
    /// Fragment matched at the start of a word.
    Prefix,
    /// Fragment matched at the end of a word.
    Suffix,
}

/// A morphological fragment with its plain-language expansion.
#[derive(Debug, Clone, Copy)]
pub struct AffixPattern {
    /// The matched fragment.
    pub fragment: &'static str,
    /// Expansion placed before (prefix) or after (suffix) the root.
    pub expansion: &'static str,
    /// Whether the fragment anchors at the start or end of the word.
    pub position: AffixPosition,
}

// Keys are grouped by source domain for maintenance only; matching is
// domain-agnostic. Each row is (key, simple, standard, educated).
const ENTRIES: &[(&str, &str, &str, &str)] = &[
    // medical
    ("hypertension", "high blood pressure", "raised blood pressure", "elevated blood pressure"),
    ("hypotension", "low blood pressure", "low blood pressure", "reduced blood pressure"),
    ("gastritis", "stomach upset", "stomach inflammation", "gastric inflammation"),
    ("myocardial infarction", "heart attack", "heart attack", "heart muscle injury"),
    ("cerebrovascular accident", "stroke", "stroke", "disrupted blood flow in the brain"),
    // "utilize" sits later in the table, so the simple replacement cascades
    // into "not safe to use" during the same rewrite pass.
    ("contraindicated", "not safe to utilize", "not recommended", "medically inadvisable"),
    ("prognosis", "likely outcome", "expected outcome", "projected clinical outcome"),
    ("benign", "not harmful", "harmless", "non-cancerous"),
    ("malignant", "very harmful", "cancerous", "cancerous and spreading"),
    ("analgesic", "painkiller", "pain reliever", "pain-relieving drug"),
    ("subcutaneous", "under the skin", "under the skin", "beneath the skin"),
    ("idiopathic", "with no known cause", "of unknown cause", "of unestablished cause"),
    ("renal", "kidney", "kidney", "of the kidneys"),
    ("hepatic", "liver", "liver", "of the liver"),
    ("pulmonary", "lung", "lung", "of the lungs"),
    ("edema", "swelling", "fluid swelling", "fluid retention"),
    ("etiology", "cause", "cause", "underlying cause"),
    ("prophylactic", "preventive", "preventive", "preventative"),
    // legal
    ("pursuant to", "based on", "under", "in accordance with"),
    ("aforementioned", "this", "mentioned earlier", "previously noted"),
    ("hereinafter", "from now on", "below", "in the remainder of this document"),
    ("notwithstanding", "despite", "despite", "regardless of"),
    ("indemnify", "protect from loss", "compensate for loss", "hold harmless against loss"),
    ("tort", "wrongful act", "civil wrong", "non-contractual civil wrong"),
    ("statute", "law", "written law", "legislative enactment"),
    ("litigation", "lawsuit", "legal action", "court proceedings"),
    ("plaintiff", "person suing", "suing party", "claimant"),
    ("defendant", "person being sued", "accused party", "responding party"),
    ("breach of contract", "breaking the agreement", "breaking the contract", "failure to honor the contract"),
    ("null and void", "cancelled", "invalid", "without legal force"),
    ("force majeure", "events outside anyone's control", "unforeseeable outside events", "circumstances beyond reasonable control"),
    ("due diligence", "careful checking", "careful review", "thorough investigation"),
    ("jurisprudence", "legal thinking", "legal theory", "the philosophy of law"),
    // technical
    ("instantiate", "create", "create an instance of", "construct an instance of"),
    ("asynchronous", "not at the same time", "non-blocking", "concurrently scheduled"),
    ("middleware", "connecting software", "go-between software", "intermediary software layer"),
    ("refactor", "clean up the code", "restructure the code", "restructure without changing behavior"),
    ("latency", "delay", "response delay", "response-time overhead"),
    ("throughput", "work done per second", "processing rate", "sustained processing rate"),
    ("deprecated", "no longer used", "outdated", "scheduled for removal"),
    ("idempotent", "safe to repeat", "repeat-safe", "repeatable without side effects"),
    ("scalability", "ability to grow", "capacity to grow", "capacity to absorb growth"),
    ("authentication", "proving who you are", "identity checking", "identity verification"),
    // academic
    ("paradigm", "way of thinking", "framework", "conceptual framework"),
    ("empirical", "based on observation", "observed", "observation-based"),
    ("methodology", "method", "approach", "research approach"),
    ("hypothesis", "idea to test", "testable idea", "testable proposition"),
    ("qualitative", "based on qualities", "descriptive", "non-numerical"),
    ("quantitative", "based on numbers", "numerical", "numerically measured"),
    ("synthesis", "combining ideas", "combination", "integrative combination"),
    ("dissertation", "long research paper", "doctoral paper", "doctoral thesis"),
    ("pedagogy", "teaching methods", "teaching practice", "instructional theory"),
    ("ubiquitous", "everywhere", "found everywhere", "omnipresent"),
    // financial
    ("amortization", "paying off over time", "gradual repayment", "scheduled debt reduction"),
    ("liquidity", "available cash", "ease of turning into cash", "convertibility to cash"),
    ("depreciation", "loss of value", "value decline", "decline in asset value"),
    ("collateral", "backup for a loan", "loan security", "pledged loan security"),
    ("arbitrage", "profiting from price gaps", "price-gap trading", "exploiting price differentials"),
    ("fiduciary", "someone trusted with money", "financial trustee", "trustee bound by a duty of care"),
    ("diversification", "spreading money around", "spreading investments", "allocating across asset classes"),
    ("portfolio", "collection of investments", "investment mix", "investment holdings"),
    ("recession", "economic downturn", "economic decline", "sustained economic contraction"),
    // general register
    ("utilize", "use", "use", "employ"),
    ("commence", "start", "begin", "initiate"),
    ("terminate", "end", "end", "conclude"),
    ("endeavor", "try", "attempt", "undertaking"),
    ("facilitate", "help", "make easier", "enable"),
    ("subsequently", "later", "afterward", "thereafter"),
    ("approximately", "about", "roughly", "nearly"),
    ("sufficient", "enough", "enough", "adequate"),
    ("demonstrate", "show", "show", "illustrate"),
    ("consequently", "so", "as a result", "therefore"),
];

fn build_dictionary(pick: fn(&(&'static str, &'static str, &'static str, &'static str)) -> &'static str) -> TierDictionary {
    ENTRIES.iter().map(|row| (row.0, pick(row))).collect()
}

static SIMPLE: Lazy<TierDictionary> = Lazy::new(|| build_dictionary(|row| row.1));
static STANDARD: Lazy<TierDictionary> = Lazy::new(|| build_dictionary(|row| row.2));
static EDUCATED: Lazy<TierDictionary> = Lazy::new(|| build_dictionary(|row| row.3));

/// Suffix and prefix expansions, shared across tiers. Roots shorter than
/// three letters never match, so short everyday words stay untouched.
pub static AFFIXES: &[AffixPattern] = &[
    AffixPattern { fragment: "itis", expansion: "inflammation", position: AffixPosition::Suffix },
    AffixPattern { fragment: "ectomy", expansion: "surgical removal", position: AffixPosition::Suffix },
    AffixPattern { fragment: "emia", expansion: "blood condition", position: AffixPosition::Suffix },
    AffixPattern { fragment: "pathy", expansion: "disease", position: AffixPosition::Suffix },
    AffixPattern { fragment: "algia", expansion: "pain", position: AffixPosition::Suffix },
    AffixPattern { fragment: "hyper", expansion: "high", position: AffixPosition::Prefix },
    AffixPattern { fragment: "hypo", expansion: "low", position: AffixPosition::Prefix },
    AffixPattern { fragment: "pseudo", expansion: "false", position: AffixPosition::Prefix },
    AffixPattern { fragment: "multi", expansion: "many", position: AffixPosition::Prefix },
    AffixPattern { fragment: "poly", expansion: "many", position: AffixPosition::Prefix },
];

/// Verbose connectives collapsed uniformly regardless of tier.
pub static CONNECTIVES: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("in order to", "to"),
        ("due to the fact that", "because"),
        ("in the event that", "if"),
        ("with regard to", "about"),
        ("in spite of the fact that", "although"),
        ("for the purpose of", "to"),
        ("in the near future", "soon"),
        ("at this point in time", "now"),
        ("in a timely manner", "promptly"),
        ("on a daily basis", "daily"),
        ("a majority of", "most"),
        ("a number of", "several"),
        ("take into consideration", "consider"),
        ("with the exception of", "except for"),
        ("in close proximity to", "near"),
        ("in the absence of", "without"),
        ("prior to", "before"),
        ("subsequent to", "after"),
        ("in conjunction with", "with"),
        ("it is important to note that", "note that"),
    ])
});

/// Returns the dictionary for a tier label, falling back to the standard
/// tier for labels with no dedicated table.
#[must_use]
pub fn dictionary_for_label(label: &str) -> &'static TierDictionary {
    match label {
        "simple" => &SIMPLE,
        "educated" => &EDUCATED,
        _ => &STANDARD,
    }
}

/// Returns the dictionary active for a tier.
#[must_use]
pub fn dictionary_for(tier: ComplexityTier) -> &'static TierDictionary {
    dictionary_for_label(tier.label())
}
