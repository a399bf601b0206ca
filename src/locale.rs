//! Locale detection for description files.
//! Pure classification of a filename fragment, decoupled from filesystem
//! traversal so it can be unit-tested exhaustively.

/// Two-letter ISO 639-1 language codes.
const ISO_639_1: [&str; 184] = [
    "aa", "ab", "ae", "af", "ak", "am", "an", "ar", "as", "av", "ay", "az",
    "ba", "be", "bg", "bh", "bi", "bm", "bn", "bo", "br", "bs", "ca", "ce",
    "ch", "co", "cr", "cs", "cu", "cv", "cy", "da", "de", "dv", "dz", "ee",
    "el", "en", "eo", "es", "et", "eu", "fa", "ff", "fi", "fj", "fo", "fr",
    "fy", "ga", "gd", "gl", "gn", "gu", "gv", "ha", "he", "hi", "ho", "hr",
    "ht", "hu", "hy", "hz", "ia", "id", "ie", "ig", "ii", "ik", "io", "is",
    "it", "iu", "ja", "jv", "ka", "kg", "ki", "kj", "kk", "kl", "km", "kn",
    "ko", "kr", "ks", "ku", "kv", "kw", "ky", "la", "lb", "lg", "li", "ln",
    "lo", "lt", "lu", "lv", "mg", "mh", "mi", "mk", "ml", "mn", "mr", "ms",
    "mt", "my", "na", "nb", "nd", "ne", "ng", "nl", "nn", "no", "nr", "nv",
    "ny", "oc", "oj", "om", "or", "os", "pa", "pi", "pl", "ps", "pt", "qu",
    "rm", "rn", "ro", "ru", "rw", "sa", "sc", "sd", "se", "sg", "si", "sk",
    "sl", "sm", "sn", "so", "sq", "sr", "ss", "st", "su", "sv", "sw", "ta",
    "te", "tg", "th", "ti", "tk", "tl", "tn", "to", "tr", "ts", "tt", "tw",
    "ty", "ug", "uk", "ur", "uz", "ve", "vi", "vo", "wa", "wo", "xh", "yi",
    "yo", "za", "zh", "zu",
];

/// Classification of a description file's leading filename segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DescriptionKey {
    /// A known ISO 639-1 locale code, lowercased
    Locale(String),
    /// The `"default"` sentinel (segment contained the substring "default")
    Default,
}

/// Sentinel key used for the non-localized description.
pub const DEFAULT_KEY: &str = "default";

/// Maps the first `.`-separated segment of a description filename to a
/// description key. Matching is case-insensitive; a known locale code wins
/// over the `default` substring check. Returns `None` when the segment is
/// neither.
pub fn classify(segment: &str) -> Option<DescriptionKey> {
    let lowered = segment.to_lowercase();
    if ISO_639_1.contains(&lowered.as_str()) {
        Some(DescriptionKey::Locale(lowered))
    } else if lowered.contains(DEFAULT_KEY) {
        Some(DescriptionKey::Default)
    } else {
        None
    }
}
