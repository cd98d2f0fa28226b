// ═══════════════════════════════════════════════════════════════════════════════
// 📦 pairing.rs - Vibration/Power Pair Discovery
// ═══════════════════════════════════════════════════════════════════════════════
// Finds measurement pairs by filename convention:
// - Vibration file: M<digits><letter>.csv       (e.g. M1234A.csv)
// - Power file:     M<digits><letter>_power.csv (e.g. M1234A_power.csv)
// A vibration file without its power companion is skipped quietly.
// ═══════════════════════════════════════════════════════════════════════════════

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use tracing::debug;

/// Suffix inserted before the extension of the power companion
pub const POWER_SUFFIX: &str = "_power";

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 File Pair / زوج الملفات
// ═══════════════════════════════════════════════════════════════════════════════

/// One flow-rate/sample combination with both of its files
/// تركيبة واحدة (معدل تدفق/عينة) مع ملفيها
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePair {
    /// Pair key, e.g. "M1234A" / مفتاح الزوج
    pub key: String,

    /// Vibration file name (X/Y/Z acceleration) / ملف الاهتزاز
    pub vibration: String,

    /// Power file name (watts) / ملف القدرة
    pub power: String,
}

impl FilePair {
    /// Build the pair for a key using the naming convention
    pub fn from_key(key: &str) -> Self {
        Self {
            key: key.to_string(),
            vibration: format!("{}.csv", key),
            power: format!("{}{}.csv", key, POWER_SUFFIX),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Pair Matcher / مطابق الأزواج
// ═══════════════════════════════════════════════════════════════════════════════

/// Matches vibration file names against `M<digits><letter>.csv`
pub struct PairMatcher {
    vibration_regex: Regex,
}

impl PairMatcher {
    pub fn new() -> Self {
        // Literal pattern, cannot fail to compile
        let vibration_regex =
            Regex::new(r"^M(\d+)([A-Z])\.csv$").expect("Failed to compile regex");

        Self { vibration_regex }
    }

    /// Return the pair key if `name` is a vibration file name
    /// إرجاع مفتاح الزوج إذا كان الاسم ملف اهتزاز
    pub fn vibration_key(&self, name: &str) -> Option<String> {
        let caps = self.vibration_regex.captures(name)?;
        Some(format!("M{}{}", &caps[1], &caps[2]))
    }

    /// Discover every complete pair in a set of file names
    /// اكتشاف جميع الأزواج الكاملة في مجموعة أسماء ملفات
    ///
    /// Output is unique and sorted by key.
    pub fn discover<S: AsRef<str>>(&self, names: &[S]) -> Vec<FilePair> {
        let available: HashSet<&str> = names.iter().map(|n| n.as_ref()).collect();
        let mut pairs = BTreeMap::new();

        for name in &available {
            let Some(key) = self.vibration_key(name) else {
                continue;
            };

            let pair = FilePair::from_key(&key);
            if available.contains(pair.power.as_str()) {
                pairs.insert(key, pair);
            } else {
                debug!("{} has no companion {}, skipping", name, pair.power);
            }
        }

        pairs.into_values().collect()
    }
}

impl Default for PairMatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// 🔹 Unit Tests / اختبارات الوحدة
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn discover_pairs<S: AsRef<str>>(names: &[S]) -> Vec<FilePair> {
        PairMatcher::new().discover(names)
    }

    fn keys(pairs: &[FilePair]) -> Vec<&str> {
        pairs.iter().map(|p| p.key.as_str()).collect()
    }

    #[test]
    fn test_unpaired_vibration_file_is_excluded() {
        let names = ["M1234A.csv", "M1234A_power.csv", "M5678B.csv"];
        let pairs = discover_pairs(&names);

        assert_eq!(keys(&pairs), vec!["M1234A"]);
        assert_eq!(pairs[0].vibration, "M1234A.csv");
        assert_eq!(pairs[0].power, "M1234A_power.csv");
    }

    #[test]
    fn test_pairs_are_sorted_and_unique() {
        let names = vec![
            "M900C.csv".to_string(),
            "M900C_power.csv".to_string(),
            "M1234A_power.csv".to_string(),
            "M1234A.csv".to_string(),
            "M1234A.csv".to_string(),
            "M0050B.csv".to_string(),
            "M0050B_power.csv".to_string(),
        ];
        let pairs = discover_pairs(&names);

        assert_eq!(keys(&pairs), vec!["M0050B", "M1234A", "M900C"]);
    }

    #[test]
    fn test_companion_must_match_exactly() {
        let names = [
            "M1234A.csv",
            "M1234B_power.csv",
            "M12345A_power.csv",
            "m1234A_power.csv",
            "M1234A_power.CSV",
        ];

        assert!(discover_pairs(&names).is_empty());
    }

    #[test]
    fn test_non_matching_names_are_ignored() {
        let matcher = PairMatcher::new();

        assert_eq!(matcher.vibration_key("M1234A.csv"), Some("M1234A".to_string()));
        assert_eq!(matcher.vibration_key("M1234A_power.csv"), None);
        assert_eq!(matcher.vibration_key("M1234a.csv"), None);
        assert_eq!(matcher.vibration_key("MA.csv"), None);
        assert_eq!(matcher.vibration_key("M1234AB.csv"), None);
        assert_eq!(matcher.vibration_key("xM1234A.csv"), None);
        assert_eq!(matcher.vibration_key("readme.txt"), None);
    }

    #[test]
    fn test_power_file_alone_is_not_a_pair() {
        let names = ["M1234A_power.csv"];

        assert!(discover_pairs(&names).is_empty());
    }

    #[test]
    fn test_empty_file_set() {
        let names: [&str; 0] = [];

        assert!(discover_pairs(&names).is_empty());
    }
}
