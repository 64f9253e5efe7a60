// Rule-based English lemmatizer.
//
// Maps inflected noun forms to their base form: an irregular-plural table
// first, then ordered suffix rules. Words the rules don't recognize pass
// through unchanged, which keeps the mapping total and deterministic.

use std::collections::HashMap;

pub struct Lemmatizer {
    irregulars: HashMap<&'static str, &'static str>,
}

impl Lemmatizer {
    pub fn new() -> Self {
        let irregulars = [
            ("children", "child"),
            ("feet", "foot"),
            ("teeth", "tooth"),
            ("geese", "goose"),
            ("mice", "mouse"),
            ("men", "man"),
            ("women", "woman"),
            ("wives", "wife"),
            ("knives", "knife"),
            ("leaves", "leaf"),
            ("lives", "life"),
            ("halves", "half"),
            ("selves", "self"),
        ]
        .into_iter()
        .collect();
        Self { irregulars }
    }

    /// Lemmatize one lowercase token.
    pub fn lemma(&self, word: &str) -> String {
        if let Some(base) = self.irregulars.get(word) {
            return (*base).to_string();
        }

        // Mass nouns and short words that the -s rule would mangle
        if matches!(word, "news" | "series" | "species") {
            return word.to_string();
        }

        if word.len() >= 5 && word.ends_with("ies") {
            return format!("{}y", &word[..word.len() - 3]);
        }
        if word.ends_with("sses") {
            return word[..word.len() - 2].to_string();
        }
        if word.len() >= 5
            && (word.ends_with("ches")
                || word.ends_with("shes")
                || word.ends_with("xes")
                || word.ends_with("zes"))
        {
            return word[..word.len() - 2].to_string();
        }
        if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
            return word.to_string();
        }
        if word.len() > 3 && word.ends_with('s') {
            return word[..word.len() - 1].to_string();
        }

        word.to_string()
    }
}

impl Default for Lemmatizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_plurals() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemma("cats"), "cat");
        assert_eq!(l.lemma("dogs"), "dog");
        assert_eq!(l.lemma("messages"), "message");
    }

    #[test]
    fn suffix_rules() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemma("studies"), "study");
        assert_eq!(l.lemma("babies"), "baby");
        assert_eq!(l.lemma("churches"), "church");
        assert_eq!(l.lemma("boxes"), "box");
        assert_eq!(l.lemma("classes"), "class");
    }

    #[test]
    fn irregular_plurals() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemma("children"), "child");
        assert_eq!(l.lemma("mice"), "mouse");
        assert_eq!(l.lemma("women"), "woman");
    }

    #[test]
    fn non_plurals_pass_through() {
        let l = Lemmatizer::new();
        assert_eq!(l.lemma("class"), "class");
        assert_eq!(l.lemma("bus"), "bus");
        assert_eq!(l.lemma("analysis"), "analysis");
        assert_eq!(l.lemma("news"), "news");
        assert_eq!(l.lemma("cat"), "cat");
        assert_eq!(l.lemma("gas"), "gas");
    }

    #[test]
    fn ties_keeps_its_vowel() {
        let l = Lemmatizer::new();
        // Short -ies words are plain -s plurals, not -y stems
        assert_eq!(l.lemma("ties"), "tie");
        assert_eq!(l.lemma("pies"), "pie");
    }
}
