// General-purpose sentiment lexicon for casual chat language.
//
// Word weights live in [-1.0, 1.0]. Modifiers scale the following
// sentiment word; negations flip its sign. The tables lean toward words
// that actually show up in group chats rather than formal prose.

use std::collections::HashMap;

pub struct Lexicon {
    positive: HashMap<&'static str, f64>,
    negative: HashMap<&'static str, f64>,
    modifiers: HashMap<&'static str, f64>,
    negations: &'static [&'static str],
}

impl Lexicon {
    pub fn new() -> Self {
        let positive: HashMap<&'static str, f64> = [
            ("amazing", 0.8),
            ("awesome", 0.8),
            ("beautiful", 0.7),
            ("best", 0.8),
            ("better", 0.5),
            ("brilliant", 0.8),
            ("celebrate", 0.7),
            ("congrats", 0.8),
            ("congratulations", 0.8),
            ("cool", 0.4),
            ("cute", 0.5),
            ("delicious", 0.6),
            ("enjoy", 0.5),
            ("enjoyed", 0.5),
            ("excellent", 0.8),
            ("excited", 0.7),
            ("fantastic", 0.8),
            ("fine", 0.3),
            ("fun", 0.6),
            ("funny", 0.5),
            ("glad", 0.6),
            ("good", 0.5),
            ("great", 0.7),
            ("haha", 0.4),
            ("happy", 0.7),
            ("hilarious", 0.6),
            ("lol", 0.3),
            ("love", 0.8),
            ("loved", 0.8),
            ("lovely", 0.7),
            ("nice", 0.5),
            ("perfect", 0.8),
            ("pleased", 0.6),
            ("proud", 0.6),
            ("sweet", 0.5),
            ("thanks", 0.5),
            ("thank", 0.5),
            ("welcome", 0.4),
            ("win", 0.6),
            ("won", 0.6),
            ("wonderful", 0.8),
            ("wow", 0.4),
            ("yay", 0.6),
            ("yes", 0.2),
        ]
        .into_iter()
        .collect();

        let negative: HashMap<&'static str, f64> = [
            ("angry", -0.7),
            ("annoyed", -0.5),
            ("annoying", -0.5),
            ("awful", -0.8),
            ("bad", -0.5),
            ("boring", -0.4),
            ("broken", -0.5),
            ("cancel", -0.3),
            ("cancelled", -0.4),
            ("crying", -0.5),
            ("disappointed", -0.6),
            ("disappointing", -0.6),
            ("fail", -0.6),
            ("failed", -0.6),
            ("fear", -0.5),
            ("hate", -0.8),
            ("hated", -0.8),
            ("horrible", -0.8),
            ("hurt", -0.6),
            ("late", -0.3),
            ("lost", -0.5),
            ("mad", -0.6),
            ("mess", -0.4),
            ("miss", -0.3),
            ("missed", -0.3),
            ("no", -0.2),
            ("pain", -0.6),
            ("problem", -0.4),
            ("problems", -0.4),
            ("sad", -0.6),
            ("scared", -0.6),
            ("sick", -0.5),
            ("sorry", -0.3),
            ("stress", -0.5),
            ("stressed", -0.5),
            ("terrible", -0.8),
            ("tired", -0.3),
            ("ugh", -0.4),
            ("upset", -0.6),
            ("wait", -0.1),
            ("worried", -0.5),
            ("worry", -0.5),
            ("worse", -0.6),
            ("worst", -0.8),
            ("wrong", -0.5),
        ]
        .into_iter()
        .collect();

        let modifiers: HashMap<&'static str, f64> = [
            ("very", 1.5),
            ("really", 1.4),
            ("so", 1.3),
            ("super", 1.5),
            ("extremely", 1.8),
            ("totally", 1.4),
            ("absolutely", 1.6),
            ("quite", 1.2),
            ("pretty", 1.2),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("bit", 0.7),
            ("kinda", 0.8),
        ]
        .into_iter()
        .collect();

        let negations: &'static [&'static str] = &[
            "not", "never", "no", "nobody", "nothing", "dont", "don't", "didnt", "didn't",
            "cant", "can't", "wont", "won't", "isnt", "isn't", "wasnt", "wasn't", "arent",
            "aren't", "couldnt", "couldn't", "wouldnt", "wouldn't", "shouldnt", "shouldn't",
        ];

        Self {
            positive,
            negative,
            modifiers,
            negations,
        }
    }

    /// Base weight of a word, if it carries sentiment.
    pub fn weight(&self, word: &str) -> Option<f64> {
        self.positive
            .get(word)
            .or_else(|| self.negative.get(word))
            .copied()
    }

    pub fn modifier(&self, word: &str) -> Option<f64> {
        self.modifiers.get(word).copied()
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(&word)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}
