//! A small word index in the shape of the tree's usual caller: the tree
//! keeps the set of words and a side map keeps where each word was seen.

use std::collections::{BTreeMap, HashMap};

use unbalanced_bst::Tree;

#[derive(Default)]
struct WordIndex {
    words: Tree<String>,
    /// word -> source -> line numbers, in the order they were seen.
    seen: HashMap<String, BTreeMap<String, Vec<usize>>>,
}

impl WordIndex {
    fn scan(&mut self, source: &str, text: &str) {
        for (number, line) in text.lines().enumerate() {
            let words = line
                .split(|c: char| !c.is_alphanumeric())
                .filter(|word| !word.is_empty())
                .map(str::to_lowercase);

            for word in words {
                if !self.words.contains(word.as_str()) {
                    self.words.insert(word.clone());
                }
                self.seen
                    .entry(word)
                    .or_default()
                    .entry(source.to_string())
                    .or_default()
                    .push(number + 1);
            }
        }
    }

    /// One line per word: the word, then each source with its lines.
    fn report(&self) -> Vec<String> {
        self.words
            .inorder()
            .map(|word| {
                let places: Vec<String> = self.seen[word]
                    .iter()
                    .map(|(source, lines)| format!("{} {:?}", source, lines))
                    .collect();
                format!("{}: {}", word, places.join(", "))
            })
            .collect()
    }
}

#[test]
fn report_is_alphabetical() {
    let mut index = WordIndex::default();
    index.scan("a.txt", "The dog saw the cat.\nA bird!");
    index.scan("b.txt", "cat, dog");

    assert_eq!(
        index.report(),
        [
            "a: a.txt [2]",
            "bird: a.txt [2]",
            "cat: a.txt [1], b.txt [1]",
            "dog: a.txt [1], b.txt [1]",
            "saw: a.txt [1]",
            "the: a.txt [1, 1]",
        ]
    );
    assert_eq!(index.words.len(), index.seen.len());
}

#[test]
fn rebuilding_from_saved_words_gives_the_same_report() {
    let mut index = WordIndex::default();
    index.scan("poem.txt", "one two three\nfour five six\nseven one");

    let saved: Vec<String> = index.words.preorder().cloned().collect();
    let restored = WordIndex {
        words: saved.into_iter().collect(),
        seen: index.seen.clone(),
    };

    assert_eq!(restored.report(), index.report());
    assert_eq!(restored.words.height(), index.words.height());
}
