use anyhow::{anyhow, bail};
use rand::seq::SliceRandom;
use std::io::BufRead;
use std::io::Result;

/// The words a secret can be chosen from.
pub struct WordList {
    words: Vec<Box<str>>,
}

impl WordList {
    /// Constructs a new `WordList` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word is trimmed and converted to upper
    /// case. Blank lines and words that don't have exactly `word_size` letters are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R, word_size: usize) -> Result<Self> {
        let mut words = Vec::new();
        for maybe_line in word_reader.lines() {
            let line = maybe_line?;
            let word = line.trim();
            if word.chars().count() != word_size {
                continue;
            }
            words.push(Box::from(word.to_uppercase().as_str()));
        }
        Ok(WordList { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Picks a word uniformly at random, or `None` if the list is empty.
    pub fn choose_random(&self) -> Option<&str> {
        self.words
            .choose(&mut rand::thread_rng())
            .map(|word| word.as_ref())
    }
}

/// Where the secret word of each new game comes from.
pub enum Secrets {
    /// Every game is played against the same word.
    Fixed(Box<str>),
    /// Every game picks a new word at random.
    Random(WordList),
}

impl Secrets {
    /// Uses the given word for every game. It is upper-cased, and must have exactly `word_size`
    /// letters.
    pub fn fixed(word: &str, word_size: usize) -> anyhow::Result<Self> {
        let word = word.trim().to_uppercase();
        if word.chars().count() != word_size {
            bail!("The secret word {} must be {} letters long.", word, word_size);
        }
        Ok(Secrets::Fixed(Box::from(word.as_str())))
    }

    /// Picks words from the given list, which must not be empty.
    pub fn random(word_list: WordList) -> anyhow::Result<Self> {
        if word_list.is_empty() {
            bail!("The word list has no words of the right length.");
        }
        Ok(Secrets::Random(word_list))
    }

    /// The secret word for the next game.
    pub fn next_secret(&self) -> anyhow::Result<String> {
        match self {
            Secrets::Fixed(word) => Ok(word.to_string()),
            Secrets::Random(word_list) => word_list
                .choose_random()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("The word list is empty.")),
        }
    }
}
