use std::collections::HashSet;

const TRAILING_PUNCTUATION: [char; 6] = ['.', ',', '?', ':', ';', '!'];

pub struct Tokenizer {
    noise_words: HashSet<String>,
}

impl Tokenizer {
    #[must_use]
    pub const fn new(noise_words: HashSet<String>) -> Self {
        Self { noise_words }
    }

    /// Returns the normalized keyword for a raw whitespace-delimited token,
    /// or `None` if the token does not qualify as a keyword.
    ///
    /// A keyword is a word that, lowercased and stripped of trailing
    /// punctuation, consists only of alphabetic characters and is neither a
    /// single character nor a noise word.
    #[must_use]
    pub fn keyword(&self, raw: &str) -> Option<String> {
        let mut word = raw.to_lowercase();

        // Single characters are checked before stripping, on the raw length.
        if word.chars().count() == 1 {
            return None;
        }

        if self.noise_words.contains(&word) {
            return None;
        }

        loop {
            let last = word.chars().last()?;
            if last.is_alphabetic() {
                break;
            }
            if TRAILING_PUNCTUATION.contains(&last) {
                word.pop();
            } else {
                return None;
            }
        }

        if word.chars().all(char::is_alphabetic) {
            Some(word)
        } else {
            None
        }
    }
}
