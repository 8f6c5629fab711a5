use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Errors raised while building or applying a TF-IDF index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VectorizeError {
    #[error("Cannot fit an index on an empty corpus")]
    EmptyCorpus,

    #[error("Empty vocabulary; documents may contain only stop words")]
    EmptyVocabulary,

    #[error("Vectorizer has not been fitted")]
    NotFitted,
}

/// English stop words (the scikit-learn list)
const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into",
    "is", "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd",
    "made", "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover",
    "most", "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither",
    "never", "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not",
    "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto",
    "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own",
    "part", "per", "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed",
    "seeming", "seems", "serious", "several", "she", "should", "show", "side", "since",
    "sincere", "six", "sixty", "so", "some", "somehow", "someone", "something", "sometime",
    "sometimes", "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the",
    "their", "them", "themselves", "then", "thence", "there", "thereafter", "thereby",
    "therefore", "therein", "thereupon", "these", "they", "thick", "thin", "third", "this",
    "those", "though", "three", "through", "throughout", "thru", "thus", "to", "together",
    "too", "top", "toward", "towards", "twelve", "twenty", "two", "un", "under", "until", "up",
    "upon", "us", "very", "via", "was", "we", "well", "were", "what", "whatever", "when",
    "whence", "whenever", "where", "whereafter", "whereas", "whereby", "wherein", "whereupon",
    "wherever", "whether", "which", "while", "whither", "who", "whoever", "whole", "whom",
    "whose", "why", "will", "with", "within", "without", "would", "yet", "you", "your", "yours",
    "yourself", "yourselves",
];

/// Sparse L2-normalized term vector keyed by vocabulary index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: HashMap<usize, f64>,
}

impl TermVector {
    pub fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn weight(&self, index: usize) -> f64 {
        self.weights.get(&index).copied().unwrap_or(0.0)
    }

    fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for w in self.weights.values_mut() {
                *w /= norm;
            }
        }
        self
    }
}

/// Cosine similarity of two sparse vectors; 0 when either is zero
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.weights.len() <= b.weights.len() { (a, b) } else { (b, a) };
    let dot: f64 = small
        .weights
        .iter()
        .map(|(i, w)| w * large.weight(*i))
        .sum();

    let norms = a.norm() * b.norm();
    if norms == 0.0 {
        return 0.0;
    }
    (dot / norms).clamp(0.0, 1.0)
}

/// Lower-cased word tokens of at least two characters
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(str::to_lowercase)
}

/// Term-frequency / inverse-document-frequency vectorizer
///
/// Vocabulary is capped at `max_features` terms by total corpus frequency
/// (ties broken alphabetically). IDF is smoothed: `ln((1 + n) / (1 + df)) + 1`.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    max_features: usize,
    stop_words: HashSet<&'static str>,
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    pub fn new(max_features: usize) -> Self {
        Self {
            max_features,
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
            vocabulary: HashMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    pub fn clear(&mut self) {
        self.vocabulary.clear();
        self.idf.clear();
    }

    fn terms<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        tokenize(text).filter(move |t| !self.stop_words.contains(t.as_str()))
    }

    /// Learn vocabulary and IDF from `documents` and return their vectors.
    ///
    /// On error the previous fit is discarded.
    pub fn fit_transform<S: AsRef<str>>(
        &mut self,
        documents: &[S],
    ) -> Result<Vec<TermVector>, VectorizeError> {
        self.clear();
        if documents.is_empty() {
            return Err(VectorizeError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| self.terms(d.as_ref()).collect())
            .collect();

        let mut term_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for tokens in &tokenized {
            let mut seen = HashSet::new();
            for token in tokens {
                *term_freq.entry(token.as_str()).or_insert(0) += 1;
                if seen.insert(token.as_str()) {
                    *doc_freq.entry(token.as_str()).or_insert(0) += 1;
                }
            }
        }

        if term_freq.is_empty() {
            return Err(VectorizeError::EmptyVocabulary);
        }

        let mut ranked: Vec<(&str, usize)> = term_freq.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(self.max_features);

        let mut kept: Vec<&str> = ranked.into_iter().map(|(t, _)| t).collect();
        kept.sort_unstable();

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (index, term) in kept.into_iter().enumerate() {
            let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert(term.to_string(), index);
        }

        tracing::debug!(
            "Fitted TF-IDF vocabulary of {} terms over {} documents",
            vocabulary.len(),
            documents.len()
        );

        self.vocabulary = vocabulary;
        self.idf = idf;

        Ok(tokenized.iter().map(|tokens| self.weigh(tokens)).collect())
    }

    /// Vectorize text with the fitted vocabulary; unknown terms are ignored
    pub fn transform(&self, text: &str) -> Result<TermVector, VectorizeError> {
        if !self.is_fitted() {
            return Err(VectorizeError::NotFitted);
        }
        let tokens: Vec<String> = self.terms(text).collect();
        Ok(self.weigh(&tokens))
    }

    fn weigh(&self, tokens: &[String]) -> TermVector {
        let mut weights: HashMap<usize, f64> = HashMap::new();
        for token in tokens {
            if let Some(&index) = self.vocabulary.get(token) {
                *weights.entry(index).or_insert(0.0) += 1.0;
            }
        }
        for (index, w) in weights.iter_mut() {
            *w *= self.idf[*index];
        }
        TermVector { weights }.normalized()
    }
}
