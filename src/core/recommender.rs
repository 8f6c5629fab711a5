use crate::core::distance::geodesic_distance;
use crate::core::tfidf::{cosine_similarity, TermVector, TfidfVectorizer};
use crate::models::{Coordinates, Listing, RecommendationResult};
use std::cmp::Ordering;

/// Tunables for the recommendation pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecommenderConfig {
    pub max_distance_km: f64,
    pub default_limit: usize,
    pub max_features: usize,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            max_distance_km: 10.0,
            default_limit: 5,
            max_features: 1000,
        }
    }
}

/// Text-similarity ranking over a snapshot of listings
///
/// # Pipeline Stages
/// 1. Cosine similarity between preference terms and each listing
/// 2. Availability and geodesic distance filter
/// 3. Sort by (similarity, distance), both descending
/// 4. Truncate to the requested limit
///
/// The index is rebuilt wholesale by [`Recommender::train`].
#[derive(Debug, Clone)]
pub struct Recommender {
    config: RecommenderConfig,
    vectorizer: TfidfVectorizer,
    listings: Vec<Listing>,
    vectors: Option<Vec<TermVector>>,
}

impl Recommender {
    pub fn new(config: RecommenderConfig) -> Self {
        Self {
            config,
            vectorizer: TfidfVectorizer::new(config.max_features),
            listings: Vec::new(),
            vectors: None,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(RecommenderConfig::default())
    }

    pub fn is_trained(&self) -> bool {
        self.vectors.is_some() && !self.listings.is_empty()
    }

    /// Number of listings in the trained snapshot
    pub fn corpus_len(&self) -> usize {
        self.listings.len()
    }

    /// Rebuild the index from `listings`.
    ///
    /// An empty snapshot clears the index. A snapshot that yields no
    /// vocabulary leaves the index unset.
    pub fn train(&mut self, listings: &[Listing]) {
        self.listings = listings.to_vec();
        self.vectors = None;

        if listings.is_empty() {
            self.vectorizer.clear();
            tracing::debug!("Cleared recommendation index (empty snapshot)");
            return;
        }

        let documents: Vec<String> = listings.iter().map(Listing::document_text).collect();

        match self.vectorizer.fit_transform(&documents) {
            Ok(vectors) => {
                tracing::debug!(
                    "Trained recommendation index on {} listings ({} terms)",
                    listings.len(),
                    self.vectorizer.vocabulary_len()
                );
                self.vectors = Some(vectors);
            }
            Err(e) => {
                tracing::warn!("Failed to build recommendation index: {}", e);
            }
        }
    }

    /// Recommendations with the configured default limit
    pub fn recommend<S: AsRef<str>>(
        &self,
        preference_terms: &[S],
        origin: Coordinates,
    ) -> Vec<RecommendationResult> {
        self.get_recommendations(preference_terms, origin, self.config.default_limit)
    }

    /// Rank available listings near `origin` by similarity to the preference terms
    ///
    /// Among equal similarity, the farther listing comes first. Listings
    /// with invalid stored coordinates are skipped.
    pub fn get_recommendations<S: AsRef<str>>(
        &self,
        preference_terms: &[S],
        origin: Coordinates,
        limit: usize,
    ) -> Vec<RecommendationResult> {
        let vectors = match &self.vectors {
            Some(v) if !self.listings.is_empty() => v,
            _ => return Vec::new(),
        };

        let terms: Vec<&str> = preference_terms.iter().map(|t| t.as_ref()).collect();
        let query_text = terms.join(" ");

        let query = match self.vectorizer.transform(&query_text) {
            Ok(q) => q,
            Err(e) => {
                tracing::warn!("Failed to vectorize preferences: {}", e);
                return Vec::new();
            }
        };

        let mut results: Vec<RecommendationResult> = self
            .listings
            .iter()
            .zip(vectors.iter())
            .filter(|(listing, _)| listing.is_available)
            .filter_map(|(listing, vector)| {
                let location = match listing.coordinates() {
                    Ok(c) => c,
                    Err(e) => {
                        tracing::debug!("Skipping listing {}: {}", listing.id, e);
                        return None;
                    }
                };

                let distance_km = geodesic_distance(origin, location);
                if distance_km > self.config.max_distance_km {
                    return None;
                }

                Some(RecommendationResult {
                    listing: listing.clone(),
                    similarity_score: cosine_similarity(&query, vector),
                    distance_km,
                })
            })
            .collect();

        // Stable sort: equal keys keep snapshot order
        results.sort_by(|a, b| {
            b.similarity_score
                .partial_cmp(&a.similarity_score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| {
                    b.distance_km
                        .partial_cmp(&a.distance_km)
                        .unwrap_or(Ordering::Equal)
                })
        });

        results.truncate(limit);
        results
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_defaults()
    }
}
