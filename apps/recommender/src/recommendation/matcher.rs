//! Career matching — brute-force nearest neighbour over the catalog by cosine similarity.
//!
//! Every catalog entry is re-embedded on each call; catalogs are tens of entries.

use tracing::debug;

use crate::catalog::{CareerPath, Catalog};
use crate::embedding::{cosine_similarity, Embedder, EmbeddingError};

/// The best catalog entry for a user vector.
#[derive(Debug, Clone, Copy)]
pub struct CareerMatch<'a> {
    pub career: &'a CareerPath,
    /// Cosine similarity, in [-1, 1].
    pub score: f32,
}

/// Embeds each entry's role titles and returns the most similar entry.
/// `None` only for an empty catalog.
pub async fn match_career<'a>(
    user_vector: &[f32],
    catalog: &'a Catalog,
    embedder: &dyn Embedder,
) -> Result<Option<CareerMatch<'a>>, EmbeddingError> {
    let mut scores = Vec::with_capacity(catalog.len());
    for career in catalog.entries() {
        let career_vector = embedder.embed(&career.embedding_text()).await?;
        let score = cosine_similarity(user_vector, &career_vector)?;
        debug!("Similarity {:.4} for {}", score, career.category);
        scores.push(score);
    }

    Ok(best_index(&scores).map(|(index, score)| CareerMatch {
        career: &catalog.entries()[index],
        score,
    }))
}

/// Index and value of the first maximum. NaN scores never win.
fn best_index(scores: &[f32]) -> Option<(usize, f32)> {
    let mut best: Option<(usize, f32)> = None;
    for (index, &score) in scores.iter().enumerate() {
        if score.is_nan() {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((index, score)),
        }
    }
    best
}
