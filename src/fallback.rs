// src/fallback.rs
// Degraded, generation-free digests. Every text produced here still
// goes through the output bounder before delivery.

use crate::candidate::Candidate;
use crate::error::RadarError;

/// Notice for a run where nothing survived the recency filter.
pub fn no_candidates_notice(lookback_days: u32) -> String {
    format!("Nenhuma novidade relevante nos últimos {lookback_days} dias.")
}

/// Notice for a run where the feed itself could not be read.
pub fn feed_unavailable_notice() -> String {
    "Não foi possível ler o feed de notícias desta vez.".to_string()
}

/// Deterministic title + link listing used when the generation
/// collaborator failed or returned nothing. The failure category is
/// part of the message so the delivery is self-describing.
pub fn listing_digest(candidates: &[Candidate], reason: &RadarError) -> String {
    let category = match reason {
        RadarError::EmptyGeneration => "resposta vazia do gerador",
        RadarError::GenerationFailure(_) => "falha na geração do resumo",
        other => return format!("Boletim indisponível: {other}"),
    };

    let mut out = format!("⚠️ Resumo automático indisponível ({category}). Itens recentes:\n");
    for (i, c) in candidates.iter().enumerate() {
        out.push_str(&format!("\n{}. {} — {}", i + 1, c.title, c.link));
    }
    out
}
