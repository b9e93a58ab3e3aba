// src/prompt.rs
// Renders the ranked candidates into the fixed prompt the generation
// collaborator receives. No truncation happens here beyond the excerpt
// cap already applied by the candidate builder.

use crate::candidate::Candidate;

/// Marker used when an item's publish date is unknown.
pub const UNKNOWN_DATE_MARKER: &str = "sem data";

/// Fixed instructional preamble, passed unmodified to the generator.
pub const SYSTEM_PREAMBLE: &str = "Você é um editor técnico-executivo. Resuma notícias com \
     objetividade, apenas fatos. Sem opinião. Em português. \
     4 a 6 linhas por notícia.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Assemble the prompt for a ranked, non-empty candidate sequence.
pub fn assemble(candidates: &[Candidate], topic: &str) -> Prompt {
    let items_block = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let date = c
                .published_at
                .map(|dt| dt.format("%Y-%m-%dT%H:%M:%SZ").to_string())
                .unwrap_or_else(|| UNKNOWN_DATE_MARKER.to_string());
            format!(
                "{idx}. Título: {title}\n   Data: {date}\n   Link: {link}\n   Contexto: {excerpt}",
                idx = i + 1,
                title = c.title,
                link = c.link,
                excerpt = c.excerpt,
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let user = format!(
        "Gere um boletim único com {n} itens sobre {topic}.\n\
         \n\
         Regras:\n\
         - Cada item: TÍTULO em uma linha, depois 4–6 linhas de resumo.\n\
         - Incluir o link ao final do item.\n\
         - Não inventar detalhes: use apenas o contexto fornecido.\n\
         - Linguagem: PT-BR, factual.\n\
         \n\
         Itens:\n\
         {items_block}",
        n = candidates.len(),
    );

    Prompt {
        system: SYSTEM_PREAMBLE.to_string(),
        user,
    }
}
