//! Static keyword tables for lead scoring and intent detection.
//!
//! All matching is done by substring on lower-cased text, so accented and
//! unaccented spellings are listed separately where both show up in chat.

use lazy_static::lazy_static;
use std::collections::HashSet;

pub const PRICE_KEYWORDS: &[&str] = &[
    "preço",
    "preco",
    "valor",
    "custo",
    "quanto custa",
    "orçamento",
    "orcamento",
    "plano",
];

pub const SCHEDULING_KEYWORDS: &[&str] = &[
    "agendar",
    "demo",
    "demonstração",
    "demonstracao",
    "reunião",
    "reuniao",
    "horário",
    "horario",
];

pub const URGENCY_KEYWORDS: &[&str] = &["prazo", "urgente", "preciso"];

pub const ORGANIZATION_KEYWORDS: &[&str] = &["empresa", "escritório", "escritorio", "equipe"];

pub const IMMEDIACY_KEYWORDS: &[&str] = &["agora", "imediato", "hoje"];

pub const GREETING_KEYWORDS: &[&str] = &[
    "oi",
    "olá",
    "ola",
    "bom dia",
    "boa tarde",
    "boa noite",
    "e aí",
];

pub const HELP_KEYWORDS: &[&str] = &[
    "ajuda",
    "ajudar",
    "dúvida",
    "duvida",
    "como funciona",
    "suporte",
];

pub const SEARCH_KEYWORDS: &[&str] = &[
    "buscar",
    "procurar",
    "pesquisar",
    "consultar",
    "processo",
    "jurisprudência",
    "jurisprudencia",
];

pub const INTENT_SCHEDULING_KEYWORDS: &[&str] = &[
    "agendar",
    "marcar",
    "reunião",
    "reuniao",
    "horário",
    "horario",
];

pub const DEADLINE_KEYWORDS: &[&str] = &["prazo", "vencimento", "dias", "urgente", "data limite"];

pub const PRICING_KEYWORDS: &[&str] = &[
    "preço",
    "preco",
    "valor",
    "custo",
    "quanto custa",
    "honorários",
    "honorarios",
    "plano",
];

pub const CONTACT_KEYWORDS: &[&str] = &[
    "contato",
    "telefone",
    "email",
    "e-mail",
    "whatsapp",
    "falar com",
];

lazy_static! {
    /// Portuguese function words dropped before counting tokens.
    pub static ref STOP_WORDS: HashSet<&'static str> = [
        "a", "o", "as", "os", "um", "uma", "uns", "umas",
        "de", "da", "do", "das", "dos",
        "em", "na", "no", "nas", "nos",
        "e", "ou", "que", "se", "para", "pra", "por", "com", "sem",
        "ao", "aos", "à", "às", "pelo", "pela",
        "é", "eu", "me", "meu", "minha", "seu", "sua",
    ]
    .into_iter()
    .collect();
}

/// Whether any keyword occurs in `lowered`.
pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// Total non-overlapping occurrences of every keyword in `lowered`.
pub fn count_occurrences(lowered: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .map(|keyword| lowered.matches(keyword).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_any() {
        assert!(contains_any("qual o preço?", PRICE_KEYWORDS));
        assert!(!contains_any("bom dia", PRICE_KEYWORDS));
    }

    #[test]
    fn test_count_occurrences_counts_every_keyword() {
        // "ajudar" also contains "ajuda"
        assert_eq!(count_occurrences("pode me ajudar?", HELP_KEYWORDS), 2);
        assert_eq!(count_occurrences("oi oi", GREETING_KEYWORDS), 2);
        assert_eq!(count_occurrences("nada", GREETING_KEYWORDS), 0);
    }

    #[test]
    fn test_stop_words() {
        assert!(STOP_WORDS.contains("de"));
        assert!(!STOP_WORDS.contains("prazo"));
    }
}
