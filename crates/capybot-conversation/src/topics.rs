//! Keyword → snippet retrieval over the built-in topic table.
//!
//! The message is lowercased and every keyword is tested as a substring.
//! All matching topics contribute their snippet, in table order, joined by a
//! newline; a topic hit through several of its keywords appears once.
use tracing::debug;

use crate::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topic {
    pub name: &'static str,
    /// Lowercase keywords, Spanish and English.
    pub keywords: &'static [&'static str],
    pub snippet: &'static str,
}

impl Topic {
    /// `lowercase_text` must already be lowercased.
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords.iter().any(|k| lowercase_text.contains(k))
    }
}

/// Immutable topic table; shared freely between requests.
#[derive(Debug, Clone, Copy)]
pub struct TopicTable {
    topics: &'static [Topic],
    source_language: Language,
}

const BUILTIN_TOPICS: &[Topic] = &[
    Topic {
        name: "plans",
        keywords: &["plan"],
        snippet: "Planes disponibles:\n- **Gratis**: funciones básicas para empezar\n- **Pro**: herramientas avanzadas para crecer",
    },
    Topic {
        name: "pricing",
        keywords: &["precio", "price", "pricing", "costo", "cost"],
        snippet: "El plan **Pro** cuesta S/. 60 al mes. El plan **Gratis** no tiene costo.",
    },
    Topic {
        name: "benefits",
        keywords: &["beneficio", "benefit"],
        snippet: "Mejora el control de ventas, reduce errores y ahorra tiempo.",
    },
    Topic {
        name: "customers",
        keywords: &["cliente", "client", "customer"],
        snippet: "Empresas de retail, restaurantes y emprendimientos en crecimiento.",
    },
    Topic {
        name: "features",
        keywords: &["funcionalidad", "feature"],
        snippet: "POS, CRM, inventarios, reportes y control multi-sucursal.",
    },
    Topic {
        name: "use_cases",
        keywords: &["caso de uso", "casos de uso", "use case"],
        snippet: "Ideal para negocios que venden en tienda física, online o por WhatsApp.",
    },
];

static BUILTIN: TopicTable = TopicTable::new(BUILTIN_TOPICS, Language::Spanish);

impl TopicTable {
    pub const fn new(topics: &'static [Topic], source_language: Language) -> Self {
        Self {
            topics,
            source_language,
        }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> &'static TopicTable {
        &BUILTIN
    }

    pub fn topics(&self) -> &'static [Topic] {
        self.topics
    }

    /// Language the snippets are written in.
    pub fn source_language(&self) -> Language {
        self.source_language
    }

    pub fn matching(&self, text: &str) -> Vec<&'static Topic> {
        let text = text.to_lowercase();
        self.topics.iter().filter(|t| t.matches(&text)).collect()
    }

    /// Snippets of every matching topic, or the empty string.
    pub fn retrieve(&self, text: &str) -> String {
        let hits = self.matching(text);
        if !hits.is_empty() {
            debug!(topics = ?hits.iter().map(|t| t.name).collect::<Vec<_>>(), "context topics matched");
        }
        hits.iter()
            .map(|t| t.snippet)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Retrieve from the built-in table.
pub fn retrieve_context(user_text: &str) -> String {
    TopicTable::builtin().retrieve(user_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snippet(name: &str) -> &'static str {
        BUILTIN_TOPICS
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.snippet)
            .unwrap()
    }

    #[test]
    fn no_keyword_gives_empty_context() {
        assert_eq!(retrieve_context("hola, ¿qué tal?"), "");
        assert_eq!(retrieve_context(""), "");
        assert_eq!(retrieve_context("what is the weather like"), "");
    }

    #[test]
    fn single_keyword_gives_exact_snippet() {
        assert_eq!(retrieve_context("price"), snippet("pricing"));
        assert_eq!(retrieve_context("¿Cuál es el PRECIO?"), snippet("pricing"));
        assert_eq!(retrieve_context("what benefits do I get"), snippet("benefits"));
        assert_eq!(retrieve_context("Dame un caso de uso"), snippet("use_cases"));
    }

    #[test]
    fn several_keywords_of_one_topic_count_once() {
        assert_eq!(retrieve_context("mis clientes / my customers"), snippet("customers"));
    }

    #[test]
    fn multiple_topics_concatenate_in_table_order() {
        let context = retrieve_context("beneficios y precio");
        assert_eq!(
            context,
            format!("{}\n{}", snippet("pricing"), snippet("benefits"))
        );
    }

    #[test]
    fn builtin_keywords_are_lowercase() {
        for topic in TopicTable::builtin().topics() {
            for keyword in topic.keywords {
                assert_eq!(*keyword, keyword.to_lowercase());
            }
        }
        assert_eq!(TopicTable::builtin().source_language(), Language::Spanish);
    }
}
