// Replacement entries stored in the acronym index

use caps_core::CaseMapper;

/// One acronym with its camel and screaming spellings.
///
/// `lower` is the screaming spelling lowercased through the index's case
/// mapper.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReplacementEntry {
    pub camel: String,
    pub screaming: String,
    pub lower: String,
}

impl ReplacementEntry {
    pub fn new<M: CaseMapper>(mapper: &M, camel: &str, screaming: &str) -> Self {
        Self {
            camel: camel.to_string(),
            screaming: screaming.to_string(),
            lower: mapper.lower_str(screaming),
        }
    }

    /// The distinct lowercase spellings this entry is indexed under: the
    /// screaming spelling, then the camel spelling when it lowercases
    /// differently.
    pub fn keys<M: CaseMapper>(&self, mapper: &M) -> Vec<Vec<char>> {
        let screaming: Vec<char> = self.lower.chars().collect();
        let camel: Vec<char> = self.camel.chars().map(|c| mapper.to_lower(c)).collect();
        if camel == screaming {
            vec![screaming]
        } else {
            vec![screaming, camel]
        }
    }
}
