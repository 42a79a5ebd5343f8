/// Label of the entry that unlocks a free-text destination.
/// Destinations the backend has never seen need a fresh knowledge graph, hence the warning.
pub const CUSTOM_DESTINATION: &str = "Other (it may take 3-4 minutes to generate the graph)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestion {
    Known(String),
    Custom,
}

impl Suggestion {
    pub fn label(&self) -> &str {
        match self {
            Suggestion::Known(name) => name,
            Suggestion::Custom => CUSTOM_DESTINATION,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Suggestion::Custom)
    }
}

/// Known destinations containing `query` (case-insensitive), in list order.
/// The custom entry is appended unless `query` names a known destination exactly.
pub fn suggest(known: &[String], query: &str) -> Vec<Suggestion> {
    let needle = query.to_lowercase();

    let mut exact_match = false;
    let mut suggestions: Vec<Suggestion> = known
        .iter()
        .filter(|name| {
            let name = name.to_lowercase();
            exact_match |= name == needle;
            name.contains(&needle)
        })
        .map(|name| Suggestion::Known(name.clone()))
        .collect();

    if !exact_match {
        suggestions.push(Suggestion::Custom);
    }

    suggestions
}
