use crate::annotating::Category;

/// Immutable per-run mapping from highlight category to the tag pair that
/// brackets spans of that category in the output.
#[derive(Debug, Clone)]
pub struct Theme {
    literal: (String, String),
    keyword: (String, String),
}

impl Theme {
    pub fn tags(&self, category: Category) -> (&str, &str) {
        match category {
            Category::Literal => (&self.literal.0, &self.literal.1),
            Category::Keyword => (&self.keyword.0, &self.keyword.1),
        }
    }
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            literal: ("<font color=red>".to_string(), "</font>".to_string()),
            keyword: ("<font color=green>".to_string(), "</font>".to_string()),
        }
    }
}
