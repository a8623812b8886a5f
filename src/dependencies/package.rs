//! @acp:module "Package Names"
//! @acp:summary "Package name extraction and relatedness checks"
//! @acp:domain roadmap
//! @acp:layer logic

/// Known co-evolving package pairs (order does not matter)
const BUILTIN_RELATED: &[(&str, &str)] = &[
    ("react", "react-dom"),
    ("react", "react-router"),
    ("react", "react-router-dom"),
    ("react", "react-native"),
    ("react", "next"),
    ("redux", "react-redux"),
    ("vue", "vue-router"),
    ("vue", "vuex"),
    ("vue", "pinia"),
    ("vue", "nuxt"),
    ("@angular/core", "@angular/common"),
    ("@angular/core", "@angular/router"),
    ("@angular/core", "@angular/forms"),
    ("@angular/core", "rxjs"),
    ("svelte", "@sveltejs/kit"),
    ("typescript", "ts-node"),
    ("typescript", "ts-jest"),
    ("jest", "ts-jest"),
    ("webpack", "webpack-cli"),
    ("express", "body-parser"),
    ("django", "djangorestframework"),
    ("flask", "werkzeug"),
];

/// @acp:summary "Extract the package name from a state label"
///
/// The name is the text before the version separator (`@` or whitespace).
/// A leading scope `@` is kept: `@angular/core@12.0.0` -> `@angular/core`.
/// Returns an empty string when no name is present.
pub fn package_name(state: &str) -> String {
    let trimmed = state.trim();
    let (scope, rest) = match trimmed.strip_prefix('@') {
        Some(stripped) => ("@", stripped),
        None => ("", trimmed),
    };

    let end = rest
        .find(|c: char| c == '@' || c.is_whitespace())
        .unwrap_or(rest.len());
    let name = &rest[..end];

    if name.is_empty() {
        String::new()
    } else {
        format!("{}{}", scope, name)
    }
}

/// @acp:summary "Table of related package pairs"
#[derive(Debug, Clone)]
pub struct RelatedPackages {
    pairs: Vec<(String, String)>,
}

impl Default for RelatedPackages {
    fn default() -> Self {
        Self::builtin()
    }
}

impl RelatedPackages {
    /// Built-in co-evolving pairs
    pub fn builtin() -> Self {
        Self {
            pairs: BUILTIN_RELATED
                .iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect(),
        }
    }

    /// Add extra pairs (e.g. from configuration)
    pub fn with_pairs<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = [String; 2]>,
    {
        for [a, b] in pairs {
            self.pairs.push((a.trim().to_lowercase(), b.trim().to_lowercase()));
        }
        self
    }

    /// True if two lowercased names are a known pair or one contains the other
    pub fn are_related(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }

        let known = self
            .pairs
            .iter()
            .any(|(x, y)| (x == a && y == b) || (x == b && y == a));

        known || a.contains(b) || b.contains(a)
    }
}
