use crate::domain::content::PROFILE;

/// What a palette entry does once invoked. The palette only describes the
/// effect; the runtime carries it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Hand a literal path to the router.
    Navigate(&'static str),
    OpenUrl(&'static str),
    CopyToClipboard {
        text: &'static str,
        acknowledgment: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteAction {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
    /// Display-only hint, not bound to a key.
    pub shortcut: Option<char>,
    pub effect: Effect,
}

/// The full catalog, navigation first, then external links, then utilities.
#[must_use]
pub fn registry() -> Vec<PaletteAction> {
    vec![
        PaletteAction {
            id: "home",
            label: "Go to Home",
            icon: Some("⌂"),
            shortcut: Some('H'),
            effect: Effect::Navigate("/"),
        },
        PaletteAction {
            id: "about",
            label: "Go to About",
            icon: Some("☺"),
            shortcut: Some('A'),
            effect: Effect::Navigate("/about"),
        },
        PaletteAction {
            id: "projects",
            label: "View Projects",
            icon: Some("❮❯"),
            shortcut: Some('P'),
            effect: Effect::Navigate("/projects"),
        },
        PaletteAction {
            id: "contact",
            label: "Contact Me",
            icon: Some("✉"),
            shortcut: Some('C'),
            effect: Effect::Navigate("/contact"),
        },
        PaletteAction {
            id: "github",
            label: "Visit GitHub",
            icon: Some("⎇"),
            shortcut: None,
            effect: Effect::OpenUrl("https://github.com"),
        },
        PaletteAction {
            id: "linkedin",
            label: "Visit LinkedIn",
            icon: Some("in"),
            shortcut: None,
            effect: Effect::OpenUrl("https://linkedin.com"),
        },
        PaletteAction {
            id: "copy",
            label: "Copy Email",
            icon: Some("⧉"),
            shortcut: None,
            effect: Effect::CopyToClipboard {
                text: PROFILE.email,
                acknowledgment: "Email copied to clipboard!",
            },
        },
    ]
}

/// Indices of the actions whose label contains `query`, ignoring case.
/// Registry order is preserved and the empty query matches everything.
#[must_use]
pub fn filter_actions(actions: &[PaletteAction], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..actions.len()).collect();
    }

    let query_lower = query.to_lowercase();
    actions
        .iter()
        .enumerate()
        .filter(|(_, action)| action.label.to_lowercase().contains(&query_lower))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};

    fn labels(actions: &[PaletteAction], matches: &[usize]) -> Vec<&'static str> {
        matches.iter().map(|&i| actions[i].label).collect()
    }

    #[test]
    fn test_registry_order_and_ids() {
        let actions = registry();
        let ids: Vec<_> = actions.iter().map(|a| a.id).collect();
        assert_eq!(
            ids,
            vec!["home", "about", "projects", "contact", "github", "linkedin", "copy"]
        );

        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_empty_query_returns_everything() {
        let actions = registry();
        assert_eq!(filter_actions(&actions, ""), (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_go_matches_navigation_only() {
        let actions = registry();
        let matches = filter_actions(&actions, "go");
        assert_eq!(labels(&actions, &matches), vec!["Go to Home", "Go to About"]);
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let actions = registry();
        let matches = filter_actions(&actions, "VISIT");
        assert_eq!(labels(&actions, &matches), vec!["Visit GitHub", "Visit LinkedIn"]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let actions = registry();
        assert!(filter_actions(&actions, "zzz").is_empty());
    }

    #[test]
    fn test_filter_is_ordered_subsequence() {
        let actions = registry();
        let alphabet: Vec<char> = "abcdeghiklmnoprstuvy ".chars().collect();
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);

        for _ in 0..500 {
            let len = rng.gen_range(0..4);
            let query: String = (0..len)
                .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
                .collect();
            let matches = filter_actions(&actions, &query);

            assert!(matches.windows(2).all(|w| w[0] < w[1]), "query {query:?}");
            for &i in &matches {
                assert!(actions[i].label.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }
}
