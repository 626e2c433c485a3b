#[must_use]
pub fn get_suggestions(msg: &str) -> Vec<String> {
    let mut suggestions = Vec::new();
    let msg_lower = msg.to_lowercase();

    if msg_lower.contains("your name") {
        suggestions.push("Fill in the \"Your Name\" field".to_string());
    }

    if msg_lower.contains("email") {
        suggestions.push("Use an address like john@example.com".to_string());
    }

    if msg_lower.contains("message") {
        suggestions.push("Tell me a little about your project".to_string());
    }

    if !suggestions.is_empty() {
        suggestions.push("Press Esc, then Tab to reach the field".to_string());
    }

    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::ValidationError;

    #[test]
    fn test_suggestions() {
        let s = get_suggestions(ValidationError::MissingName.message());
        assert!(s.contains(&"Fill in the \"Your Name\" field".to_string()));

        let s = get_suggestions(ValidationError::InvalidEmail.message());
        assert!(s.contains(&"Use an address like john@example.com".to_string()));

        let s = get_suggestions(ValidationError::MissingMessage.message());
        assert!(s.contains(&"Tell me a little about your project".to_string()));

        assert!(get_suggestions("something else").is_empty());
    }
}
