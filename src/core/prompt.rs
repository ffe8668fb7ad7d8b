//! Prompt construction for a conversational turn.
//!
//! A fixed English template embeds two interpolation points: the serialized
//! conversation history and the literal user query. Interpolation happens via
//! `format!`, so there is no template syntax for history or query content to
//! break out of; prompt injection at the model level (hostile instructions
//! inside earlier turns) is out of scope and not defended here.

use crate::core::message::Turn;

/// Serialize the transcript for embedding in the prompt, one `role: content`
/// line per turn, order preserving.
pub fn render_history(history: &[Turn]) -> String {
    let mut rendered = String::new();
    for turn in history {
        rendered.push_str(turn.role.as_str());
        rendered.push_str(": ");
        rendered.push_str(&turn.content);
        rendered.push('\n');
    }
    rendered
}

/// Render the instruction template around the conversation history and the
/// current query.
pub fn build_prompt(history: &[Turn], query: &str) -> String {
    format!(
        "You are an expert AI coding assistant. Provide concise and correct solutions. \
         Always respond in English. \
         Answer the following question considering the history of the conversation:\n\n\
         Chat history:\n{}\n\
         User question: {}",
        render_history(history),
        query
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_rendering_preserves_order_and_roles() {
        let history = [
            Turn::assistant("hello"),
            Turn::user("reverse a list?"),
            Turn::assistant("use .rev()"),
        ];
        assert_eq!(
            render_history(&history),
            "assistant: hello\nuser: reverse a list?\nassistant: use .rev()\n"
        );
    }

    #[test]
    fn prompt_embeds_history_and_query_literally() {
        let history = [Turn::assistant("hi")];
        let prompt = build_prompt(&history, "what is a slice?");

        assert!(prompt.contains("expert AI coding assistant"));
        assert!(prompt.contains("Chat history:\nassistant: hi\n"));
        assert!(prompt.ends_with("User question: what is a slice?"));
    }

    #[test]
    fn braces_in_content_are_not_treated_as_template_syntax() {
        let history = [Turn::user("what does {x:?} print?")];
        let prompt = build_prompt(&history, "and {y}?");

        assert!(prompt.contains("user: what does {x:?} print?"));
        assert!(prompt.ends_with("User question: and {y}?"));
    }

    #[test]
    fn empty_history_renders_an_empty_section() {
        let prompt = build_prompt(&[], "hello");
        assert!(prompt.contains("Chat history:\n\n"));
    }
}
