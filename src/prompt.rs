//! Prompt template for the chat-model classification path.

use crate::taxonomy::taxonomy_label_list;

/// Render the fixed classification prompt for one comment.
///
/// The taxonomy is embedded comma-joined in stable order, and the comment is
/// embedded verbatim. The model is asked for a single JSON object; the decode
/// ladder tolerates prose around it and mild syntax damage.
pub fn classification_prompt(comment: &str) -> String {
    format!(
        "You are a comment moderation assistant for an online community.\n\
         Classify the comment below into one or more of these categories:\n\
         {taxonomy}\n\
         \n\
         Respond with a single JSON object and nothing else, with these keys:\n\
         - \"categories\": array of category names from the list above\n\
         - \"summary\": one short sentence describing the comment's tone\n\
         - \"suggested_response\": (only if the comment is harmful) a polite \
         rewording the author could post instead\n\
         \n\
         Comment:\n\
         {comment}",
        taxonomy = taxonomy_label_list(),
        comment = comment,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_taxonomy_and_comment() {
        let prompt = classification_prompt("you are all idiots");
        assert!(prompt.contains("Harassment, Hate speech"));
        assert!(prompt.contains("Positive feedback"));
        assert!(prompt.contains("you are all idiots"));
    }

    #[test]
    fn prompt_names_the_reply_keys() {
        let prompt = classification_prompt("hi");
        assert!(prompt.contains("\"categories\""));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("\"suggested_response\""));
    }

    #[test]
    fn comment_is_embedded_verbatim() {
        let comment = "line one\nline two {with braces}";
        let prompt = classification_prompt(comment);
        assert!(prompt.contains(comment));
    }
}
