//! Prompt templates for grounded answer generation

/// Context section used when retrieval found nothing; the model never sees
/// an unexplained empty context block.
const EMPTY_CONTEXT: &str = "No relevant context found.";

/// Prompt builder for RAG queries
///
/// Pure string assembly: deterministic given its inputs, no I/O and no
/// failure mode.
pub struct PromptBuilder;

impl PromptBuilder {
    /// Render retrieved passages as numbered context chunks, in rank order.
    pub fn build_context(passages: &[String]) -> String {
        if passages.is_empty() {
            return EMPTY_CONTEXT.to_string();
        }

        let mut context = String::new();
        for (i, passage) in passages.iter().enumerate() {
            context.push_str(&format!("--- Context Chunk {} ---\n{}\n\n", i + 1, passage));
        }
        context
    }

    /// Build the full prompt for a Llama-3-style instruct model.
    ///
    /// The instruction wording is fixed on purpose: consistent model
    /// behaviour depends on a stable template.
    pub fn build_prompt(question: &str, passages: &[String]) -> String {
        let context = Self::build_context(passages);
        format!(
            r#"<|begin_of_text|><|start_header_id|>system<|end_header_id|>
Use the following pieces of context to answer the question at the end.
If you don't know the answer, just say that you don't know, don't try to make up an answer.
Context:
{context}
<|eot_id|><|start_header_id|>user<|end_header_id|>
Question:
{question}
<|eot_id|><|start_header_id|>assistant<|end_header_id|>
"#,
            context = context,
            question = question
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_passages_use_sentinel() {
        let prompt = PromptBuilder::build_prompt("What is Rust?", &[]);
        assert!(prompt.contains("No relevant context found."));
        assert!(!prompt.contains("--- Context Chunk"));
    }

    #[test]
    fn test_passages_are_numbered_in_order() {
        let passages = vec![
            "Movie A is sci-fi.".to_string(),
            "Movie B is sci-fi.".to_string(),
        ];
        let prompt = PromptBuilder::build_prompt("Tell me about science fiction movies", &passages);

        assert!(prompt.contains("--- Context Chunk 1 ---\nMovie A is sci-fi.\n\n"));
        assert!(prompt.contains("--- Context Chunk 2 ---\nMovie B is sci-fi.\n\n"));
        assert_eq!(prompt.matches("--- Context Chunk").count(), 2);

        let first = prompt.find("Movie A").unwrap();
        let second = prompt.find("Movie B").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_prompt_embeds_the_question() {
        let prompt = PromptBuilder::build_prompt("Why is the sky blue?", &[]);
        assert!(prompt.contains("Question:\nWhy is the sky blue?"));
    }

    #[test]
    fn test_prompt_carries_chat_markers() {
        let prompt = PromptBuilder::build_prompt("q", &[]);
        assert!(prompt.starts_with("<|begin_of_text|>"));
        assert!(prompt.ends_with("<|start_header_id|>assistant<|end_header_id|>\n"));
        assert!(prompt.contains("don't try to make up an answer"));
    }

    #[test]
    fn test_build_is_deterministic() {
        let passages = vec!["a chunk".to_string()];
        let one = PromptBuilder::build_prompt("q", &passages);
        let two = PromptBuilder::build_prompt("q", &passages);
        assert_eq!(one, two);
    }

    #[test]
    fn test_duplicate_passages_render_twice() {
        let passages = vec!["same".to_string(), "same".to_string()];
        let context = PromptBuilder::build_context(&passages);
        assert!(context.contains("--- Context Chunk 1 ---\nsame"));
        assert!(context.contains("--- Context Chunk 2 ---\nsame"));
    }
}
