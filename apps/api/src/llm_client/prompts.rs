// Shared prompt fragments.
// Each component that calls the generator defines its own prompts.rs alongside it;
// this file holds only the pieces they have in common.

/// Appended to prompts whose reply must be a bare JSON object.
pub const JSON_ONLY_INSTRUCTION: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Appended to prompts whose reply is shown to a person as plain text.
pub const PLAIN_TEXT_INSTRUCTION: &str = "Reply in plain natural language. \
    Short bullet points starting with '- ' are allowed. \
    Do NOT use markdown headings, JSON, or code fences.";
