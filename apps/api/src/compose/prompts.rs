// Prompt constants for the final composition step.
// The plain-text rule is appended from llm_client::prompts at request time.

/// System turn for composition.
pub const COMPOSE_SYSTEM: &str = "You are a helpful and concise assistant. \
    You receive a user's request together with the modifiers they picked. \
    Answer the request clearly, or refine it into a ready-to-use prompt, \
    honoring every modifier. \
    Do NOT mention sliders, options, or any other UI terms.";

/// User turn template. Replace `{prompt}`.
pub const COMPOSE_PROMPT_TEMPLATE: &str = "Prompt: \"{prompt}\"";

/// Header placed above the rendered selections when there are any.
pub const MODIFIERS_HEADER: &str = "Use these modifiers:";
