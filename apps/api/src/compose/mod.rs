// Prompt Composer: prompt + selections → cleaned natural-language output.
// Unlike the deriver, every failure is reported to the caller.

pub mod composer;
pub mod handlers;
pub mod prompts;
