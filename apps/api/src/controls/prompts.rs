// Prompt constants for control derivation.
// The JSON-only rule is appended from llm_client::prompts at request time.

/// System turn for control derivation. Fixes the reply contract.
pub const CONTROLS_SYSTEM: &str = r#"You turn a user's request into adjustable UI controls.

Return a single JSON object with this EXACT shape:
{
  "controls": [
    { "label": "Spice Level", "type": "slider", "min": 0, "max": 10, "step": 1, "default": 5, "unit": "" },
    { "label": "Style", "type": "options", "options": ["Hyderabadi", "Lucknowi"], "default": "Hyderabadi" }
  ]
}

Rules:
- Between 3 and 6 controls in total.
- Every label is short, human-readable, and unique within the response.
- Sliders need numeric "min" <= "default" <= "max"; "step" and "unit" are optional.
- Options need a non-empty "options" list; "default" is one of those strings or its 0-based index.
- Pick controls that genuinely change the result for this request."#;
