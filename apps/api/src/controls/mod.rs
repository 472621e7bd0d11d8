// Control Deriver: prompt → strict ControlSet, default set on any failure.
// All generator calls go through llm_client; no direct HTTP here.

pub mod deriver;
pub mod handlers;
pub mod prompts;
pub mod validation;
