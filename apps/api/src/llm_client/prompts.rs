// Shared prompt constants.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// System prompt for free-text resume writing.
pub const RESUME_WRITER_SYSTEM: &str = "You are an experienced resume writer. \
    Respond with the requested text only: no preamble, no quotes, no markdown.";

/// Guards against invented facts in generated resume text.
pub const NO_INVENTION_INSTRUCTION: &str = "\
    Use only facts present in the input. Do NOT invent employers, dates, metrics or titles.";
