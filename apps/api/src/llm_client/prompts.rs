// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting fragments only.

/// Appended to every structured-output contract. Gemini's JSON mode usually
/// complies on its own; this covers the cases where it does not.
pub const JSON_ONLY_INSTRUCTION: &str = "\
    You MUST respond with a single valid JSON object only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences around the JSON. \
    Escape newlines inside string values as \\n.";

/// Truthfulness rule shared by every generation prompt.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: The reference resume is the single source of truth. \
    Do NOT add skills, tools, employers, titles, dates, degrees, or metrics \
    that cannot be reasonably inferred from it. If the job description asks \
    for something the reference does not support, leave it out rather than invent it.";
