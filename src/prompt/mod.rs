use crate::wire::{ChatMessage, GenerationRequest};

pub const SYSTEM_PERSONA: &str = "You are a digital marketing specialist with a focus on SEO and persuasive writing. Always respond in the language specified in the prompt.";

pub const KEYWORDS_LABEL: &str = "Keywords that should be present in this text (for SEO): ";

fn cta_clause(include: bool) -> &'static str {
    if include {
        "Include a clear call to action."
    } else {
        "Do not include a call to action."
    }
}

fn hashtags_clause(include: bool) -> &'static str {
    if include {
        "Return relevant hashtags at the end of the text."
    } else {
        "Do not include hashtags."
    }
}

/// The user-turn instruction for one request. Pure: same request, same string.
pub fn build_prompt(req: &GenerationRequest) -> String {
    let mut lines = vec![
        format!("Write an SEO-optimized text about the topic '{}'.", req.topic),
        "Return only the final text in your response and do not include it in quotation marks.".to_string(),
        format!("- Where it will be published: {}.", req.platform),
        format!("- Tone: {}.", req.tone),
        format!("- Target audience: {}.", req.audience),
        format!("- Length: {}.", req.length),
        format!("- {}", cta_clause(req.include_cta)),
        format!("- {}", hashtags_clause(req.include_hashtags)),
    ];

    if !req.keywords.is_empty() {
        lines.push(format!("- {KEYWORDS_LABEL}{}", req.keywords));
    }

    lines.push("- Create an additional paragraph showing the response in a valid, structured JSON object.".to_string());
    lines.push("- The JSON must be properly formatted with indentation (pretty-printed).".to_string());
    lines.push(format!(
        "- The response must be entirely in {}, including the text, hashtags, and JSON keys/values.",
        req.language
    ));

    lines.join("\n")
}

/// Persona as the system turn, the built prompt as the user turn.
pub fn messages(prompt: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PERSONA), ChatMessage::user(prompt)]
}
