use crate::llm_client::prompts::NO_INVENTION_INSTRUCTION;

pub fn improve_prompt(text: &str, context: &str) -> String {
    format!(
        "Improve the following professional text for a resume. Make it more impactful, \
         concise, and focused on accomplishments. Keep one line per bullet if the input has \
         several lines.\n{NO_INVENTION_INSTRUCTION}\n\nContext: {context}\nText to improve:\n\"\"\"\n{text}\n\"\"\""
    )
}

pub fn summary_prompt(details: &str) -> String {
    format!(
        "Based on the following resume details, write a compelling 2-3 sentence professional \
         summary for a CV.\n{NO_INVENTION_INSTRUCTION}\n\nDetails: {details}"
    )
}

pub fn skills_prompt(experience_text: &str) -> String {
    format!(
        "Given these professional experiences: {experience_text}\n\nSuggest a list of 5-8 highly \
         relevant professional skills. Respond with keywords only, comma separated."
    )
}

pub fn parse_profile_prompt(raw_text: &str) -> String {
    format!(
        r#"You are an expert resume parser. Extract information from this profile text.

Return a JSON object with these optional keys. Omit a key entirely when the text says nothing about it.
{{
  "personal": {{ "fullName": string, "email": string, "phone": string, "location": string, "website": string, "summary": string }},
  "experiences": [{{ "company": string, "position": string, "startDate": "YYYY-MM", "endDate": "YYYY-MM or Present", "description": string, "current": boolean }}],
  "education": [{{ "institution": string, "degree": string, "field": string, "gradDate": "YYYY-MM" }}],
  "skills": [{{ "name": string, "level": "Beginner" | "Intermediate" | "Expert" }}],
  "languages": [{{ "name": string, "proficiency": "Native" | "Fluent" | "Professional" | "Intermediate" | "Basic" }}],
  "projects": [{{ "title": string, "description": string, "link": string }}]
}}

Input text:
"""
{raw_text}
""""#
    )
}
