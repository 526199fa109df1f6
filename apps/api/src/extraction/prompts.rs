// Extraction LLM prompt templates.

pub const EXTRACT_PROMPT_TEMPLATE: &str = r#"Extract structured candidate data from the resume below.

RESUME:
{resume_text}

OUTPUT SCHEMA (return exactly this JSON object):
{
  "name": "string",
  "email": "string" | null,
  "phone": "string" | null,
  "skills": ["string"],
  "experience_years": number,
  "education": "MBA" | "B.Tech" | "M.Tech" | "Bachelor's Degree" | null,
  "summary": "string",
  "career_intent": "Full-Stack Development" | "Data Science & AI" | "Cloud & DevOps" | "Frontend Development" | "Backend Development" | "Mobile Development" | "Software Engineering"
}

RULES:
1. Use null for contact details that are not present. Never invent them.
2. List at most 10 skills, most relevant first, each stated or clearly implied by the resume.
3. experience_years is the total years of professional experience as an integer, 0 if unknown.
4. summary is two sentences at most, written in the third person.
5. Return ONLY the JSON object — nothing else, no code fences."#;
