// All LLM prompt constants for the Generation module.
// Reuses cross-cutting fragments from llm_client::prompts.

/// Persona for the general full-stack template.
pub const GENERAL_PERSONA: &str = "You are a senior technical recruiter and ATS optimization expert \
    with extensive experience hiring software engineers (frontend, backend, and full-stack) \
    for product companies and startups.";

/// Persona for the backend-focused template.
pub const BACKEND_PERSONA: &str = "You are a senior technical recruiter and ATS optimization expert \
    who specializes in hiring backend and platform engineers (APIs, distributed systems, \
    databases, cloud infrastructure) for product companies and startups.";

pub const GENERAL_ROLE_FOCUS: &str = "Present the candidate as a well-rounded engineer. \
    Balance frontend and backend work according to what the job description emphasizes.";

pub const BACKEND_ROLE_FOCUS: &str = "Present the candidate as a backend engineer. \
    Lead with server-side work: API design, data modelling, query performance, \
    authentication, deployment, and reliability. Keep frontend work only where it \
    supports a backend story or the job description explicitly asks for it.";

/// Resume generation prompt template.
/// Replace: {persona}, {role_focus}, {no_fabrication_instruction},
///          {json_only_instruction}, {reference_resume}, then {job_description} LAST.
pub const RESUME_PROMPT_TEMPLATE: &str = r###"PERSONA
{persona}

TASK
Generate a highly targeted, ATS-friendly resume that adapts to the job description below, using the candidate's reference resume strictly as source material. Maximize keyword alignment, role relevance, and shortlisting probability while staying fully truthful to the candidate's real experience.

{role_focus}

ADAPTATION RULES
1. Analyze the job description for required skills, preferred skills, responsibilities, and ATS keywords.
2. Reframe, reorder, and optimize the candidate's experience to match the job description. Never fabricate experience.
3. {no_fabrication_instruction}
4. Distinguish hands-on experience from foundational knowledge. A technology the candidate used in production goes in experience bullets; a technology they only know conceptually or studied may appear in skills, labelled as foundational, and never as a claim of delivered work.
5. Remove or de-emphasize skills, responsibilities, and projects that are irrelevant to the job description.
6. Use exact terminology from the job description where it is natural and truthful.
7. Avoid buzzwords, filler text, and generic claims.

RESUME STRUCTURE (for the "resume_markdown" field, in this order)
1. Header: the candidate's name, then one line: Location | Email | Phone | LinkedIn | GitHub
2. Professional Summary: 2-3 lines aligned with the job title and core requirements; include years of experience and primary tech stack
3. Core Skills: categorized (e.g. Backend, Frontend, Databases, DevOps, Tools), ordered by relevance to the job description
4. Professional Experience: Company | Role | Dates, then 4-6 bullets per role focused on the most relevant responsibilities, technologies, and achievements
5. Projects: only if relevant to the job description; project name, then 2-4 bullets on tech stack, architecture, and outcomes
6. Education: Degree | Institution | Year

FORMATTING RULES
- Total length: 1 to 1.5 pages.
- Name as a level-1 heading ("# Name"); every section heading as a level-2 heading in UPPERCASE (e.g. "## PROFESSIONAL SUMMARY").
- Bullets use "- " only. Every bullet starts with a strong action verb and quantifies impact wherever the reference supports a number.
- Bold (**like this**) only the job-description keywords inside bullets and skills; never bold whole sentences.
- Exactly one blank line between sections and after each heading; no blank lines between bullets of the same list.
- ATS-safe only: no tables, columns, icons, emoji, images, horizontal rules, or decorative characters.

VALIDATION SUMMARY (for the "validation_summary" field)
Before answering, check that:
- the resume reads as custom-written for this specific job,
- it would score highly in ATS keyword matching, and
- a recruiter can identify strong role fit within 10 seconds.
Report the result in 3-6 short sentences, naming the strongest matches and any job-description requirements the reference resume could not support.

OUTPUT FORMAT
Return a JSON object with exactly these two string fields and nothing else:
{
  "resume_markdown": "The full resume content in Markdown format...",
  "validation_summary": "The validation summary/report..."
}
{json_only_instruction}

CANDIDATE REFERENCE RESUME (source of truth)
[
{reference_resume}
]

JOB DESCRIPTION
{job_description}
"###;
