//! Curated word lists for resume matching.
//!
//! Technical and soft skills, ATS section headers, action verbs, blocked
//! glyphs, stop words, skill categories, and recommendation priorities.
//! Ordered lists are slices because several checks depend on position
//! (e.g. only the first 15 section headers count toward the header check).

use std::collections::HashSet;
use std::sync::LazyLock;

/// Technical skills, grouped loosely by area.
///
/// A few entries repeat across groups (`github`, `gitlab`); the
/// [`Vocabulary`](crate::vocabulary::Vocabulary) builder keeps the first.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "javascript", "python", "java", "c++", "c#", "ruby", "php", "swift", "kotlin",
    "go", "rust", "typescript", "scala", "perl", "r", "matlab", "dart",
    // Frontend
    "react", "reactjs", "angular", "vue", "vuejs", "svelte", "nextjs", "next.js",
    "nuxt", "gatsby", "html", "html5", "css", "css3", "sass", "scss", "less",
    "tailwind", "tailwindcss", "bootstrap", "materialui", "mui", "chakraui",
    "jquery", "redux", "mobx", "recoil", "webpack", "vite", "parcel",
    // Backend
    "nodejs", "node.js", "express", "expressjs", "nestjs", "fastify", "koa",
    "django", "flask", "fastapi", "spring", "springboot", "laravel", "symfony",
    "rails", "rubyonrails", "aspnet", "asp.net", "graphql", "rest", "restapi",
    "grpc", "websocket", "microservices",
    // Databases
    "mongodb", "mysql", "postgresql", "postgres", "sqlite", "redis", "cassandra",
    "dynamodb", "couchdb", "neo4j", "elasticsearch", "firebase", "supabase",
    "oracle", "sqlserver", "mariadb", "prisma", "sequelize", "mongoose",
    "typeorm", "knex",
    // Cloud & DevOps
    "aws", "azure", "gcp", "googlecloud", "docker", "kubernetes", "k8s",
    "jenkins", "gitlab", "github", "circleci", "travis", "terraform", "ansible",
    "chef", "puppet", "vagrant", "nginx", "apache", "linux", "ubuntu", "centos",
    "debian", "bash", "shell", "powershell", "cicd", "devops",
    // Mobile
    "android", "ios", "reactnative", "flutter", "xamarin", "ionic", "cordova",
    "nativescript", "swiftui", "jetpackcompose",
    // Data science & AI
    "machinelearning", "deeplearning", "tensorflow", "pytorch", "keras",
    "scikitlearn", "pandas", "numpy", "opencv", "nlp", "computervision",
    "dataanalysis", "datascience", "ai", "artificialintelligence", "jupyter",
    // Testing
    "jest", "mocha", "chai", "cypress", "selenium", "puppeteer", "playwright",
    "junit", "pytest", "testinglibrary", "unittest", "tdd", "bdd",
    // Version control
    "git", "github", "gitlab", "bitbucket", "mercurial", "svn",
    // Other tools
    "figma", "adobexd", "sketch", "photoshop", "illustrator", "postman",
    "insomnia", "jira", "confluence", "trello", "slack", "notion", "vscode",
    "intellij", "eclipse", "vim", "emacs",
    // Process
    "agile", "scrum", "kanban", "leadership", "communication", "teamwork",
    "problemsolving", "criticalthinking", "projectmanagement",
];

/// Spelling variants of one technical skill, as `(variant, canonical)`.
///
/// Extraction reports the canonical name so that `Node.js` in a resume
/// matches `NodeJS` in a job description.
pub const SKILL_ALIASES: &[(&str, &str)] = &[
    ("node.js", "nodejs"),
    ("next.js", "nextjs"),
    ("asp.net", "aspnet"),
    ("reactjs", "react"),
    ("vuejs", "vue"),
    ("expressjs", "express"),
    ("tailwindcss", "tailwind"),
    ("postgres", "postgresql"),
    ("k8s", "kubernetes"),
];

/// Soft skills.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "collaboration", "problemsolving",
    "criticalthinking", "analytical", "creativity", "adaptability", "timemanagement",
    "organization", "attention", "detailoriented", "multitasking", "decisionmaking",
    "conflictresolution", "negotiation", "presentation", "interpersonal",
    "emotionalintelligence", "mentoring", "coaching", "strategic", "innovative",
];

/// Section headers that ATS parsers recognize.
///
/// Only the first [`HEADER_CHECK_WINDOW`] take part in the header check.
pub const ATS_SECTION_HEADERS: &[&str] = &[
    "experience", "work experience", "professional experience", "employment",
    "education", "academic background", "qualifications",
    "skills", "technical skills", "core competencies", "expertise",
    "projects", "personal projects", "portfolio",
    "certifications", "licenses", "achievements", "awards",
    "summary", "profile", "objective", "about",
];

/// Number of leading section headers consulted by the header check.
pub const HEADER_CHECK_WINDOW: usize = 15;

/// Action verbs recruiters and ATS keyword filters look for.
pub const ACTION_VERBS: &[&str] = &[
    "developed", "designed", "implemented", "created", "built", "led", "managed",
    "improved", "increased", "reduced", "achieved", "delivered", "launched",
    "optimized", "streamlined", "automated", "collaborated", "coordinated",
    "analyzed", "researched", "tested", "debugged", "maintained", "upgraded",
];

/// Decorative glyphs that confuse ATS parsers.
pub const FORBIDDEN_SPECIAL_CHARS: &[&str] = &["\u{2022}", "\u{2192}", "\u{2605}", "\u{25c6}", "\u{25a0}"];

/// High-frequency, low-information words dropped before similarity scoring.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "is", "at", "which", "on", "a", "an", "as", "are", "was", "were",
        "been", "be", "have", "has", "had", "do", "does", "did", "will", "would",
        "could", "should", "may", "might", "must", "can", "of", "for", "to", "in",
        "with", "by", "from", "up", "about", "into", "through", "during", "before",
        "after", "above", "below", "between", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all", "both",
        "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not",
        "only", "own", "same", "so", "than", "too", "very", "and", "but", "or",
        "if", "because", "while", "this", "that", "these", "those", "i", "you",
        "he", "she", "it", "we", "they", "them", "their", "what", "who",
    ]
    .into_iter()
    .collect()
});

/// Programming languages. The `soft` category is backed by [`SOFT_SKILLS`].
pub const CATEGORY_LANGUAGES: &[&str] = &[
    "javascript", "python", "java", "c++", "c#", "ruby", "php", "swift", "kotlin", "go", "rust",
    "typescript",
];

/// Frontend frameworks and tooling.
pub const CATEGORY_FRONTEND: &[&str] = &[
    "react", "angular", "vue", "html", "css", "sass", "tailwind", "bootstrap", "nextjs", "redux",
    "webpack",
];

/// Backend frameworks and API styles.
pub const CATEGORY_BACKEND: &[&str] = &[
    "nodejs", "express", "django", "flask", "spring", "laravel", "rails", "graphql", "rest",
];

/// Data stores.
pub const CATEGORY_DATABASES: &[&str] = &[
    "mongodb", "mysql", "postgresql", "redis", "sqlite", "cassandra", "dynamodb", "firebase",
];

/// Cloud platforms and infrastructure tooling.
pub const CATEGORY_CLOUD: &[&str] = &[
    "aws", "azure", "gcp", "docker", "kubernetes", "jenkins", "terraform", "ansible",
];

/// General developer tools.
pub const CATEGORY_TOOLS: &[&str] = &[
    "git", "github", "jira", "figma", "postman", "vscode", "linux", "bash",
];

/// Skills in high demand; missing ones are recommended first.
pub static HIGH_PRIORITY_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "javascript", "python", "java", "react", "nodejs", "angular", "vue", "typescript", "aws",
        "docker", "kubernetes", "sql", "mongodb",
    ]
    .into_iter()
    .collect()
});

/// Skills worth picking up but rarely decisive.
pub static MEDIUM_PRIORITY_SKILLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "git", "agile", "scrum", "rest", "graphql", "redis", "jenkins", "terraform", "linux",
        "webpack", "sass", "tailwind",
    ]
    .into_iter()
    .collect()
});

/// Qualifiers that mark expert-level use when adjacent to a skill.
pub const EXPERT_QUALIFIERS: &[&str] = &["expert", "lead", "architect", "senior"];

/// Qualifiers that mark advanced use.
pub const ADVANCED_QUALIFIERS: &[&str] = &["advanced", "experienced", "proficient", "extensive"];

/// Qualifiers that mark intermediate use.
pub const INTERMEDIATE_QUALIFIERS: &[&str] = &["intermediate", "working knowledge", "familiar"];

/// General advice for getting a resume through an ATS.
pub const ATS_TIPS: &[&str] = &[
    "Use standard fonts like Arial, Calibri, or Times New Roman",
    "Avoid headers and footers - ATS may not read them",
    "Save your resume as a .docx or .pdf file",
    "Use standard section headings (EXPERIENCE, EDUCATION, SKILLS)",
    "Include keywords from the job description naturally",
    "Quantify achievements with numbers and percentages",
    "Use simple bullet points (\u{2022} or -)",
    "Avoid tables, text boxes, and images",
    "Spell out acronyms at least once (e.g., \"Search Engine Optimization (SEO)\")",
    "Keep formatting simple and consistent",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lowercase(list: &[&str]) {
        for entry in list {
            assert_eq!(*entry, entry.to_lowercase(), "{entry} is not lowercase");
        }
    }

    #[test]
    fn vocabulary_lists_are_lowercase() {
        assert_lowercase(TECHNICAL_SKILLS);
        assert_lowercase(SOFT_SKILLS);
        assert_lowercase(ATS_SECTION_HEADERS);
        assert_lowercase(ACTION_VERBS);
    }

    #[test]
    fn header_window_fits_header_list() {
        assert!(HEADER_CHECK_WINDOW <= ATS_SECTION_HEADERS.len());
    }

    #[test]
    fn action_verbs_unique() {
        let unique: HashSet<_> = ACTION_VERBS.iter().collect();
        assert_eq!(unique.len(), ACTION_VERBS.len());
    }

    #[test]
    fn stop_words_cover_articles() {
        for w in ["the", "a", "an", "and"] {
            assert!(STOP_WORDS.contains(w));
        }
    }
}
