use once_cell::sync::Lazy;

/// Canonical skills recognised by the default extractor, in reporting order.
const STANDARD_SKILLS: [&str; 45] = [
    "JavaScript",
    "TypeScript",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Python",
    "Java",
    "C#",
    "Ruby",
    "PHP",
    "Go",
    "Rust",
    "Swift",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "CI/CD",
    "Git",
    "HTML",
    "CSS",
    "SASS",
    "Redux",
    "REST API",
    "GraphQL",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Data Analysis",
    "R",
    "Tableau",
    "Power BI",
    "Excel",
    "Leadership",
    "Project Management",
    "Scrum",
    "Agile",
    "Communication",
    "Problem Solving",
];

static STANDARD_VOCABULARY: Lazy<SkillVocabulary> =
    Lazy::new(|| SkillVocabulary::new(STANDARD_SKILLS));

/// Ordered, duplicate-free list of canonical skill names.
///
/// Entries keep their case-folded form alongside so extraction does not re-fold the
/// vocabulary on every call. The value is immutable once built and is shared read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: Vec<String>,
    folded: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary, dropping blank entries and repeated names (first one wins).
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.into();
            if skill.trim().is_empty() || unique.contains(&skill) {
                continue;
            }
            unique.push(skill);
        }

        let folded = unique.iter().map(|skill| skill.to_lowercase()).collect();
        Self {
            skills: unique,
            folded,
        }
    }

    /// The built-in catalogue used across the service.
    pub fn standard() -> &'static SkillVocabulary {
        &STANDARD_VOCABULARY
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.skills.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.iter().any(|entry| entry == skill)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.skills
            .iter()
            .map(String::as_str)
            .zip(self.folded.iter().map(String::as_str))
    }
}
