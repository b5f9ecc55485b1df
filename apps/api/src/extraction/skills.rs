//! Fixed skills dictionary used by the Smart-Paste parser.
//!
//! Single-word terms match on word boundaries; multi-word terms match as
//! case-insensitive substrings. Output always follows dictionary order, not the
//! order terms appear in the pasted text.

use once_cell::sync::Lazy;
use regex::Regex;

/// The recognized skill vocabulary: languages, frameworks, data stores, cloud
/// platforms, ML stack, and delivery methodologies.
pub const SKILLS_DICTIONARY: &[&str] = &[
    // Languages
    "Java",
    "Python",
    "JavaScript",
    "TypeScript",
    "C#",
    "C++",
    "Golang",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "SQL",
    "HTML",
    "CSS",
    // Frameworks and runtimes
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Spring Boot",
    "Django",
    "Flask",
    ".NET",
    "Ruby on Rails",
    "Laravel",
    "GraphQL",
    "REST API",
    // Cloud and infrastructure
    "AWS",
    "Azure",
    "GCP",
    "Google Cloud",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Ansible",
    "Jenkins",
    "CI/CD",
    // Data stores and streaming
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "Kafka",
    "RabbitMQ",
    "Spark",
    "Hadoop",
    "Snowflake",
    // ML and analytics
    "Machine Learning",
    "Deep Learning",
    "Data Science",
    "NLP",
    "Computer Vision",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    // Methodology and tooling
    "Agile",
    "Scrum",
    "Kanban",
    "DevOps",
    "Microservices",
    "Unit Testing",
    "TDD",
    "Selenium",
    "Cypress",
    "JIRA",
    "Git",
    "Linux",
    "Bash",
    "Power BI",
];

enum Matcher {
    /// Word-boundary regex, used for single-word terms.
    Word(Regex),
    /// Lowercased needle for substring search, used for multi-word terms.
    Substring(String),
}

static MATCHERS: Lazy<Vec<Matcher>> = Lazy::new(|| {
    SKILLS_DICTIONARY
        .iter()
        .map(|term| {
            if term.contains(' ') {
                Matcher::Substring(term.to_lowercase())
            } else {
                Matcher::Word(word_pattern(term))
            }
        })
        .collect()
});

/// Builds a case-insensitive word-boundary pattern for a single-word term.
/// Boundaries are only anchored against alphanumeric edges, so symbol-bearing
/// terms like `C#`, `C++`, and `.NET` still match.
fn word_pattern(term: &str) -> Regex {
    let escaped = regex::escape(term);
    let lead = if term.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    let trail = if term.ends_with(|c: char| c.is_ascii_alphanumeric()) {
        r"\b"
    } else {
        ""
    };
    Regex::new(&format!("(?i){lead}{escaped}{trail}")).expect("skill term pattern must compile")
}

/// Returns every dictionary term found in `text`, in dictionary order.
pub fn match_skills(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    SKILLS_DICTIONARY
        .iter()
        .zip(MATCHERS.iter())
        .filter(|(_, matcher)| match matcher {
            Matcher::Word(re) => re.is_match(text),
            Matcher::Substring(needle) => lowered.contains(needle),
        })
        .map(|(term, _)| term.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_results_follow_dictionary_order() {
        // Input order is Kubernetes-then-Java; dictionary order is the reverse.
        let skills = match_skills("We need Kubernetes and Java expertise.");
        assert_eq!(skills, vec!["Java".to_string(), "Kubernetes".to_string()]);
    }

    #[test]
    fn test_word_boundary_prevents_partial_hits() {
        // "Javanese" must not register as Java.
        let skills = match_skills("Fluent in Javanese required.");
        assert!(skills.is_empty());
    }

    #[test]
    fn test_symbol_terms_match() {
        let skills = match_skills("Stack: C#, C++ and .NET services.");
        assert_eq!(
            skills,
            vec!["C#".to_string(), "C++".to_string(), ".NET".to_string()]
        );
    }

    #[test]
    fn test_multi_word_terms_match_as_substring() {
        let skills = match_skills("background in machine learning pipelines");
        assert_eq!(skills, vec!["Machine Learning".to_string()]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let skills = match_skills("POSTGRESQL and kafka");
        assert_eq!(
            skills,
            vec!["PostgreSQL".to_string(), "Kafka".to_string()]
        );
    }

    #[test]
    fn test_no_terms_yields_empty_vec() {
        assert!(match_skills("We are hiring a florist.").is_empty());
    }
}
