//! Skill normalization — maps the many spellings of a skill to one canonical
//! form so set intersection compares meaning rather than formatting.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use strsim::damerau_levenshtein;

/// Alias → canonical skill mapping (O(1) lookup).
static ALIAS_TO_CANONICAL: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    let aliases: &[(&str, &[&str])] = &[
        // JavaScript ecosystem
        (
            "javascript",
            &["js", "javascript", "java script", "ecmascript", "es6", "es2015"],
        ),
        ("typescript", &["ts", "typescript", "type script"]),
        ("nodejs", &["node.js", "node js", "nodejs", "node"]),
        ("react", &["reactjs", "react.js", "react js", "react"]),
        ("vue", &["vue.js", "vuejs", "vue js", "vue", "vue3"]),
        ("angular", &["angularjs", "angular.js", "angular"]),
        ("nextjs", &["next.js", "nextjs", "next js"]),
        // Backend frameworks
        ("express", &["express.js", "expressjs", "express js", "express"]),
        ("django", &["django rest framework", "drf", "django"]),
        ("flask", &["python flask", "flask"]),
        ("spring", &["spring boot", "springboot", "spring framework", "spring"]),
        ("rails", &["ruby on rails", "ror", "rails"]),
        // Databases
        ("postgresql", &["postgres", "pg", "postgresql", "postgre sql"]),
        ("mysql", &["my sql", "mysql", "mariadb"]),
        ("mongodb", &["mongo", "mongo db", "mongodb"]),
        ("redis", &["redis cache", "redis"]),
        ("sqlite", &["sqlite3", "sql lite", "sqlite"]),
        ("elasticsearch", &["elastic search", "elasticsearch"]),
        // Cloud platforms
        ("aws", &["amazon web services", "amazon aws", "aws cloud", "aws"]),
        ("gcp", &["google cloud platform", "google cloud", "gcp"]),
        ("azure", &["microsoft azure", "ms azure", "azure"]),
        ("firebase", &["google firebase", "firebase"]),
        ("supabase", &["supabase"]),
        // Programming languages
        ("python", &["python3", "python 3", "py", "python"]),
        ("java", &["java8", "java11", "java17", "openjdk", "java"]),
        ("csharp", &["c#", "c sharp", "csharp", ".net", "dotnet"]),
        ("cplusplus", &["c++", "cpp", "c plus plus"]),
        ("golang", &["go", "golang", "go lang"]),
        ("rust", &["rust lang", "rust language", "rust"]),
        ("ruby", &["ruby lang", "ruby"]),
        ("php", &["php7", "php8", "php"]),
        ("swift", &["ios swift", "swift"]),
        ("kotlin", &["kotlin jvm", "kotlin"]),
        // DevOps and tools
        ("docker", &["docker container", "containerization", "docker"]),
        ("kubernetes", &["k8s", "kube", "kubernetes"]),
        ("terraform", &["infrastructure as code", "iac", "terraform"]),
        ("git", &["git scm", "github", "gitlab", "git"]),
        ("jenkins", &["jenkins ci", "jenkins"]),
        // APIs and protocols
        ("graphql", &["graph ql", "graphql"]),
        ("rest", &["rest api", "restful", "restful api", "rest"]),
        ("grpc", &["g rpc", "grpc"]),
        // Data
        ("sql", &["structured query language", "sql"]),
        ("pandas", &["python pandas", "pandas"]),
        ("spark", &["apache spark", "spark"]),
        ("kafka", &["apache kafka", "kafka"]),
    ];

    let mut map = HashMap::new();
    for (canonical, alias_list) in aliases {
        map.insert(*canonical, *canonical);
        for alias in *alias_list {
            map.insert(*alias, *canonical);
        }
    }
    map
});

/// Second lookup keyed by separator-stripped form, to absorb punctuation and
/// spacing variants ("Node JS", "node-js", "node.js" all collapse).
static COMPACT_ALIAS_TO_CANONICAL: LazyLock<HashMap<String, &'static str>> = LazyLock::new(|| {
    let mut map = HashMap::new();
    for (alias, canonical) in ALIAS_TO_CANONICAL.iter() {
        map.entry(compact_key(alias)).or_insert(*canonical);
    }
    map
});

fn lower_trim(input: &str) -> String {
    input.trim().to_lowercase()
}

fn compact_key(input: &str) -> String {
    input
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '.' | '-' | '_' | '/' | ','))
        .collect()
}

fn match_canonical_token(token: &str) -> Option<String> {
    if token.is_empty() {
        return None;
    }

    if let Some(canonical) = ALIAS_TO_CANONICAL.get(token) {
        return Some((*canonical).to_string());
    }

    let compact = compact_key(token);
    if let Some(canonical) = COMPACT_ALIAS_TO_CANONICAL.get(&compact) {
        return Some((*canonical).to_string());
    }

    fuzzy_match_canonical(&compact)
}

/// Damerau-Levenshtein fallback for typos ("javascirpt"). Short tokens are
/// excluded: fuzzing "java" against "javaa" or "go" against anything creates
/// more false positives than it fixes.
fn fuzzy_match_canonical(compact: &str) -> Option<String> {
    if compact.len() < 5 {
        return None;
    }

    let mut best: Option<(&str, usize)> = None;
    for (alias, canonical) in COMPACT_ALIAS_TO_CANONICAL.iter() {
        if alias.len() < 5 || canonical.len() < 5 {
            continue;
        }

        let distance = damerau_levenshtein(compact, alias);
        if distance == 0 {
            return Some((*canonical).to_string());
        }

        let len = compact.len().max(alias.len());
        let acceptable = distance == 1 || (len >= 8 && distance == 2);
        if !acceptable {
            continue;
        }

        match best {
            None => best = Some((*canonical, distance)),
            Some((_, best_dist)) if distance < best_dist => best = Some((*canonical, distance)),
            _ => {}
        }
    }

    best.map(|(canonical, _)| canonical.to_string())
}

/// Normalizes one skill string to its canonical form. Unknown skills
/// lowercase-trim to themselves.
pub fn normalize_skill(skill: &str) -> String {
    let normalized = lower_trim(skill);
    match match_canonical_token(&normalized) {
        Some(canonical) => canonical,
        None => normalized,
    }
}

/// Normalizes a skill list into a canonical set, dropping blank entries.
pub fn normalize_skill_set(skills: &[String]) -> HashSet<String> {
    skills
        .iter()
        .filter(|s| !s.trim().is_empty())
        .map(|s| normalize_skill(s))
        .collect()
}
