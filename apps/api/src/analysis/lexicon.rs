//! Static keyword tables for CV signal detection.
//!
//! Ordering is load-bearing: `SKILL_LEXICON` iteration order determines the
//! order of detected skills everywhere downstream (skills block truncation,
//! ATS keyword selection), so these are ordered slices, never maps.

/// (detection keyword, canonical display name). Keywords are lowercase and
/// matched as case-insensitive substrings of the CV text.
pub static SKILL_LEXICON: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("c++", "C++"),
    ("c#", "C#"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("rust", "Rust"),
    ("swift", "Swift"),
    ("react", "React.js"),
    ("angular", "Angular"),
    ("vue", "Vue.js"),
    ("node", "Node.js"),
    ("express", "Express.js"),
    ("django", "Django"),
    ("flask", "Flask"),
    ("spring", "Spring Boot"),
    ("laravel", "Laravel"),
    ("sql", "SQL"),
    ("mysql", "MySQL"),
    ("postgresql", "PostgreSQL"),
    ("mongodb", "MongoDB"),
    ("redis", "Redis"),
    ("elasticsearch", "Elasticsearch"),
    ("docker", "Docker"),
    ("kubernetes", "Kubernetes"),
    ("jenkins", "Jenkins"),
    ("aws", "AWS"),
    ("azure", "Azure"),
    ("gcp", "Google Cloud"),
    ("terraform", "Terraform"),
    ("ansible", "Ansible"),
    ("git", "Git"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("ci/cd", "CI/CD"),
    ("devops", "DevOps"),
    ("machine learning", "Machine Learning"),
    ("deep learning", "Deep Learning"),
    ("tensorflow", "TensorFlow"),
    ("pytorch", "PyTorch"),
    ("data science", "Data Science"),
    ("big data", "Big Data"),
    ("spark", "Apache Spark"),
    ("hadoop", "Hadoop"),
    ("rest api", "REST API"),
    ("graphql", "GraphQL"),
    ("microservices", "Microservices"),
    ("agile", "Agile"),
    ("scrum", "Scrum"),
    ("kanban", "Kanban"),
    ("html", "HTML5"),
    ("css", "CSS3"),
    ("sass", "SASS"),
    ("webpack", "Webpack"),
    ("babel", "Babel"),
    ("linux", "Linux"),
    ("unix", "Unix"),
    ("bash", "Bash"),
];

/// Experience markers, French and English. Count of distinct entries present
/// drives the experience bonus.
pub static EXPERIENCE_KEYWORDS: &[&str] = &[
    "experience",
    "expérience",
    "worked",
    "développé",
    "developed",
    "managed",
    "géré",
    "led",
    "dirigé",
    "created",
    "créé",
    "built",
    "construit",
    "designed",
    "conçu",
    "implemented",
    "implémenté",
    "achieved",
    "réalisé",
    "improved",
    "amélioré",
    "optimized",
    "optimisé",
    "launched",
    "lancé",
    "coordinated",
    "coordonné",
];

/// Education markers, French and English. Any single hit sets the signal.
pub static EDUCATION_KEYWORDS: &[&str] = &[
    "université",
    "university",
    "master",
    "bachelor",
    "licence",
    "diplôme",
    "degree",
    "formation",
    "education",
    "école",
    "school",
    "ingénieur",
    "engineer",
    "doctorat",
    "phd",
    "certification",
];
