//! Fixed reference tables shared by every generation run.
//!
//! Loaded once into read-only process state; nothing mutates them afterwards.

/// US state code mapped to the cities an employee can be placed in.
pub static STATE_CITIES: &[(&str, &[&str])] = &[
    (
        "CA",
        &["Los Angeles", "San Francisco", "San Diego", "Sacramento"],
    ),
    ("NY", &["New York", "Buffalo", "Rochester", "Albany"]),
    ("TX", &["Houston", "Austin", "Dallas", "San Antonio"]),
    ("FL", &["Miami", "Orlando", "Tampa", "Jacksonville"]),
    ("IL", &["Chicago", "Springfield", "Peoria", "Rockford"]),
    ("WA", &["Seattle", "Spokane", "Tacoma"]),
    ("PA", &["Philadelphia", "Pittsburgh", "Allentown"]),
    ("MA", &["Boston", "Worcester", "Springfield"]),
    ("OH", &["Columbus", "Cleveland", "Cincinnati"]),
    ("GA", &["Atlanta", "Savannah", "Augusta"]),
];

/// Department mapped to the job titles registered under it.
pub static DEPARTMENT_TITLES: &[(&str, &[&str])] = &[
    (
        "IT",
        &[
            "Systems Administrator",
            "Network Engineer",
            "Software Developer",
            "IT Support Specialist",
            "Database Administrator",
        ],
    ),
    (
        "HHRR",
        &[
            "HR Manager",
            "Recruitment Specialist",
            "Payroll Coordinator",
            "Training Coordinator",
            "Employee Relations Specialist",
        ],
    ),
    (
        "Finance",
        &[
            "Financial Analyst",
            "Accountant",
            "Budget Manager",
            "Tax Specialist",
            "Accounts Payable Clerk",
        ],
    ),
    (
        "Sales",
        &[
            "Sales Representative",
            "Account Manager",
            "Business Development Manager",
            "Sales Coordinator",
            "Regional Sales Director",
        ],
    ),
    (
        "Marketing",
        &[
            "Marketing Manager",
            "Content Strategist",
            "Digital Marketing Specialist",
            "Brand Manager",
            "Market Research Analyst",
        ],
    ),
    (
        "Operations",
        &[
            "Operations Manager",
            "Supply Chain Coordinator",
            "Logistics Specialist",
            "Production Supervisor",
            "Operations Analyst",
        ],
    ),
    (
        "Support",
        &[
            "Customer Support Representative",
            "Technical Support Specialist",
            "Help Desk Technician",
            "Service Desk Analyst",
        ],
    ),
    (
        "Legal",
        &[
            "Corporate Lawyer",
            "Compliance Officer",
            "Legal Assistant",
            "Contract Specialist",
            "Paralegal",
        ],
    ),
    (
        "Logistics",
        &[
            "Logistics Manager",
            "Warehouse Supervisor",
            "Transportation Coordinator",
            "Inventory Control Specialist",
        ],
    ),
    (
        "R&D",
        &[
            "Research Scientist",
            "Product Development Engineer",
            "Innovation Manager",
            "R&D Technician",
        ],
    ),
    (
        "Procurement",
        &[
            "Procurement Manager",
            "Purchasing Agent",
            "Supply Chain Analyst",
            "Vendor Manager",
        ],
    ),
    (
        "Quality",
        &[
            "Quality Assurance Manager",
            "Quality Control Inspector",
            "Production Assistant",
            "Process Improvement Specialist",
        ],
    ),
    (
        "Security",
        &[
            "Security Manager",
            "Cybersecurity Analyst",
            "Physical Security Specialist",
            "Safety Coordinator",
        ],
    ),
    (
        "Training",
        &[
            "Training Manager",
            "Instructional Designer",
            "Corporate Trainer",
            "Learning and Development Specialist",
        ],
    ),
    (
        "Customer Service",
        &[
            "Customer Service Representative",
            "Client Relations Manager",
            "Call Center Supervisor",
            "Customer Success Manager",
        ],
    ),
    (
        "Engineering",
        &[
            "Systems Engineer",
            "Industrial Engineer",
            "Mechanical Engineer",
            "Electrical Engineer",
            "Civil Engineer",
        ],
    ),
    (
        "Design",
        &[
            "Graphic Designer",
            "UX/UI Designer",
            "Industrial Designer",
            "Creative Director",
        ],
    ),
    (
        "Development",
        &[
            "Software Engineer",
            "Web Developer",
            "Mobile App Developer",
            "DevOps Engineer",
        ],
    ),
    (
        "Research",
        &[
            "Research Analyst",
            "Data Scientist",
            "Market Researcher",
            "Academic Researcher",
        ],
    ),
];

/// Looks up the cities registered under a state code.
#[must_use]
pub fn cities_of(state: &str) -> Option<&'static [&'static str]> {
    STATE_CITIES
        .iter()
        .find(|(code, _)| *code == state)
        .map(|(_, cities)| *cities)
}

/// Looks up the job titles registered under a department.
#[must_use]
pub fn titles_of(department: &str) -> Option<&'static [&'static str]> {
    DEPARTMENT_TITLES
        .iter()
        .find(|(name, _)| *name == department)
        .map(|(_, titles)| *titles)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_table_shapes() {
        assert_eq!(STATE_CITIES.len(), 10);
        assert_eq!(DEPARTMENT_TITLES.len(), 19);
        for (state, cities) in STATE_CITIES {
            assert_eq!(state.len(), 2);
            assert!(!cities.is_empty());
        }
        for (department, titles) in DEPARTMENT_TITLES {
            assert!(!department.is_empty());
            assert!(!titles.is_empty());
        }
    }

    #[test]
    fn test_lookups() {
        assert_eq!(
            cities_of("WA"),
            Some(&["Seattle", "Spokane", "Tacoma"][..])
        );
        assert!(titles_of("Legal").unwrap().contains(&"Paralegal"));
        assert!(cities_of("ZZ").is_none());
        assert!(titles_of("Astrology").is_none());
    }
}
