use super::Catalog;
use crate::domain::{Dimension, LevelDescriptor, LevelVector, Role};

const TRACK_IC: &str = "Individual Contributor";
const TRACK_TECH_LEAD: &str = "Technical Leadership";
const TRACK_MANAGEMENT: &str = "Management";

const DIMENSION_IDS: [&str; 5] = ["people", "work_scope", "org_scope", "process", "technology"];

impl Catalog {
    /// The compiled-in engineering career ladder.
    pub fn builtin() -> Self {
        Self::assemble(dimensions(), roles())
    }
}

fn dimension(id: &str, name: &str, levels: [(&str, &str); 4]) -> Dimension {
    Dimension {
        id: id.to_string(),
        name: name.to_string(),
        levels: levels
            .into_iter()
            .map(|(label, description)| LevelDescriptor {
                label: label.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

fn dimensions() -> Vec<Dimension> {
    vec![
        dimension(
            "people",
            "People",
            [
                ("learns", "Learns quickly from others and consistently steps up when required"),
                ("supports", "Supports other team members proactively and helps them to be successful"),
                ("mentors", "Mentors others to accelerate their growth and encourages them to participate"),
                ("manages", "Manages team members' career, expectations, performance and belonging through empowerment"),
            ],
        ),
        dimension(
            "work_scope",
            "Work Scope",
            [
                ("task", "Works on individual tasks and brings them to a successful conclusion"),
                ("feature", "Breaks down features/epics, plans, owns and ensures their delivery"),
                ("function", "Owns a functional aspect of the product; identifies, plans and ensures execution of work"),
                ("product", "Maintains and evangelises a coherent view of the/an entire product; owns business impacting outcomes"),
            ],
        ),
        dimension(
            "org_scope",
            "Organizational Scope",
            [
                ("individual", "Acts as a manager of one, organises their own work aligned with the team's goals"),
                ("team", "Directly impacts the team's success, owns and coordinates work with others in the team"),
                ("organization", "Acts, owns and effects outcomes across teams within product engineering"),
                ("company", "Has impact across the company; owns and effects outcomes across functions"),
            ],
        ),
        dimension(
            "process",
            "Process",
            [
                ("follows", "Follows the team processes, delivering a consistent flow of value to production"),
                ("enforces", "Enforces the team processes, making sure everybody understands the benefits/tradeoffs"),
                ("adjusts", "Adjusts the team processes, listening to feedback and guiding the team through the changes"),
                ("defines", "Defines the right processes for the org's maturity level, balancing agility and discipline"),
            ],
        ),
        dimension(
            "technology",
            "Technology",
            [
                ("adopts", "Adopts and actively learns the technology and tools defined by the team"),
                ("specializes", "Specializes in one or more technologies, is the go-to person, takes initiative to learn new ones"),
                ("evangelizes", "Researches, creates proofs of concept and introduces new technologies to the team"),
                ("masters", "Has very deep knowledge about the whole technology stack of the system; designs and creates new technologies"),
            ],
        ),
    ]
}

struct RoleSeed {
    id: &'static str,
    name: &'static str,
    track: &'static str,
    levels: [u8; 5],
    salary: &'static str,
    experience: &'static str,
    responsibilities: [&'static str; 4],
    skills: [&'static str; 4],
    next_roles: &'static [&'static str],
}

impl From<RoleSeed> for Role {
    fn from(seed: RoleSeed) -> Self {
        let levels: LevelVector = DIMENSION_IDS.into_iter().zip(seed.levels).collect();

        Self {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            track: seed.track.to_string(),
            levels,
            experience: Some(seed.experience.to_string()),
            salary: Some(seed.salary.to_string()),
            responsibilities: seed.responsibilities.map(str::to_string).to_vec(),
            skills: seed.skills.map(str::to_string).to_vec(),
            next_roles: seed.next_roles.iter().map(|id| (*id).to_string()).collect(),
        }
    }
}

fn roles() -> Vec<Role> {
    [
        RoleSeed {
            id: "junior-engineer",
            name: "Junior Software Engineer",
            track: TRACK_IC,
            levels: [1, 1, 1, 1, 1],
            salary: "$70k - $90k",
            experience: "0-2 years",
            responsibilities: [
                "Write clean, maintainable code",
                "Participate in code reviews",
                "Fix bugs and implement small features",
                "Learn team processes and tools",
            ],
            skills: ["Programming fundamentals", "Version control", "Testing basics", "Communication"],
            next_roles: &["software-engineer"],
        },
        RoleSeed {
            id: "software-engineer",
            name: "Software Engineer",
            track: TRACK_IC,
            levels: [2, 2, 2, 2, 2],
            salary: "$90k - $120k",
            experience: "2-4 years",
            responsibilities: [
                "Design and implement features independently",
                "Mentor junior developers",
                "Participate in architectural discussions",
                "Lead small projects",
            ],
            skills: ["System design basics", "Code review", "Mentoring", "Project planning"],
            next_roles: &["senior-engineer", "tech-lead"],
        },
        RoleSeed {
            id: "senior-engineer",
            name: "Senior Software Engineer",
            track: TRACK_IC,
            levels: [2, 3, 2, 2, 3],
            salary: "$120k - $160k",
            experience: "4-7 years",
            responsibilities: [
                "Lead technical design and architecture",
                "Mentor team members",
                "Drive technical excellence",
                "Collaborate across teams",
            ],
            skills: ["Advanced system design", "Leadership", "Cross-team collaboration", "Technical strategy"],
            next_roles: &["staff-engineer", "tech-lead", "engineering-manager"],
        },
        RoleSeed {
            id: "staff-engineer",
            name: "Staff Engineer",
            track: TRACK_IC,
            levels: [3, 3, 3, 3, 4],
            salary: "$160k - $220k",
            experience: "7+ years",
            responsibilities: [
                "Define technical strategy",
                "Lead cross-team initiatives",
                "Mentor senior engineers",
                "Drive architectural decisions",
            ],
            skills: ["Technical leadership", "Strategic thinking", "Influence without authority", "System architecture"],
            next_roles: &["principal-engineer", "engineering-manager"],
        },
        RoleSeed {
            id: "tech-lead",
            name: "Tech Lead",
            track: TRACK_TECH_LEAD,
            levels: [3, 3, 2, 3, 3],
            salary: "$130k - $170k",
            experience: "4-6 years",
            responsibilities: [
                "Guide team technical decisions",
                "Coordinate with product and design",
                "Ensure code quality and delivery",
                "Develop team members",
            ],
            skills: ["Technical leadership", "Project management", "Stakeholder communication", "Team coordination"],
            next_roles: &["senior-engineer", "engineering-manager", "staff-engineer"],
        },
        RoleSeed {
            id: "engineering-manager",
            name: "Engineering Manager",
            track: TRACK_MANAGEMENT,
            levels: [4, 3, 3, 3, 2],
            salary: "$140k - $180k",
            experience: "5-8 years",
            responsibilities: [
                "Manage and develop team members",
                "Set team goals and priorities",
                "Coordinate with stakeholders",
                "Drive team performance",
            ],
            skills: ["People management", "Performance management", "Strategic planning", "Communication"],
            next_roles: &["senior-engineering-manager", "director-engineering"],
        },
    ]
    .into_iter()
    .map(Role::from)
    .collect()
}
