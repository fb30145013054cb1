use chrono::NaiveDate;
use talent_match::workflows::matching::{
    CandidateStatus, CandidateUpdate, JobId, NewCandidate, NewJob, RecruitingStore,
    RepositoryError,
};
use tracing::debug;

const GENERATED_CANDIDATES: usize = 50;
const GENERATED_STATUSES: [CandidateStatus; 5] = [
    CandidateStatus::Shortlisted,
    CandidateStatus::New,
    CandidateStatus::Reviewed,
    CandidateStatus::Rejected,
    CandidateStatus::Interviewing,
];

struct SeedJob {
    title: &'static str,
    company: &'static str,
    location: &'static str,
    description: &'static str,
    requirements: [&'static str; 3],
    skills: &'static [&'static str],
}

const SEED_JOBS: [SeedJob; 10] = [
    SeedJob {
        title: "Frontend Developer",
        company: "Tech Innovations Inc.",
        location: "Remote",
        description: "We are looking for a skilled Frontend Developer to join our team. You will be responsible for building user interfaces and implementing web designs.",
        requirements: [
            "3+ years of experience",
            "Bachelor's degree in Computer Science",
            "Experience with agile methodologies",
        ],
        skills: &["React", "TypeScript", "CSS", "HTML", "JavaScript", "Responsive Design"],
    },
    SeedJob {
        title: "Data Scientist",
        company: "Data Analytics Pro",
        location: "New York, NY",
        description: "We're seeking a Data Scientist to analyze large datasets and build predictive models.",
        requirements: [
            "5+ years of experience",
            "Master's degree in Statistics or related field",
            "Experience with big data technologies",
        ],
        skills: &["Python", "R", "SQL", "Machine Learning", "TensorFlow", "Data Visualization"],
    },
    SeedJob {
        title: "Backend Developer",
        company: "Cloud Solutions Ltd.",
        location: "San Francisco, CA",
        description: "Seeking a Backend Developer to build and maintain scalable APIs and microservices.",
        requirements: [
            "4+ years of experience",
            "Proficiency in Node.js and Express",
            "Familiarity with database systems",
        ],
        skills: &["Node.js", "Express", "MongoDB", "SQL", "Docker", "Kubernetes"],
    },
    SeedJob {
        title: "DevOps Engineer",
        company: "InfraTech Solutions",
        location: "Remote",
        description: "We are hiring a DevOps Engineer to automate and enhance our cloud infrastructure.",
        requirements: [
            "5+ years of experience",
            "Expertise in CI/CD tools",
            "Strong background in cloud platforms",
        ],
        skills: &["AWS", "Terraform", "Kubernetes", "CI/CD", "Jenkins", "Docker"],
    },
    SeedJob {
        title: "Full Stack Developer",
        company: "InnovateTech",
        location: "Seattle, WA",
        description: "Looking for a Full Stack Developer to work on modern web applications from frontend to backend.",
        requirements: [
            "3+ years of experience",
            "Experience with both frontend and backend frameworks",
            "Strong problem-solving skills",
        ],
        skills: &["React", "Node.js", "GraphQL", "MongoDB", "TypeScript", "Docker"],
    },
    SeedJob {
        title: "Cybersecurity Analyst",
        company: "SecureNet Corp.",
        location: "Washington, DC",
        description: "We need a Cybersecurity Analyst to protect our systems and networks from threats.",
        requirements: [
            "4+ years of experience",
            "Knowledge of security best practices",
            "Experience with penetration testing",
        ],
        skills: &["Ethical Hacking", "SIEM", "Firewalls", "Network Security", "Incident Response"],
    },
    SeedJob {
        title: "AI Engineer",
        company: "NextGen AI",
        location: "Boston, MA",
        description: "Hiring an AI Engineer to develop machine learning models and AI-driven applications.",
        requirements: [
            "3+ years of experience",
            "Proficiency in deep learning frameworks",
            "Experience with AI product deployment",
        ],
        skills: &["Python", "TensorFlow", "PyTorch", "NLP", "Computer Vision", "Deep Learning"],
    },
    SeedJob {
        title: "Blockchain Developer",
        company: "CryptoTech",
        location: "Remote",
        description: "Seeking a Blockchain Developer to build decentralized applications and smart contracts.",
        requirements: [
            "2+ years of experience",
            "Familiarity with Ethereum and Solidity",
            "Understanding of cryptographic principles",
        ],
        skills: &["Solidity", "Ethereum", "Smart Contracts", "Blockchain", "DeFi", "Rust"],
    },
    SeedJob {
        title: "Mobile App Developer",
        company: "AppWave",
        location: "Los Angeles, CA",
        description: "We are looking for a Mobile App Developer to build high-performance mobile applications.",
        requirements: [
            "3+ years of experience",
            "Proficiency in React Native or Flutter",
            "Understanding of mobile UI/UX best practices",
        ],
        skills: &["React Native", "Flutter", "Swift", "Kotlin", "Mobile UI/UX", "Firebase"],
    },
    SeedJob {
        title: "Product Manager",
        company: "Visionary Products",
        location: "Austin, TX",
        description: "We need a Product Manager to lead product development and strategy.",
        requirements: [
            "5+ years of experience",
            "Strong leadership skills",
            "Experience with Agile methodologies",
        ],
        skills: &[
            "Product Strategy",
            "Agile",
            "Scrum",
            "Market Analysis",
            "User Research",
            "Roadmap Planning",
        ],
    },
];

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Loads the demo catalogue into an empty store: ten jobs (`job-1`..`job-10`), two curated
/// candidates and a generated pool spread over the first five jobs.
///
/// Generated statuses and scores rotate deterministically so every run sees the same pool.
pub(crate) fn seed_store<S>(store: &S) -> Result<(), RepositoryError>
where
    S: RecruitingStore + ?Sized,
{
    for job in &SEED_JOBS {
        store.create_job(NewJob {
            title: job.title.to_string(),
            company: job.company.to_string(),
            location: job.location.to_string(),
            description: job.description.to_string(),
            requirements: strings(&job.requirements),
            skills: strings(job.skills),
        })?;
    }

    let john = store.create_candidate(NewCandidate {
        name: "John Smith".to_string(),
        email: "john.smith@example.com".to_string(),
        phone: "555-123-4567".to_string(),
        resume_text: "Frontend developer with 4 years of experience building responsive web applications using React, TypeScript, and modern CSS frameworks.".to_string(),
        skills: strings(&["React", "TypeScript", "JavaScript", "HTML", "CSS", "Redux"]),
        education: strings(&["Bachelor's in Computer Science, University of Technology, 2019"]),
        experience: strings(&[
            "Senior Frontend Developer at Web Solutions Inc., 2019-2023",
            "Frontend Intern at Tech Labs, 2018",
        ]),
        match_score: Some(85),
        job_id: Some(JobId("job-1".to_string())),
    })?;
    store.update_candidate(&john.id, CandidateUpdate::status(CandidateStatus::Shortlisted))?;

    let jane = store.create_candidate(NewCandidate {
        name: "Jane Davis".to_string(),
        email: "jane.davis@example.com".to_string(),
        phone: "555-987-6543".to_string(),
        resume_text: "Data scientist with expertise in statistical analysis, machine learning, and data visualization. 5 years of experience working with large datasets.".to_string(),
        skills: strings(&["Python", "R", "SQL", "TensorFlow", "PyTorch", "Data Visualization"]),
        education: strings(&[
            "Master's in Statistics, State University, 2018",
            "Bachelor's in Mathematics, State University, 2016",
        ]),
        experience: strings(&[
            "Senior Data Scientist at Analytics Corp, 2020-2023",
            "Data Analyst at Research Center, 2018-2020",
        ]),
        match_score: Some(92),
        job_id: Some(JobId("job-2".to_string())),
    })?;
    store.update_candidate(
        &jane.id,
        CandidateUpdate {
            status: Some(CandidateStatus::Interviewing),
            interview_at: NaiveDate::from_ymd_opt(2023, 11, 5)
                .and_then(|day| day.and_hms_opt(10, 0, 0)),
            ..CandidateUpdate::default()
        },
    )?;

    for index in 0..GENERATED_CANDIDATES {
        let number = index + 3;
        let candidate = store.create_candidate(NewCandidate {
            name: format!("Candidate {number}"),
            email: format!("candidate{number}@example.com"),
            phone: format!("555-000-{number:04}"),
            resume_text: "Software engineer with experience in full-stack development, cloud computing, and microservices architecture.".to_string(),
            skills: strings(&["Java", "Spring Boot", "AWS", "Docker", "Kubernetes", "Microservices"]),
            education: strings(&["Bachelor's in Computer Science, Tech University, 2020"]),
            experience: strings(&["Software Engineer at Cloud Systems Inc., 2020-2023"]),
            match_score: Some(generated_score(index)),
            job_id: Some(JobId(format!("job-{}", index % 5 + 1))),
        })?;
        let status = GENERATED_STATUSES[index % GENERATED_STATUSES.len()];
        if status != CandidateStatus::New {
            store.update_candidate(&candidate.id, CandidateUpdate::status(status))?;
        }
    }

    debug!(
        jobs = SEED_JOBS.len(),
        candidates = GENERATED_CANDIDATES + 2,
        "seeded recruiting store"
    );
    Ok(())
}

// Walks 50..=99 with a stride coprime to 50 so neighbouring candidates differ.
fn generated_score(index: usize) -> u8 {
    50 + (index * 37 % 50) as u8
}
