use crate::infra::{load_job_catalog, read_text, seeded_service};
use clap::Args;
use std::path::PathBuf;
use talent_match::config::AppConfig;
use talent_match::error::AppError;
use talent_match::workflows::matching::{
    explain, parse_job_description, parse_resume, score, CandidateSignals, JobId, JobSignals,
    MatchResult, ShortlistPolicy, SkillVocabulary,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Plain-text resume to score
    #[arg(long)]
    pub(crate) resume: PathBuf,
    /// Plain-text job description to score against
    #[arg(long)]
    pub(crate) job: PathBuf,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Seeded job to analyze
    #[arg(long, default_value = "job-1")]
    pub(crate) job_id: String,
    /// Shortlist threshold (defaults to SHORTLIST_THRESHOLD or 80)
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) threshold: Option<i32>,
    /// Optional CSV job catalogue appended after the seeded jobs
    #[arg(long)]
    pub(crate) job_catalog: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let resume = read_text(&args.resume)?;
    let description = read_text(&args.job)?;

    let result = score_texts(&resume, &description);
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

pub(crate) fn score_texts(resume: &str, description: &str) -> MatchResult {
    let vocabulary = SkillVocabulary::standard();
    let resume = parse_resume(resume, vocabulary);
    let job = parse_job_description(description, vocabulary);

    score(
        &CandidateSignals {
            skills: resume.skills,
            experience: resume.experience,
        },
        &JobSignals {
            skills: job.skills,
            requirements: job.requirements,
        },
    )
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        job_id,
        threshold,
        job_catalog,
    } = args;

    let config = AppConfig::load()?;
    let policy = threshold.map_or(config.matching.shortlist_policy(), ShortlistPolicy::new);
    let service = seeded_service(policy)?;
    if let Some(path) = job_catalog {
        let imported = load_job_catalog(&service, &path)?;
        println!("Imported {} job(s) from {}", imported.len(), path.display());
    }

    let job_id = JobId(job_id);
    let job = service.job(&job_id)?;
    println!("Candidate matching demo");
    println!("Job {}: {} at {} ({})", job.id, job.title, job.company, job.location);
    println!("Skills: {}", job.skills.join(", "));
    println!("Requirements:");
    for requirement in &job.requirements {
        println!("  - {}", requirement);
    }

    let candidates = service.candidates(Some(&job_id))?;
    let mut ranked = explain(service.scorer(), &candidates, &job);
    ranked.sort_by(|(_, left), (_, right)| right.composite_score.cmp(&left.composite_score));

    println!("\nCandidate pool ({} candidates)", ranked.len());
    println!(
        "  {:<14} {:<18} {:<13} {:>6} {:>6} {:>6}",
        "id", "name", "status", "skill", "exp", "score"
    );
    for (candidate, result) in &ranked {
        println!(
            "  {:<14} {:<18} {:<13} {:>6} {:>6} {:>6}",
            candidate.id.0,
            candidate.name,
            candidate.status.label(),
            result.skill_score,
            result.experience_score,
            result.composite_score
        );
    }

    if let Some((top, result)) = ranked.first() {
        println!("\nBreakdown for {}", top.name);
        for component in &result.components {
            println!(
                "  - {:?}: {} ({})",
                component.factor, component.points, component.notes
            );
        }
    }

    let analysis = service.analyze_job(&job_id)?;
    println!(
        "\nAnalysis stored {} score(s), {} write failure(s)",
        analysis.scores.len() - analysis.failed.len(),
        analysis.failed.len()
    );

    let report = service.shortlist_job(&job_id, None)?;
    if report.shortlisted.is_empty() {
        println!(
            "No eligible candidates at threshold {} (only `new` candidates are promoted)",
            report.threshold
        );
    } else {
        println!(
            "Shortlisted {} candidate(s) at threshold {}:",
            report.shortlisted.len(),
            report.threshold
        );
        for candidate_id in &report.shortlisted {
            let candidate = service.candidate(candidate_id)?;
            println!(
                "  - {} {} (score {})",
                candidate.id,
                candidate.name,
                candidate.match_score.unwrap_or(0)
            );
        }
    }

    let stats = service.stats()?;
    println!(
        "\nPipeline: {} jobs | {} candidates | {} shortlisted | {} interviewing",
        stats.total_jobs,
        stats.total_candidates,
        stats.shortlisted_candidates,
        stats.interviewing_candidates
    );

    Ok(())
}
