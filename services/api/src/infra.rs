use metrics_exporter_prometheus::PrometheusHandle;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_match::error::AppError;
use talent_match::workflows::matching::{
    import_job_catalog, InMemoryRecruitingStore, Job, MatchingService, RecruitingStore,
    ShortlistPolicy, SkillVocabulary,
};
use tracing::info;

use crate::seed::seed_store;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory store preloaded with the demo catalogue.
pub(crate) fn seeded_store() -> Result<Arc<InMemoryRecruitingStore>, AppError> {
    let store = Arc::new(InMemoryRecruitingStore::new());
    seed_store(store.as_ref()).map_err(|err| AppError::Matching(err.into()))?;
    Ok(store)
}

pub(crate) fn seeded_service(
    policy: ShortlistPolicy,
) -> Result<MatchingService<InMemoryRecruitingStore>, AppError> {
    Ok(MatchingService::new(seeded_store()?, policy))
}

/// Registers every row of a CSV job catalogue through the service.
pub(crate) fn load_job_catalog<S>(
    service: &MatchingService<S>,
    path: &Path,
) -> Result<Vec<Job>, AppError>
where
    S: RecruitingStore + 'static,
{
    let reader = BufReader::new(File::open(path)?);
    let submissions = import_job_catalog(reader, SkillVocabulary::standard())?;

    let mut jobs = Vec::with_capacity(submissions.len());
    for submission in submissions {
        jobs.push(service.register_job(submission)?);
    }

    info!(path = %path.display(), jobs = jobs.len(), "job catalogue loaded");
    Ok(jobs)
}

pub(crate) fn read_text(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_catalog(contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "talent-match-catalog-{}-{}.csv",
            std::process::id(),
            contents.len()
        ));
        let mut file = File::create(&path).expect("temp file");
        file.write_all(contents.as_bytes()).expect("write catalogue");
        path
    }

    #[test]
    fn catalogue_jobs_follow_seeded_ones() {
        let service = seeded_service(ShortlistPolicy::default()).expect("seeded");
        let path = temp_catalog(
            "Job Title,Job Description\nQA Engineer,\"Automate tests in Python.\nrequires 2 years experience\"\n",
        );

        let jobs = load_job_catalog(&service, &path).expect("catalogue loads");
        std::fs::remove_file(&path).ok();

        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].id.0, "job-11");
        assert!(jobs[0].skills.contains(&"Python".to_string()));
        assert_eq!(service.jobs().unwrap().len(), 11);
    }

    #[test]
    fn missing_catalogue_is_an_io_error() {
        let service = seeded_service(ShortlistPolicy::default()).expect("seeded");
        let err = load_job_catalog(&service, Path::new("/nonexistent/catalogue.csv")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)), "{err}");
    }
}
