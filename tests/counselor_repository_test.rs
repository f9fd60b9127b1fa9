use practice_data::{
    CounselorRepository, DataError, FileSource, JsonCounselorRepository, LocalFileSource,
    Result,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tempfile::TempDir;

const VALID_COUNSELORS: &str = r#"{
  "counselorList": [
    {
      "id": "1",
      "firstName": "Linda",
      "lastName": "Fentress",
      "titles": ["MA", "LPC"],
      "shortDescription": "Individual and family counseling.",
      "longDescription": "<p>Linda has practiced for 20 years.</p>",
      "email": "linda@example.com",
      "phone": "555-0100",
      "credentials": ["MA", "LPC"],
      "insurance": ["Aetna", "Cigna"],
      "memberships": ["ACA"],
      "appointmentLink": "https://example.com/book/linda",
      "directoryId": "d-1",
      "practitionerId": "p-1"
    },
    {
      "id": "2",
      "firstName": "Marcus",
      "lastName": "Hale",
      "titles": ["LPCC"],
      "shortDescription": "Adolescent counseling.",
      "longDescription": "<p>Marcus works with teens.</p>",
      "email": "marcus@example.com",
      "phone": "555-0101",
      "credentials": ["LPCC"],
      "insurance": [],
      "memberships": [],
      "appointmentLink": "",
      "directoryId": "d-2",
      "practitionerId": "p-2"
    }
  ]
}"#;

/// File source wrapper that counts reads, for cache observability.
#[derive(Clone)]
struct CountingSource {
    inner: LocalFileSource,
    reads: Arc<AtomicUsize>,
}

impl CountingSource {
    fn new(inner: LocalFileSource) -> Self {
        Self {
            inner,
            reads: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn read_count(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

impl FileSource for CountingSource {
    async fn read_to_string(&self, path: &str) -> Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.inner.read_to_string(path).await
    }
}

fn write_counselor_file(dir: &TempDir, contents: &str) {
    std::fs::write(dir.path().join("counselor.json"), contents).unwrap();
}

#[tokio::test]
async fn get_all_preserves_length_and_order() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, VALID_COUNSELORS);

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    let all = repo.get_all_counselors().await.unwrap();

    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first_name, "Linda");
    assert_eq!(all[1].first_name, "Marcus");
}

#[tokio::test]
async fn repeated_calls_read_the_file_once() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, VALID_COUNSELORS);

    let source = CountingSource::new(LocalFileSource::new(dir.path()));
    let repo = JsonCounselorRepository::new(source.clone(), "counselor.json");

    let first = repo.get_all_counselors().await.unwrap();
    let second = repo.get_all_counselors().await.unwrap();

    assert_eq!(&*first, &*second);
    assert_eq!(source.read_count(), 1);
}

#[tokio::test]
async fn lookup_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, VALID_COUNSELORS);

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");

    for name in ["linda", "LINDA", "Linda"] {
        let found = repo.get_counselor_by_name(name).await.unwrap();
        assert_eq!(found.unwrap().id, "1", "lookup failed for {name:?}");
    }
}

#[tokio::test]
async fn unknown_name_returns_none() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, VALID_COUNSELORS);

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    let found = repo.get_counselor_by_name("Kelsi").await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn empty_name_returns_none_without_reading_the_file() {
    // No data file exists at all; empty input must still succeed.
    let dir = TempDir::new().unwrap();
    let source = CountingSource::new(LocalFileSource::new(dir.path()));
    let repo = JsonCounselorRepository::new(source.clone(), "counselor.json");

    let found = repo.get_counselor_by_name("").await.unwrap();
    assert!(found.is_none());
    assert_eq!(source.read_count(), 0);
}

#[tokio::test]
async fn missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");

    let err = repo.get_all_counselors().await.unwrap_err();
    assert!(matches!(err, DataError::NotFound { .. }));
    assert!(err.to_string().contains("counselor.json"));
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, "{ not json");

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    let err = repo.get_all_counselors().await.unwrap_err();
    assert!(matches!(err, DataError::Parse { .. }));
}

#[tokio::test]
async fn missing_envelope_key_is_a_validation_error() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, r#"{"counselors": []}"#);

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    let err = repo.get_all_counselors().await.unwrap_err();
    assert!(matches!(err, DataError::Validation { .. }));
}

#[tokio::test]
async fn invalid_email_names_the_offending_field() {
    let dir = TempDir::new().unwrap();
    let bad_email = VALID_COUNSELORS.replace("linda@example.com", "not-an-email");
    write_counselor_file(&dir, &bad_email);

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    let err = repo.get_all_counselors().await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("counselorList[0].email"), "got: {message}");
    assert!(message.contains("Invalid email format"), "got: {message}");
}

#[tokio::test]
async fn failed_load_does_not_poison_the_cache() {
    let dir = TempDir::new().unwrap();
    write_counselor_file(&dir, "{ not json");

    let repo = JsonCounselorRepository::new(LocalFileSource::new(dir.path()), "counselor.json");
    assert!(repo.get_all_counselors().await.is_err());

    // Fix the file; the next call must retry the read and succeed.
    write_counselor_file(&dir, VALID_COUNSELORS);
    let all = repo.get_all_counselors().await.unwrap();
    assert_eq!(all.len(), 2);
}
