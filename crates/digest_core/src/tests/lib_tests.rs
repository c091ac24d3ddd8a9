use super::*;
use std::{
    collections::VecDeque,
    io::Write,
    path::Path,
    sync::Mutex as StdMutex,
    time::Duration,
};

use async_trait::async_trait;
use shared::{
    domain::{Cluster, ClusterIndex, QuestionRecord, QuestionSet, SummaryResult},
    error::ApiError,
    protocol::ClusteringData,
};

use crate::{
    error::Result,
    render::{NO_ANSWER, NO_SUMMARY},
    service::{CLUSTERING_ENDPOINT, SAMPLE_DATA_ENDPOINT, SUMMARIZATION_ENDPOINT},
};

#[derive(Debug, Clone, PartialEq)]
enum PanelState {
    Hidden,
    Loading,
    Shown(SummaryPanel),
    Failed(String),
}

#[derive(Default)]
struct RecordingRenderer {
    statuses: StdMutex<Vec<Status>>,
    stats: StdMutex<Vec<ClusteringStats>>,
    lists: StdMutex<Vec<Vec<ClusterListItem>>>,
    active: StdMutex<Option<ClusterIndex>>,
    active_marks: StdMutex<u32>,
    revealed: StdMutex<bool>,
    detail: StdMutex<Option<ClusterDetail>>,
    panel: StdMutex<Option<PanelState>>,
    panel_changes: StdMutex<u32>,
    clipboard: StdMutex<Option<String>>,
    clipboard_broken: StdMutex<bool>,
}

impl RecordingRenderer {
    fn last_status(&self) -> Status {
        self.statuses.lock().unwrap().last().cloned().expect("a status")
    }

    fn panel(&self) -> PanelState {
        self.panel.lock().unwrap().clone().unwrap_or(PanelState::Hidden)
    }

    fn set_panel(&self, state: PanelState) {
        *self.panel.lock().unwrap() = Some(state);
        *self.panel_changes.lock().unwrap() += 1;
    }
}

impl StatusView for RecordingRenderer {
    fn show_status(&self, status: &Status) {
        self.statuses.lock().unwrap().push(status.clone());
    }

    fn dismiss_status(&self) {}
}

impl ClusterListView for RecordingRenderer {
    fn show_statistics(&self, stats: &ClusteringStats) {
        self.stats.lock().unwrap().push(*stats);
    }

    fn show_clusters(&self, items: &[ClusterListItem]) {
        self.lists.lock().unwrap().push(items.to_vec());
        *self.active.lock().unwrap() = None;
    }

    fn mark_active(&self, index: ClusterIndex) {
        *self.active.lock().unwrap() = Some(index);
        *self.active_marks.lock().unwrap() += 1;
    }

    fn reveal_content(&self) {
        *self.revealed.lock().unwrap() = true;
    }
}

impl DetailView for RecordingRenderer {
    fn show_detail(&self, detail: &ClusterDetail) {
        *self.detail.lock().unwrap() = Some(detail.clone());
    }

    fn clear_detail(&self) {
        *self.detail.lock().unwrap() = None;
    }
}

impl SummaryView for RecordingRenderer {
    fn show_loading(&self) {
        self.set_panel(PanelState::Loading);
    }

    fn show_summary(&self, panel: &SummaryPanel) {
        self.set_panel(PanelState::Shown(panel.clone()));
    }

    fn show_error(&self, message: &str) {
        self.set_panel(PanelState::Failed(message.to_string()));
    }

    fn hide(&self) {
        self.set_panel(PanelState::Hidden);
    }
}

impl ClipboardSink for RecordingRenderer {
    fn write_text(&self, text: &str) -> std::result::Result<(), String> {
        if *self.clipboard_broken.lock().unwrap() {
            return Err("clipboard is locked by another application".to_string());
        }
        *self.clipboard.lock().unwrap() = Some(text.to_string());
        Ok(())
    }
}

struct Scripted<T> {
    delay: Duration,
    reply: std::result::Result<T, String>,
}

fn ok<T>(value: T) -> Scripted<T> {
    Scripted {
        delay: Duration::ZERO,
        reply: Ok(value),
    }
}

fn fail<T>(message: &str) -> Scripted<T> {
    Scripted {
        delay: Duration::ZERO,
        reply: Err(message.to_string()),
    }
}

fn delayed<T>(secs: u64, scripted: Scripted<T>) -> Scripted<T> {
    Scripted {
        delay: Duration::from_secs(secs),
        ..scripted
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Sample,
    Cluster(usize),
    Summarize {
        first_question: String,
        panel_at_dispatch: PanelState,
    },
}

struct FakeService {
    renderer: Arc<RecordingRenderer>,
    samples: StdMutex<VecDeque<Scripted<QuestionSet>>>,
    clusterings: StdMutex<VecDeque<Scripted<ClusteringData>>>,
    summaries: StdMutex<VecDeque<Scripted<SummaryResult>>>,
    calls: StdMutex<Vec<Call>>,
}

impl FakeService {
    fn new(renderer: Arc<RecordingRenderer>) -> Self {
        Self {
            renderer,
            samples: StdMutex::new(VecDeque::new()),
            clusterings: StdMutex::new(VecDeque::new()),
            summaries: StdMutex::new(VecDeque::new()),
            calls: StdMutex::new(Vec::new()),
        }
    }

    fn push_sample(&self, scripted: Scripted<QuestionSet>) {
        self.samples.lock().unwrap().push_back(scripted);
    }

    fn push_clustering(&self, scripted: Scripted<ClusteringData>) {
        self.clusterings.lock().unwrap().push_back(scripted);
    }

    fn push_summary(&self, scripted: Scripted<SummaryResult>) {
        self.summaries.lock().unwrap().push_back(scripted);
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn summarize_calls(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|call| matches!(call, Call::Summarize { .. }))
            .collect()
    }
}

async fn play<T>(
    queue: &StdMutex<VecDeque<Scripted<T>>>,
    endpoint: &'static str,
) -> Result<T> {
    let scripted = queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| panic!("unexpected {endpoint} call"));
    if !scripted.delay.is_zero() {
        tokio::time::sleep(scripted.delay).await;
    }
    scripted
        .reply
        .map_err(|message| ApiError::new(endpoint, Some(message)).into())
}

#[async_trait]
impl QuestionService for FakeService {
    async fn fetch_sample(&self) -> Result<QuestionSet> {
        self.calls.lock().unwrap().push(Call::Sample);
        play(&self.samples, SAMPLE_DATA_ENDPOINT).await
    }

    async fn cluster(&self, questions: &[QuestionRecord]) -> Result<ClusteringData> {
        self.calls.lock().unwrap().push(Call::Cluster(questions.len()));
        play(&self.clusterings, CLUSTERING_ENDPOINT).await
    }

    async fn summarize(&self, questions: &[QuestionRecord]) -> Result<SummaryResult> {
        self.calls.lock().unwrap().push(Call::Summarize {
            first_question: questions[0].question_text.clone(),
            panel_at_dispatch: self.renderer.panel(),
        });
        play(&self.summaries, SUMMARIZATION_ENDPOINT).await
    }
}

fn questions(n: usize) -> QuestionSet {
    (0..n)
        .map(|i| {
            QuestionRecord::new(
                format!("2024/04/01 10:{i:02}"),
                format!("question {i}"),
                (i % 2 == 0).then(|| format!("answer {i}")),
            )
        })
        .collect()
}

/// Splits `questions` into consecutive clusters of the given sizes.
fn clustering(questions: &QuestionSet, sizes: &[usize]) -> ClusteringData {
    let mut offset = 0;
    let clusters = sizes
        .iter()
        .map(|&size| {
            let members = questions[offset..offset + size].to_vec();
            offset += size;
            Cluster {
                size,
                representative_question: members[0].clone(),
                questions: members,
                cluster_id: None,
            }
        })
        .collect();
    ClusteringData {
        total_questions: questions.len(),
        clusters,
        timestamp: None,
    }
}

fn summary(text: &str) -> SummaryResult {
    SummaryResult {
        summary: Some(text.to_string()),
        key_points: vec![format!("{text} point")],
        answer: Some(format!("{text} answer\nsecond line")),
    }
}

fn harness() -> (Arc<RecordingRenderer>, Arc<FakeService>, Arc<Workbench>) {
    let renderer = Arc::new(RecordingRenderer::default());
    let service = Arc::new(FakeService::new(renderer.clone()));
    let workbench = Workbench::new(
        service.clone(),
        Views::from_renderer(renderer.clone()),
        StatusDurations::default(),
    );
    (renderer, service, workbench)
}

/// Loads five sample questions clustered as [3, 2].
async fn loaded_harness() -> (Arc<RecordingRenderer>, Arc<FakeService>, Arc<Workbench>) {
    let (renderer, service, workbench) = harness();
    let set = questions(5);
    service.push_sample(ok(set.clone()));
    service.push_clustering(ok(clustering(&set, &[3, 2])));
    workbench.load_sample().await.expect("load sample");
    (renderer, service, workbench)
}

#[tokio::test]
async fn load_sample_clusters_and_renders_statistics() {
    let (renderer, service, workbench) = loaded_harness().await;

    assert_eq!(service.calls(), vec![Call::Sample, Call::Cluster(5)]);
    let stats = renderer.stats.lock().unwrap().clone();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].total_questions, 5);
    assert_eq!(stats[0].cluster_count, 2);

    let lists = renderer.lists.lock().unwrap().clone();
    assert_eq!(lists[0].len(), stats[0].cluster_count);
    assert_eq!(lists[0][1].label, "Cluster 2");
    assert_eq!(lists[0][1].size, 2);
    assert_eq!(lists[0][0].preview, "question 0...");

    assert!(*renderer.revealed.lock().unwrap());
    let status = renderer.last_status();
    assert_eq!(status.kind, StatusKind::Success);
    assert_eq!(status.message, "Clustered 5 questions into 2 clusters");

    let snapshot = workbench.snapshot().await;
    assert_eq!(snapshot.question_count, 5);
    assert_eq!(snapshot.clusters.len(), 2);
    assert_eq!(snapshot.selected, None);
}

#[tokio::test]
async fn displayed_total_is_the_service_reported_total() {
    let (renderer, service, workbench) = harness();
    let set = questions(4);
    let mut data = clustering(&set, &[2, 2]);
    data.total_questions = 7;
    service.push_clustering(ok(data));

    workbench.cluster(set).await.expect("cluster");

    let stats = renderer.stats.lock().unwrap()[0];
    assert_eq!(stats.total_questions, 7);
    assert_eq!(stats.cluster_count, 2);
}

#[tokio::test]
async fn clustering_failure_on_first_attempt_keeps_content_hidden() {
    let (renderer, service, workbench) = harness();
    service.push_sample(ok(questions(3)));
    service.push_clustering(fail("vectorizer exploded"));

    let err = workbench.load_sample().await.expect_err("clustering fails");
    assert_eq!(err.category(), ErrorCategory::Service);

    let status = renderer.last_status();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.starts_with("Clustering failed"), "{}", status.message);
    assert!(!*renderer.revealed.lock().unwrap());
    assert!(renderer.lists.lock().unwrap().is_empty());
    assert!(!workbench.snapshot().await.content_revealed);
}

#[tokio::test]
async fn failed_reclustering_leaves_previous_state_and_views_intact() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("first")));
    workbench
        .select_cluster(ClusterIndex(1))
        .await
        .expect("select");
    let before = workbench.snapshot().await;

    service.push_sample(ok(questions(8)));
    service.push_clustering(fail("timeout upstream"));
    assert!(workbench.load_sample().await.is_err());

    let after = workbench.snapshot().await;
    assert_eq!(after.clusters, before.clusters);
    assert_eq!(after.question_count, 5);
    assert_eq!(after.selected, Some(ClusterIndex(1)));
    assert_eq!(after.summary, before.summary);
    assert_eq!(renderer.lists.lock().unwrap().len(), 1);
    assert_eq!(*renderer.active.lock().unwrap(), Some(ClusterIndex(1)));
    assert!(matches!(renderer.panel(), PanelState::Shown(_)));
}

#[tokio::test]
async fn sample_fetch_failure_reports_error_without_clustering() {
    let (renderer, service, workbench) = harness();
    service.push_sample(fail("sample file missing"));

    assert!(workbench.load_sample().await.is_err());

    assert_eq!(service.calls(), vec![Call::Sample]);
    let status = renderer.last_status();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.starts_with("Failed to load sample data"));
    assert_eq!(workbench.snapshot().await, SessionSnapshot::default());
}

#[tokio::test]
async fn selecting_marks_exactly_that_cluster_and_renders_its_questions() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("second cluster")));

    let outcome = workbench
        .select_cluster(ClusterIndex(1))
        .await
        .expect("select")
        .expect("cluster exists");

    assert_eq!(*renderer.active.lock().unwrap(), Some(ClusterIndex(1)));
    let detail = renderer.detail.lock().unwrap().clone().expect("detail");
    assert_eq!(detail.index, ClusterIndex(1));
    let texts: Vec<_> = detail.entries.iter().map(|e| e.question.as_str()).collect();
    assert_eq!(texts, vec!["question 3", "question 4"]);
    assert_eq!(detail.entries[0].existing_answer, None);
    assert_eq!(detail.entries[1].existing_answer.as_deref(), Some("answer 4"));

    let panel = outcome.applied().expect("applied");
    assert_eq!(panel.summary, "second cluster");
    assert_eq!(panel.answer_lines, vec!["second cluster answer", "second line"]);
    assert_eq!(renderer.panel(), PanelState::Shown(panel));
}

#[tokio::test]
async fn switching_selection_shows_loading_before_the_new_request() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("cluster one")));
    service.push_summary(ok(summary("cluster two")));

    workbench.select_cluster(ClusterIndex(0)).await.expect("first");
    workbench.select_cluster(ClusterIndex(1)).await.expect("second");

    let calls = service.summarize_calls();
    assert_eq!(
        calls,
        vec![
            Call::Summarize {
                first_question: "question 0".into(),
                panel_at_dispatch: PanelState::Loading,
            },
            Call::Summarize {
                first_question: "question 3".into(),
                panel_at_dispatch: PanelState::Loading,
            },
        ]
    );
    match renderer.panel() {
        PanelState::Shown(panel) => assert_eq!(panel.summary, "cluster two"),
        other => panic!("unexpected panel {other:?}"),
    }
    assert_eq!(*renderer.active.lock().unwrap(), Some(ClusterIndex(1)));
}

#[tokio::test]
async fn regenerate_without_selection_is_a_no_op() {
    let (renderer, service, workbench) = loaded_harness().await;
    let changes_before = *renderer.panel_changes.lock().unwrap();

    let outcome = workbench.regenerate().await.expect("no-op");

    assert!(outcome.is_none());
    assert!(service.summarize_calls().is_empty());
    assert_eq!(*renderer.panel_changes.lock().unwrap(), changes_before);
}

#[tokio::test]
async fn regenerate_requests_the_same_cluster_again() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("v1")));
    service.push_summary(ok(summary("v2")));

    workbench.select_cluster(ClusterIndex(0)).await.expect("select");
    workbench.regenerate().await.expect("regenerate");

    let calls = service.summarize_calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0], calls[1]);
    match renderer.panel() {
        PanelState::Shown(panel) => assert_eq!(panel.summary, "v2"),
        other => panic!("unexpected panel {other:?}"),
    }
}

#[tokio::test]
async fn summary_failure_is_inline_and_a_retry_still_works() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(fail("model overloaded"));
    service.push_summary(ok(summary("recovered")));

    assert!(workbench.select_cluster(ClusterIndex(0)).await.is_err());
    match renderer.panel() {
        PanelState::Failed(message) => {
            assert!(message.starts_with("Failed to generate summary"), "{message}")
        }
        other => panic!("unexpected panel {other:?}"),
    }
    assert_eq!(workbench.snapshot().await.summary, None);

    workbench.regenerate().await.expect("retry");
    assert_eq!(
        workbench.snapshot().await.summary,
        Some(summary("recovered"))
    );
}

#[tokio::test]
async fn empty_summary_renders_placeholders() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(SummaryResult {
        summary: Some(String::new()),
        key_points: Vec::new(),
        answer: None,
    }));

    workbench.select_cluster(ClusterIndex(0)).await.expect("select");

    match renderer.panel() {
        PanelState::Shown(panel) => {
            assert_eq!(panel.summary, NO_SUMMARY);
            assert!(panel.key_points.is_empty());
            assert_eq!(panel.answer_text(), NO_ANSWER);
        }
        other => panic!("unexpected panel {other:?}"),
    }
}

#[tokio::test]
async fn unknown_cluster_index_is_ignored() {
    let (renderer, service, workbench) = loaded_harness().await;

    let outcome = workbench.select_cluster(ClusterIndex(9)).await.expect("ignored");

    assert!(outcome.is_none());
    assert!(service.summarize_calls().is_empty());
    assert_eq!(*renderer.active_marks.lock().unwrap(), 0);
}

#[tokio::test]
async fn new_collection_clears_selection_and_panels() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("old")));
    workbench.select_cluster(ClusterIndex(1)).await.expect("select");

    let set = questions(2);
    service.push_sample(ok(set.clone()));
    service.push_clustering(ok(clustering(&set, &[2])));
    workbench.load_sample().await.expect("reload");

    let snapshot = workbench.snapshot().await;
    assert_eq!(snapshot.selected, None);
    assert_eq!(snapshot.summary, None);
    assert_eq!(*renderer.active.lock().unwrap(), None);
    assert!(renderer.detail.lock().unwrap().is_none());
    assert_eq!(renderer.panel(), PanelState::Hidden);

    assert!(workbench.regenerate().await.expect("no-op").is_none());
    assert_eq!(service.summarize_calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn stale_summary_response_is_dropped() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(delayed(5, ok(summary("slow cluster one"))));
    service.push_summary(delayed(1, ok(summary("fast cluster two"))));

    let slow = {
        let workbench = workbench.clone();
        tokio::spawn(async move { workbench.select_cluster(ClusterIndex(0)).await })
    };
    tokio::task::yield_now().await;
    let fast = workbench
        .select_cluster(ClusterIndex(1))
        .await
        .expect("fast")
        .expect("exists");
    let slow = slow.await.expect("join").expect("slow").expect("exists");

    assert!(matches!(fast, Completion::Applied(_)));
    assert_eq!(slow, Completion::Superseded);
    match renderer.panel() {
        PanelState::Shown(panel) => assert_eq!(panel.summary, "fast cluster two"),
        other => panic!("unexpected panel {other:?}"),
    }
    assert_eq!(
        workbench.snapshot().await.summary,
        Some(summary("fast cluster two"))
    );
}

#[tokio::test(start_paused = true)]
async fn stale_clustering_response_is_dropped() {
    let (renderer, service, workbench) = harness();
    let first = questions(6);
    let second = questions(2);
    service.push_clustering(delayed(5, ok(clustering(&first, &[3, 3]))));
    service.push_clustering(delayed(1, ok(clustering(&second, &[1, 1]))));

    let slow = {
        let workbench = workbench.clone();
        let first = first.clone();
        tokio::spawn(async move { workbench.cluster(first).await })
    };
    tokio::task::yield_now().await;
    let fast = workbench.cluster(second).await.expect("fast");
    let slow = slow.await.expect("join").expect("slow");

    assert!(matches!(fast, Completion::Applied(_)));
    assert_eq!(slow, Completion::Superseded);
    let snapshot = workbench.snapshot().await;
    assert_eq!(snapshot.question_count, 2);
    assert_eq!(snapshot.total_questions, 2);
    assert_eq!(renderer.lists.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn unsupported_extension_is_rejected_without_reading() {
    let (renderer, service, workbench) = harness();

    let err = workbench
        .load_file(Some(Path::new("/definitely/not/here/data.csv")))
        .await
        .expect_err("csv rejected");

    assert!(matches!(err, WorkbenchError::UnsupportedFormat { ref filename } if filename == "data.csv"));
    let status = renderer.last_status();
    assert_eq!(status.kind, StatusKind::Error);
    assert_eq!(status.message, "Only JSON files are currently supported");
    assert_eq!(renderer.statuses.lock().unwrap().len(), 1);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn dismissed_picker_does_nothing() {
    let (renderer, service, workbench) = harness();

    assert!(workbench.load_file(None).await.expect("no-op").is_none());
    assert!(renderer.statuses.lock().unwrap().is_empty());
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn malformed_file_reports_error_and_keeps_state() {
    let (renderer, service, workbench) = loaded_harness().await;
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("tempfile");
    file.write_all(b"{ not json").expect("write");

    let err = workbench
        .load_file(Some(file.path()))
        .await
        .expect_err("malformed");

    assert_eq!(err.category(), ErrorCategory::Validation);
    assert!(renderer.last_status().message.starts_with("Failed to read file"));
    assert_eq!(service.calls(), vec![Call::Sample, Call::Cluster(5)]);
    assert_eq!(workbench.snapshot().await.clusters.len(), 2);
}

#[tokio::test]
async fn json_file_is_parsed_and_clustered() {
    let (renderer, service, workbench) = harness();
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .expect("tempfile");
    file.write_all(
        br#"[{"timestamp":"10:00","question":"What is ownership?"},
            {"timestamp":"10:01","question":"Why move semantics?","answer":"Lecture 3"}]"#,
    )
    .expect("write");
    let set = vec![
        QuestionRecord::new("10:00", "What is ownership?", None),
        QuestionRecord::new("10:01", "Why move semantics?", Some("Lecture 3".into())),
    ];
    service.push_clustering(ok(clustering(&set, &[2])));

    let outcome = workbench
        .load_file(Some(file.path()))
        .await
        .expect("loaded")
        .expect("file given");

    assert_eq!(outcome.applied().map(|s| s.cluster_count), Some(1));
    assert_eq!(service.calls(), vec![Call::Cluster(2)]);
    assert_eq!(renderer.statuses.lock().unwrap()[0].message, "Processing file...");
}

#[tokio::test]
async fn copy_answer_exports_rendered_answer() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("copy me")));
    workbench.select_cluster(ClusterIndex(0)).await.expect("select");

    workbench.copy_answer().await.expect("copied");

    assert_eq!(
        renderer.clipboard.lock().unwrap().as_deref(),
        Some("copy me answer\nsecond line")
    );
    assert_eq!(renderer.last_status().message, "Copied answer to clipboard");
}

#[tokio::test]
async fn copy_failure_is_reported_independently_of_summary() {
    let (renderer, service, workbench) = loaded_harness().await;
    service.push_summary(ok(summary("copy me")));
    workbench.select_cluster(ClusterIndex(0)).await.expect("select");
    *renderer.clipboard_broken.lock().unwrap() = true;

    let err = workbench.copy_answer().await.expect_err("copy fails");

    assert_eq!(err.category(), ErrorCategory::Clipboard);
    let status = renderer.last_status();
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.message.starts_with("Failed to copy answer"));
    assert!(matches!(renderer.panel(), PanelState::Shown(_)));
}

#[tokio::test]
async fn copy_without_rendered_answer_reports_error() {
    let (renderer, _service, workbench) = loaded_harness().await;

    assert!(matches!(
        workbench.copy_answer().await,
        Err(WorkbenchError::NothingToCopy)
    ));
    assert_eq!(renderer.last_status().message, "No answer to copy");
    assert!(renderer.clipboard.lock().unwrap().is_none());
}
