//! End-to-end pipeline scenarios over a fixture transport

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use xref_fetch::{ChapterTransport, TransportError};
use xref_pipeline::{ContentChanged, ContentEvents, PipelineConfig, XrefPipeline};
use xref_render::{CardSize, HovercardState, Point, RenderResult, Viewport};

/// In-memory transport serving canned chapter JSON and counting requests
struct FixtureTransport {
    responses: HashMap<String, Vec<u8>>,
    calls: Mutex<HashMap<String, usize>>,
}

impl FixtureTransport {
    fn new() -> Self {
        let mut responses = HashMap::new();
        responses.insert(
            "data/newtestament/1-corinthians/13.json".to_string(),
            chapter_json(13),
        );
        responses.insert(
            "data/newtestament/revelation/20.json".to_string(),
            chapter_json(15),
        );
        responses.insert("data/newtestament/john/3.json".to_string(), chapter_json(36));
        Self {
            responses,
            calls: Mutex::new(HashMap::new()),
        }
    }

    fn calls_for(&self, url: &str) -> usize {
        *self.calls.lock().unwrap().get(url).unwrap_or(&0)
    }

    fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

fn chapter_json(verse_count: u32) -> Vec<u8> {
    let verses: Vec<String> = (1..=verse_count)
        .map(|n| format!(r#"{{"v":{n},"t":"verse {n} text"}}"#))
        .collect();
    format!(r#"{{"verses":[{}]}}"#, verses.join(",")).into_bytes()
}

#[async_trait]
impl ChapterTransport for FixtureTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        *self.calls.lock().unwrap().entry(url.to_string()).or_insert(0) += 1;
        self.responses
            .get(url)
            .cloned()
            .ok_or(TransportError::Status(404))
    }
}

fn pipeline_over(transport: Arc<FixtureTransport>) -> XrefPipeline {
    XrefPipeline::new(PipelineConfig::default(), transport)
}

#[tokio::test]
async fn full_range_citation_previews_without_truncation() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = pipeline_over(Arc::clone(&transport));

    // Scanning the prose isolates the citation and binds it as a trigger.
    let triggers = pipeline.scan_and_bind("see 1 Cor 13:4-7");
    assert_eq!(triggers, vec!["1 Cor 13:4-7".to_string()]);

    let Some(RenderResult::Preview(preview)) = pipeline.preview(&triggers[0]).await else {
        panic!("expected preview");
    };
    assert_eq!(preview.title, "1 Corinthians 13:4\u{2013}7");
    let numbers: Vec<u32> = preview.verses.iter().map(|v| v.number).collect();
    assert_eq!(numbers, vec![4, 5, 6, 7]);
    assert_eq!(
        preview.deep_link,
        "/newtestament/chapter.html?book=1-corinthians&ch=13#v4"
    );
    assert_eq!(
        transport.calls_for("data/newtestament/1-corinthians/13.json"),
        1
    );
}

#[tokio::test]
async fn disjoint_segments_share_one_fetch() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = pipeline_over(Arc::clone(&transport));

    let results = pipeline.preview_all("Rev 20:3,8").await;
    assert_eq!(results.len(), 2);

    let previews: Vec<_> = results
        .iter()
        .map(|r| match r {
            RenderResult::Preview(p) => p,
            RenderResult::Error { message } => panic!("unexpected error: {message}"),
        })
        .collect();
    assert_eq!(previews[0].title, "Revelation 20:3");
    assert_eq!(previews[1].title, "Revelation 20:8");
    assert_eq!(previews[1].verses[0].text, "verse 8 text");

    assert_eq!(transport.calls_for("data/newtestament/revelation/20.json"), 1);
}

#[tokio::test]
async fn unknown_book_is_not_a_citation() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = pipeline_over(Arc::clone(&transport));

    // Nothing to linkify, nothing to preview, and no network traffic.
    assert!(pipeline.scan_and_bind("compare Xyz 9:9 here").is_empty());
    assert_eq!(pipeline.preview("Xyz 9:9").await, None);
    assert_eq!(transport.total_calls(), 0);
}

#[tokio::test]
async fn concurrent_hovers_on_one_chapter_share_the_fetch() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = pipeline_over(Arc::clone(&transport));

    let (a, b) = tokio::join!(
        pipeline.preview("John 3:16-18"),
        pipeline.preview("John 3:1")
    );

    let Some(RenderResult::Preview(first)) = a else {
        panic!("expected preview");
    };
    let Some(RenderResult::Preview(second)) = b else {
        panic!("expected preview");
    };
    let first_numbers: Vec<u32> = first.verses.iter().map(|v| v.number).collect();
    assert_eq!(first_numbers, vec![16, 17, 18]);
    assert_eq!(second.verses[0].number, 1);

    assert_eq!(transport.calls_for("data/newtestament/john/3.json"), 1);
}

#[tokio::test]
async fn missing_chapter_renders_inline_error_and_retries() {
    struct FlakyTransport {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ChapterTransport for FlakyTransport {
        async fn get(&self, _url: &str) -> Result<Vec<u8>, TransportError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                Err(TransportError::Transport("offline".to_string()))
            } else {
                Ok(chapter_json(36))
            }
        }
    }

    let transport = Arc::new(FlakyTransport {
        calls: AtomicUsize::new(0),
    });
    let pipeline = XrefPipeline::new(PipelineConfig::default(), transport.clone());

    // First hover: offline, surfaced as the uniform inline message.
    let first = pipeline.preview("John 3:16").await;
    assert_eq!(first, Some(RenderResult::not_found()));

    // The user hovering again is the retry mechanism.
    let Some(RenderResult::Preview(preview)) = pipeline.preview("John 3:16").await else {
        panic!("expected preview after retry");
    };
    assert_eq!(preview.verses[0].number, 16);
    assert_eq!(transport.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn hover_flow_drives_the_single_hovercard() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = pipeline_over(transport);

    let anchor = Point { x: 200, y: 300 };
    let card = CardSize {
        width: 420,
        height: 180,
    };
    let viewport = Viewport {
        width: 1280,
        height: 800,
    };

    assert_eq!(pipeline.hovercard_state(), HovercardState::Hidden);
    assert!(pipeline.hover("John 3:16", anchor, card, viewport).await);
    assert_eq!(pipeline.hovercard_state(), HovercardState::Showing);
    let content = pipeline.hovercard_content().unwrap();
    assert!(content.contains("John 3:16"));

    // A second hover replaces the card; only one instance exists.
    assert!(pipeline.hover("Rev 20:3,8", anchor, card, viewport).await);
    let content = pipeline.hovercard_content().unwrap();
    assert!(content.contains("Revelation 20:3"));

    pipeline.dismiss();
    assert_eq!(pipeline.hovercard_state(), HovercardState::Hidden);
}

#[tokio::test]
async fn content_events_rebind_the_registry() {
    let transport = Arc::new(FixtureTransport::new());
    let pipeline = Arc::new(pipeline_over(transport));
    let events = ContentEvents::default();
    let watcher = pipeline.watch(&events);

    events.emit(ContentChanged {
        triggers: vec![
            "John 3:16".to_string(),
            "Rev 20:3,8".to_string(),
            "not a citation".to_string(),
        ],
    });

    // The watcher runs on its own task; poll briefly for the rebind.
    let mut bound = 0;
    for _ in 0..50 {
        bound = pipeline.bound_triggers();
        if bound == 2 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
    assert_eq!(bound, 2);

    drop(events);
    watcher.await.unwrap();
}
