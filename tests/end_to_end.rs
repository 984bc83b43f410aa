use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use didyoufeelit::app::{AppContext, FetchError, PipelineError};
use didyoufeelit::cli::commands;
use didyoufeelit::config::Config;
use didyoufeelit::domain::Event;
use didyoufeelit::render::{JsonRenderer, TerminalRenderer};

const FEED: &str = r#"{
  "type": "FeatureCollection",
  "metadata": {"generated": 1462233600000, "title": "USGS Earthquakes", "count": 2},
  "features": [
    {"properties": {"mag": 6.1, "place": "10km NE of Springfield", "felt": 102, "cdi": 5.2, "time": 1462000000000}},
    {"properties": {"mag": 5.0, "place": "Somewhere else", "felt": 7, "cdi": 2.1}}
  ]
}"#;

/// Answer `connections` requests with the same raw response.
async fn serve(response: String, connections: usize) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        for _ in 0..connections {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/fdsnws/event/1/query?format=geojson", addr)
}

fn ok(body: &str) -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    )
}

fn context_for(url: &str) -> AppContext {
    let mut config = Config::default();
    config.fetcher.url = url.to_string();
    AppContext::from_config(config).unwrap()
}

#[tokio::test]
async fn renders_first_event_from_served_feed() {
    let url = serve(ok(FEED), 1).await;
    let ctx = context_for(&url);
    let renderer = TerminalRenderer::new(Vec::new());

    let outcome = commands::fetch_event(&ctx, None, &renderer).await.unwrap();
    assert_eq!(
        outcome.unwrap(),
        Event::new("10km NE of Springfield", 102, "Moderate")
    );

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(
        text,
        "10km NE of Springfield\n102 people felt it\nPerceived strength: Moderate\n"
    );
}

#[tokio::test]
async fn repeated_runs_are_identical() {
    let url = serve(ok(FEED), 2).await;
    let ctx = context_for(&url);

    let first = ctx.pipeline.run(&url).await.unwrap();
    let second = ctx.pipeline.run(&url).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn http_error_is_rendered_as_no_data() {
    let url = serve(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n"
            .to_string(),
        1,
    )
    .await;
    let ctx = context_for(&url);
    let renderer = JsonRenderer::new(Vec::new());

    let outcome = commands::fetch_event(&ctx, Some(url.as_str()), &renderer).await.unwrap();
    assert!(matches!(
        outcome,
        Err(PipelineError::Fetch(FetchError::HttpStatus { code: 500, .. }))
    ));

    let value: serde_json::Value = serde_json::from_slice(&renderer.into_inner()).unwrap();
    assert!(value["event"].is_null());
    assert!(value["reason"].as_str().unwrap().contains("500"));
}

#[tokio::test]
async fn empty_feed_is_a_normal_result() {
    let url = serve(ok(r#"{"features": []}"#), 1).await;
    let ctx = context_for(&url);
    let renderer = TerminalRenderer::new(Vec::new());

    let outcome = commands::fetch_event(&ctx, None, &renderer).await.unwrap();
    assert!(outcome.unwrap_err().is_no_events());

    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(text, "No felt earthquakes in this feed.\n");
}
