// Whole-service flow: catalogs and passes on disk, a simulation over HTTP, then the reports.

use crate::modules::passes::adapters::outbound::json_file_pass_source::{
    JsonFilePassSource, write_passes,
};
use crate::modules::passes::adapters::outbound::text_loaders::{
    load_satellite_catalog, load_stations,
};
use crate::modules::passes::core::filter::PassFilter;
use crate::modules::passes::core::ports::PassSource;
use crate::modules::passes::use_cases::access_time::access_time;
use crate::modules::scheduling::use_cases::run_simulation::command::RunSimulation;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::passes::make_pass;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::rstest;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

const TLES: &str = "ISS (ZARYA)\n\
1 25544U 98067A   17193.19513889  .00001585  00000-0  31365-4 0  9996\n\
2 25544  51.6417 239.8830 0005491  15.9961 118.6113 15.54200416 65530\n\
XW-2D\n\
1 40907U 15049J   17192.53573606  .00000798  00000-0  46540-4 0  9991\n\
2 40907  97.4515 197.2956 0016027 124.7938 235.4805 15.14668467 99926\n";

const STATIONS: &str = "Valparaiso University\n41.4639\n-87.0439\n245\n\
KB9JHU\n39.1665\n-76.8970\n50\n";

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
}

fn post_simulation(body: &str) -> Request<Body> {
    Request::post("/simulations")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[rstest]
#[tokio::test]
async fn it_should_simulate_from_files_and_report_over_http() {
    let dir = TempDir::new().unwrap();
    let passes = vec![
        make_pass("Valparaiso University", "ISS (ZARYA)", 0, 10),
        make_pass("Valparaiso University", "XW-2D", 5, 15),
        make_pass("Valparaiso University", "XW-2D", 30, 40),
        make_pass("KB9JHU", "XW-2D", 5, 15),
        make_pass("KB9JHU", "ISS (ZARYA)", 12, 20),
    ];
    let passes_path = dir.path().join("passes.json");
    let tle_path = dir.path().join("amateur.tle");
    let gs_path = dir.path().join("stations.txt");
    write_passes(&passes_path, &passes).await.unwrap();
    tokio::fs::write(&tle_path, TLES).await.unwrap();
    tokio::fs::write(&gs_path, STATIONS).await.unwrap();

    let source = JsonFilePassSource::new(&passes_path);
    let access = access_time(&source.load(&PassFilter::all()).await.unwrap());
    assert_eq!(access.total_seconds, 2880.0);

    let state = AppState::new(
        Arc::new(source),
        load_stations(&gs_path).await.unwrap(),
        load_satellite_catalog(&tle_path).await.unwrap(),
        RunSimulation::default(),
    );
    let app = router(state);

    let (status, created) = send(&app, post_simulation(r#"{"scheduler":"end_start"}"#)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["submitted"], 3);
    assert_eq!(created["accepted"], 3);
    let run_id = created["run_id"].as_str().unwrap().to_string();

    let (status, second) = send(
        &app,
        post_simulation(r#"{"scheduler":"duration","partitioned":true}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["submitted"], 5);
    assert_eq!(second["accepted"], 3);
    assert_ne!(second["run_id"], created["run_id"]);

    let (status, bookings) = send(
        &app,
        Request::get(format!("/simulations/{run_id}/clients/KB9JHU/bookings"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let satellites: Vec<&str> = bookings
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["satellite"].as_str().unwrap())
        .collect();
    assert_eq!(satellites, vec!["XW-2D"]);

    let (status, summary) = send(
        &app,
        Request::get(format!(
            "/simulations/{run_id}/clients/Valparaiso%20University/summary"
        ))
        .body(Body::empty())
        .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["bookings"], 2);
    assert_eq!(summary["busy_seconds"], 1200.0);
    assert_eq!(summary["value"]["SNC"], 1200.0);
}

#[rstest]
#[tokio::test]
async fn it_should_report_an_unknown_satellite_as_unprocessable() {
    let dir = TempDir::new().unwrap();
    let passes_path = dir.path().join("passes.json");
    write_passes(&passes_path, &[make_pass("KB9JHU", "FUNCUBE-1", 0, 10)])
        .await
        .unwrap();

    let state = AppState::new(
        Arc::new(JsonFilePassSource::new(&passes_path)),
        crate::tests::fixtures::passes::make_profiles(&["KB9JHU"]),
        crate::tests::fixtures::passes::make_catalog(&["XW-2D"]),
        RunSimulation::default(),
    );

    let (status, body) = send(&router(state), post_simulation("{}")).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().contains("FUNCUBE-1"));
}
