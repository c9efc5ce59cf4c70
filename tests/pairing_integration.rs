//! End-to-end tests: file-backed alias tables, the real HTTP oracle client and a live server.

mod common;

use std::time::Duration;

use serde_json::json;

use common::fake_oracle::{FakeOracle, listing};
use common::fixtures::write_data_files;
use common::harness::{TestServerConfig, http_client, read_response, spawn_test_server};

fn file_backed_config(oracle_url: String, data: &common::fixtures::DataFiles) -> TestServerConfig {
    TestServerConfig {
        alias_table_path: Some(data.alias_table.clone()),
        dataset_path: Some(data.dataset.clone()),
        ..TestServerConfig::new(oracle_url)
    }
}

#[tokio::test]
async fn test_ready_reports_file_tables() {
    let fake = FakeOracle::new().spawn().await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .get(format!("{}/ready", server.url()))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "ready");
    assert_eq!(body["components"]["alias_tables"]["exact_aliases"], "file");
    assert_eq!(body["components"]["alias_tables"]["catalog"], "file");
    assert_eq!(body["components"]["liquors"], 5);
    assert_eq!(body["components"]["ingredients"], 4);
    assert_eq!(body["components"]["oracle_url"], fake.url());
}

#[tokio::test]
async fn test_resolve_uses_file_aliases() {
    let fake = FakeOracle::new().spawn().await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .get(format!("{}/v1/resolve", server.url()))
        .query(&[("term", "치즈"), ("kind", "ingredient")])
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "resolved");
    let candidates = body["candidates"].as_array().expect("candidates");
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["entity"]["id"], 1089);
    assert_eq!(candidates[0]["match_type"], "exact_alias");
    assert_eq!(candidates[1]["entity"]["name"], "cheddar_cheese");
    assert_eq!(fake.score_calls(), 0);
}

#[tokio::test]
async fn test_search_finds_best_pair_over_http() {
    let fake = FakeOracle::new()
        .score(652, 1089, 5.5)
        .score(652, 1083, 2.0)
        .score(653, 1089, -1.0)
        .score(653, 1083, 0.5)
        .spawn()
        .await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/search", server.url()))
        .json(&json!({"liquor": "위스키", "ingredient": "치즈"}))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "found");
    assert_eq!(body["attempted"], 4);
    assert_eq!(body["tested_count"], 4);
    assert_eq!(body["best"]["liquor"]["entity"]["name"], "bourbon");
    assert_eq!(body["best"]["ingredient"]["entity"]["name"], "cheese");
    assert_eq!(body["best"]["raw_score"], 5.5);
    assert_eq!(body["best"]["normalized_score"], 95);

    let ranked: Vec<f64> = body["ranked"]
        .as_array()
        .expect("ranked")
        .iter()
        .map(|c| c["raw_score"].as_f64().expect("raw score"))
        .collect();
    assert_eq!(ranked, vec![5.5, 2.0, 0.5, -1.0]);
    assert_eq!(fake.score_calls(), 4);
}

#[tokio::test]
async fn test_search_tolerates_failing_and_slow_pairs() {
    let fake = FakeOracle::new()
        .score(652, 1089, 1.0)
        .fail(653, 1083)
        .slow(652, 1083, Duration::from_secs(3))
        .spawn()
        .await;
    let data = write_data_files();
    let config = TestServerConfig {
        call_timeout: Duration::from_millis(300),
        ..file_backed_config(fake.url(), &data)
    };
    let server = spawn_test_server(config).await.expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/search", server.url()))
        .json(&json!({"liquor": "위스키", "ingredient": "치즈"}))
        .send()
        .await
        .expect("request");
    let (status, _, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(body["attempted"], 4);
    assert_eq!(body["tested_count"], 2);
    assert_eq!(body["ranked"].as_array().expect("ranked").len(), 2);
}

#[tokio::test]
async fn test_search_all_failed_is_unresolvable() {
    let fake = FakeOracle::new()
        .fail(652, 1089)
        .fail(652, 1083)
        .fail(653, 1089)
        .fail(653, 1083)
        .spawn()
        .await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/search", server.url()))
        .json(&json!({"liquor": "위스키", "ingredient": "치즈"}))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 404);
    assert_eq!(header, "unresolvable");
    assert_eq!(body["reason"]["code"], "all_pairs_failed");
    assert_eq!(body["reason"]["attempted"], 4);
    assert_eq!(body["liquor_candidates"].as_array().expect("liquors").len(), 2);
    assert_eq!(body["ingredient_candidates"].as_array().expect("ingredients").len(), 2);
}

#[tokio::test]
async fn test_batch_keeps_request_order() {
    let fake = FakeOracle::new()
        .score(652, 1089, 1.0)
        .score(653, 1089, 6.0)
        .fail(9999, 1089)
        .spawn()
        .await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/batch", server.url()))
        .json(&json!({
            "entity_id": 1089,
            "kind": "ingredient",
            "candidate_ids": [9999, 653, 652]
        }))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "scored");
    assert_eq!(body["succeeded"], 2);

    let results = body["results"].as_array().expect("results");
    let ids: Vec<u64> = results
        .iter()
        .map(|r| r["candidate_id"].as_u64().expect("id"))
        .collect();
    assert_eq!(ids, vec![9999, 653, 652]);
    assert_eq!(results[0]["success"], false);
    assert!(results[0]["error"].as_str().expect("error").contains("500"));
    assert_eq!(results[1]["normalized_score"], 100);
    assert_eq!(results[2]["normalized_score"], 55);
}

#[tokio::test]
async fn test_recommend_uses_oracle_listing() {
    let fake = FakeOracle::new()
        .ingredients(vec![
            listing(1089, "cheese"),
            listing(361, "beef"),
            listing(5555, "truffle"),
        ])
        .score(652, 1089, 1.0)
        .score(652, 361, 2.0)
        .score(652, 5555, 5.9)
        .spawn()
        .await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/recommend", server.url()))
        .json(&json!({"term": "버번", "kind": "liquor", "limit": 2}))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "recommended");
    assert_eq!(body["anchor"]["entity"]["id"], 652);
    assert_eq!(body["partner_kind"], "ingredient");
    assert_eq!(body["partner_source"], "oracle");
    assert_eq!(body["attempted"], 3);
    assert_eq!(body["tested_count"], 3);

    let recommendations = body["recommendations"].as_array().expect("recommendations");
    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0]["partner"]["name"], "truffle");
    assert_eq!(recommendations[1]["partner"]["name"], "beef");
}

#[tokio::test]
async fn test_recommend_falls_back_to_catalog_without_listing() {
    let fake = FakeOracle::new().spawn().await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/recommend", server.url()))
        .json(&json!({"term": "치즈", "kind": "ingredient"}))
        .send()
        .await
        .expect("request");
    let (status, _, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(body["partner_kind"], "liquor");
    assert_eq!(body["partner_source"], "catalog");
    assert_eq!(body["attempted"], 5);
    assert_eq!(fake.score_calls(), 5);
}

#[tokio::test]
async fn test_explain_round_trip() {
    let fake = FakeOracle::new().spawn().await;
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config(fake.url(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/explain", server.url()))
        .json(&json!({"liquor_id": 652, "ingredient_id": 1089, "score": 2.5}))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 200);
    assert_eq!(header, "explained");
    assert_eq!(body["explanation"], "652 pairs with 1089");
    assert_eq!(body["gpt_explanation"], "score 2.5");
}

#[tokio::test]
async fn test_unreachable_oracle_maps_to_bad_gateway() {
    let data = write_data_files();
    let server = spawn_test_server(file_backed_config("http://127.0.0.1:9".to_string(), &data))
        .await
        .expect("server starts");

    let resp = http_client()
        .post(format!("{}/v1/pairings/explain", server.url()))
        .json(&json!({"liquor_id": 652, "ingredient_id": 1089}))
        .send()
        .await
        .expect("request");
    let (status, header, body) = read_response(resp).await;

    assert_eq!(status, 502);
    assert_eq!(header, "oracle_error");
    assert_eq!(body["code"], 502);
}
