mod common;

use common::{fake_image, spawn_server};
use gallery0::store::record::ImageRecord;
use reqwest::StatusCode;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::net::SocketAddr;
use uuid::Uuid;

async fn upload(
    addr: SocketAddr,
    filename: &str,
    mimetype: &str,
    bytes: Vec<u8>,
) -> reqwest::Response {
    let part = Part::bytes(bytes)
        .file_name(filename.to_string())
        .mime_str(mimetype)
        .unwrap();
    let form = Form::new().part("image", part);

    reqwest::Client::new()
        .post(format!("http://{addr}/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap()
}

async fn list(addr: SocketAddr) -> Vec<ImageRecord> {
    reqwest::get(format!("http://{addr}/images"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let addr = spawn_server().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn upload_list_delete_lifecycle() {
    let addr = spawn_server().await;

    // 1 KB PNG named a.png
    let response = upload(addr, "a.png", "image/png", fake_image(1024)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let record: ImageRecord = response.json().await.unwrap();
    assert_eq!(record.filename, "a.png");
    assert_eq!(record.mimetype, "image/png");
    assert_eq!(record.size, 1024);

    let listed = list(addr).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, record.id);

    let response = reqwest::Client::new()
        .delete(format!("http://{addr}/images/{}", record.id))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], record.id.to_string());

    assert!(list(addr).await.is_empty());
}

#[tokio::test]
async fn disallowed_mime_type_is_rejected() {
    let addr = spawn_server().await;

    let response = upload(addr, "notes.txt", "text/plain", fake_image(64)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("text/plain"), "got: {message}");

    assert!(list(addr).await.is_empty());
}

#[tokio::test]
async fn four_megabyte_upload_is_rejected() {
    let addr = spawn_server().await;

    let response = upload(addr, "big.jpg", "image/jpeg", vec![0u8; 4 * 1024 * 1024]).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "File exceeds 3 MB limit.");

    assert!(list(addr).await.is_empty());
}

#[tokio::test]
async fn exactly_three_megabytes_is_accepted() {
    let addr = spawn_server().await;

    let response = upload(addr, "edge.jpg", "image/jpeg", vec![0u8; 3 * 1024 * 1024]).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let record: ImageRecord = response.json().await.unwrap();
    assert_eq!(record.size, 3 * 1024 * 1024);
}

#[tokio::test]
async fn missing_file_field_is_rejected() {
    let addr = spawn_server().await;

    let form = Form::new().text("comment", "no file here");
    let response = reqwest::Client::new()
        .post(format!("http://{addr}/upload"))
        .multipart(form)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("No file"));
}

#[tokio::test]
async fn listing_is_newest_first() {
    let addr = spawn_server().await;

    for name in ["one.png", "two.png", "three.png"] {
        let response = upload(addr, name, "image/png", fake_image(256)).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let listed = list(addr).await;
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0].filename, "three.png");
    assert_eq!(listed[1].filename, "two.png");
    assert_eq!(listed[2].filename, "one.png");
    // record i was uploaded after record i+1
    assert!(listed[0].uploaded_at >= listed[1].uploaded_at);
    assert!(listed[1].uploaded_at >= listed[2].uploaded_at);
}

#[tokio::test]
async fn delete_unknown_id_is_404_and_leaves_store_alone() {
    let addr = spawn_server().await;

    upload(addr, "keep.png", "image/png", fake_image(128)).await;

    let response = reqwest::Client::new()
        .delete(format!("http://{addr}/images/{}", Uuid::new_v4()))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("No image found"));

    let listed = list(addr).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].filename, "keep.png");
}

#[tokio::test]
async fn stored_data_round_trips_byte_for_byte() {
    let addr = spawn_server().await;

    let original = fake_image(70_000);
    let response = upload(addr, "rt.jpg", "image/jpeg", original.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let listed = list(addr).await;
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].decode_data().unwrap(), original);
}
