#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, Method, Request};
use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use http_body_util::BodyExt;
use tower::ServiceExt;

use folio_api::config::ServerConfig;
use folio_api::router::build_app_router;
use folio_api::state::AppState;
use folio_core::education::{Certification, Degree, EducationEntry};
use folio_core::experience::ExperienceRecord;
use folio_core::profile::{ContactInfo, PersonalInfo};
use folio_core::project::{ProjectCategory, ProjectRecord, ProjectStatus};
use folio_core::skill::{SkillCategory, SkillLevel, SkillRecord};
use folio_core::store::RecordStore;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Test `ServerConfig`: local CORS origin and no contact delay.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec![HeaderValue::from_static(TEST_ORIGIN)],
        request_timeout_secs: 30,
        data_dir: "data".into(),
        contact_delay_ms: 0,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn project(
    id: &str,
    title: &str,
    category: ProjectCategory,
    status: ProjectStatus,
    start: NaiveDate,
    technologies: &[&str],
) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} short description"),
        long_description: format!("{title} long description"),
        image: format!("/images/{id}.png"),
        gallery_images: Vec::new(),
        technologies: technologies.iter().map(|t| t.to_string()).collect(),
        category,
        status,
        live_url: None,
        github_url: None,
        featured: false,
        start_date: start,
        end_date: None,
    }
}

/// Ten projects across every category. `trade-bot` is the only one tagged
/// "Trading Bots"; `shop` and `trade-bot` have galleries.
pub fn sample_projects() -> Vec<ProjectRecord> {
    use ProjectCategory::*;
    use ProjectStatus::*;

    let mut shop = project(
        "shop",
        "Storefront",
        Web,
        Completed,
        date(2023, 1, 10),
        &["React", "TypeScript", "Node.js", "PostgreSQL", "Redis", "Docker"],
    );
    shop.live_url = Some("https://shop.example.com".into());
    shop.gallery_images = vec!["/g/shop-1.png".into(), "/g/shop-2.png".into()];
    shop.featured = true;
    shop.end_date = Some(date(2023, 6, 30));

    let mut trade_bot = project(
        "trade-bot",
        "Arbitrage Engine",
        Ai,
        InProgress,
        date(2024, 3, 1),
        &["Python", "Trading Bots"],
    );
    trade_bot.live_url = Some("https://www.trade.example.com".into());
    trade_bot.gallery_images = vec!["/g/trade-1.png".into()];
    trade_bot.featured = true;

    let mut wallet = project(
        "wallet",
        "Cold Wallet",
        Blockchain,
        Completed,
        date(2022, 5, 1),
        &["Rust", "Solidity"],
    );
    wallet.end_date = Some(date(2022, 11, 1));

    vec![
        shop,
        trade_bot,
        wallet,
        project("fit-app", "fitness tracker", Mobile, Completed, date(2021, 2, 1), &["Flutter"]),
        project("ci-kit", "CI Toolkit", Devops, Planned, date(2025, 1, 1), &["Docker", "Kubernetes"]),
        project("blog", "Blog Engine", Web, Completed, date(2020, 8, 15), &["Next.js"]),
        project("chat", "Chat Assistant", Ai, Planned, date(2024, 9, 1), &["Python", "LLM"]),
        project("dex", "DEX Dashboard", Blockchain, InProgress, date(2023, 11, 1), &["React", "Web3"]),
        project("ride", "Ride Share", Mobile, InProgress, date(2022, 1, 20), &["Kotlin"]),
        project("infra", "Infra Monitor", Devops, Completed, date(2021, 10, 5), &["Grafana"]),
    ]
}

fn skill(id: &str, name: &str, category: SkillCategory, level: SkillLevel, years: f64) -> SkillRecord {
    SkillRecord {
        id: id.to_string(),
        name: name.to_string(),
        category,
        level,
        years_of_experience: years,
        description: format!("{name} experience"),
    }
}

pub fn sample_skills() -> Vec<SkillRecord> {
    use SkillCategory::*;
    use SkillLevel::*;

    vec![
        skill("css", "CSS", Frontend, Intermediate, 2.0),
        skill("react", "React", Frontend, Expert, 5.0),
        skill("rust", "Rust", Backend, Advanced, 3.0),
        skill("vue", "Vue", Frontend, Advanced, 2.5),
        skill("docker", "Docker", Devops, Expert, 4.5),
    ]
}

pub fn sample_experience() -> Vec<ExperienceRecord> {
    vec![ExperienceRecord {
        id: "acme".to_string(),
        company: "Acme".to_string(),
        position: "Engineer".to_string(),
        location: "Remote".to_string(),
        start_date: date(2020, 1, 1),
        end_date: Some(date(2022, 1, 1)),
        current: false,
        description: "Built things".to_string(),
        responsibilities: vec!["Shipping".to_string()],
        technologies: vec!["Rust".to_string()],
        achievements: Vec::new(),
    }]
}

pub fn sample_education() -> Vec<EducationEntry> {
    vec![
        EducationEntry::Degree(Degree {
            id: "bsc".to_string(),
            institution: "State University".to_string(),
            degree: "BSc".to_string(),
            field: "Computer Science".to_string(),
            start_date: date(2014, 9, 1),
            end_date: Some(date(2018, 6, 1)),
            current: false,
            description: String::new(),
            gpa: None,
            location: "Springfield".to_string(),
            website: None,
        }),
        EducationEntry::Certification(Certification {
            id: "cka".to_string(),
            name: "Certified Kubernetes Administrator".to_string(),
            issuer: "CNCF".to_string(),
            issue_date: date(2023, 4, 1),
            expiry_date: None,
            credential_id: None,
            credential_url: None,
            description: String::new(),
        }),
    ]
}

pub fn sample_profile() -> PersonalInfo {
    PersonalInfo {
        name: "Sam Doe".to_string(),
        title: "Full-stack developer".to_string(),
        bio: "Long bio".to_string(),
        short_bio: "Short bio".to_string(),
        profile_image: "/images/me.png".to_string(),
        resume_url: "/resume.pdf".to_string(),
        contact: ContactInfo {
            email: "sam@example.com".to_string(),
            github: "https://github.com/example".to_string(),
            discord: "sam#0001".to_string(),
            phone: None,
            location: Some("Earth".to_string()),
            linkedin: None,
            twitter: None,
            website: None,
        },
    }
}

pub fn sample_store() -> RecordStore {
    RecordStore::from_records(
        sample_projects(),
        sample_skills(),
        sample_experience(),
        sample_education(),
        Some(sample_profile()),
    )
    .expect("sample records are consistent")
}

/// Build the full application router over the given store.
pub fn build_app_with(store: RecordStore) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Build the full application router over the sample store.
pub fn build_test_app() -> Router {
    build_app_with(sample_store())
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
