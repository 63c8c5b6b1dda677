//! 데이터베이스 초기화 도구
//!
//! 서버와 같은 환경 설정으로 MongoDB에 연결한 뒤 샘플 사용자 5명을 적재합니다.
//! 이미 존재하는 ID는 건너뛰므로 반복 실행해도 기존 데이터는 변경되지 않습니다.
//!
//! `add-user` 명령은 카운터에서 새 ID를 할당받아 사용자 한 명을 추가합니다.
//!
//! ```bash
//! PROFILE=dev cargo run --bin setup_database
//! PROFILE=dev cargo run --bin setup_database -- add-user carol.white carol@email.com 1990-06-01
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use env_logger::Env;
use log::error;
use serde_json::json;
use user_management_api::config::{DatabaseConfig, SecurityConfig};
use user_management_api::core::errors::{AppError, AppResult};
use user_management_api::db::Database;
use user_management_api::db::seed::{sample_users, seed_users};
use user_management_api::repositories::users::UserRepository;
use user_management_api::services::users::UserService;
use user_management_api::validation::validate_create_user;
use user_management_api::utils::display_terminal::{
    print_boxed_title, print_seed_summary, print_step_complete, print_step_start, print_sub_task,
    print_usage_hints,
};

#[actix_web::main]
async fn main() -> ExitCode {
    load_env_file();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None | Some("seed") => setup_database().await,
        Some("add-user") => add_user(&args[1..]).await,
        Some(other) => Err(AppError::ConfigError(format!(
            "unknown command '{}' (expected: seed | add-user <username> <email> <birthdate>)",
            other
        ))),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ Database setup failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn setup_database() -> AppResult<()> {
    print_boxed_title("Database Setup");

    let database_name = DatabaseConfig::database_name();
    let collection_name = DatabaseConfig::collection_name();

    print_step_start(1, "Connecting to MongoDB");
    let database = Database::new(&DatabaseConfig::uri(), &database_name).await?;
    print_sub_task("database", database.database_name());
    print_sub_task("collection", &collection_name);
    print_step_complete(1, "Connected", 1);

    print_step_start(2, "Inserting sample users");
    let repository = UserRepository::new(&database, &collection_name);
    let users = sample_users();
    let report = seed_users(&repository, &users).await?;

    for username in &report.inserted {
        print_sub_task(username, "inserted");
    }
    for username in &report.skipped {
        print_sub_task(username, "already exists, skipped");
    }
    print_step_complete(2, "Sample users processed", users.len());

    print_seed_summary(report.inserted.len(), report.skipped.len());
    print_usage_hints(SecurityConfig::api_key().ok().as_deref());

    Ok(())
}

async fn add_user(args: &[String]) -> AppResult<()> {
    let [username, email, birthdate] = args else {
        return Err(AppError::ConfigError(
            "usage: setup_database add-user <username> <email> <birthdate>".to_string(),
        ));
    };

    let request = validate_create_user(json!({
        "username": username,
        "email": email,
        "birthdate": birthdate,
    }))?;

    print_boxed_title("Add User");

    print_step_start(1, "Connecting to MongoDB");
    let database = Database::new(&DatabaseConfig::uri(), &DatabaseConfig::database_name()).await?;
    let repository = UserRepository::new(&database, &DatabaseConfig::collection_name());
    print_step_complete(1, "Connected", 1);

    print_step_start(2, "Creating user");
    let service = UserService::new(Arc::new(repository));
    let user = service.create_user(request).await?;
    print_sub_task(&user.username, &format!("created with id {}", user.id));
    print_step_complete(2, "User created", 1);

    Ok(())
}

fn load_env_file() {
    let filename = match std::env::var("PROFILE").as_deref() {
        Ok("prod") => ".env.prod",
        Ok("dev") => ".env.dev",
        _ => ".env",
    };
    dotenv::from_filename(filename).ok();
}
