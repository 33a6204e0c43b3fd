//! Server initialization: database, sessions, CORS and first-run data.

use axum::http::{header, HeaderValue, Method};
use chrono::{Datelike, Utc};
use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_http::cors::CorsLayer;
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::{
    model::{api::Status, user::UserRole},
    server::{
        config::Config,
        data::{
            budget::BudgetRepository, budget_owner::BudgetOwnerRepository,
            category::CategoryRepository, user::UserRepository,
            user_access::UserAccessRepository,
        },
        error::{config::ConfigError, AppError},
        model::{
            budget::CreateBudgetParams, budget_owner::CreateBudgetOwnerParams,
            category::CreateCategoryParams, user::CreateUserParams,
        },
        service::{budget::BudgetService, user::UserService},
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the application database.
///
/// Sessions expire after seven days without activity. The cookie is `HttpOnly` and
/// `SameSite=Lax`; `COOKIE_SECURE` controls the `Secure` flag.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the API router
/// - `Err(AppError::SqlxErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let session_store = SqliteStore::new(pool.clone());

    session_store.migrate().await?;

    Ok(SessionManagerLayer::new(session_store)
        .with_secure(config.cookie_secure)
        .with_http_only(true)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7))))
}

/// Allows credentialed requests from the configured browser origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .cors_origin
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "CORS_ORIGIN".to_string(),
            value: config.cors_origin.clone(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

/// Ensures a super admin exists.
///
/// When none exists and `ADMIN_EMAIL`/`ADMIN_PASSWORD` are configured the bootstrap
/// admin is created, otherwise a warning is logged since nobody could manage users.
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    if UserRepository::new(db).super_admin_exists().await? {
        return Ok(());
    }

    let Some(seed) = &config.admin_seed else {
        tracing::warn!(
            "No super admin exists; set ADMIN_EMAIL and ADMIN_PASSWORD to create one on startup"
        );
        return Ok(());
    };

    let admin = UserService::new(db)
        .create(CreateUserParams {
            email: seed.email.clone(),
            name: seed.name.clone(),
            password: seed.password.clone(),
            role: UserRole::SuperAdmin,
            status: Status::Active,
        })
        .await?;

    tracing::info!("Created super admin {}", admin.email);

    Ok(())
}

const DEMO_CATEGORIES: [(&str, &str); 6] = [
    ("Operational", "Day-to-day operating expenses"),
    ("Marketing", "Campaigns, events and promotion"),
    ("Salaries", "Payroll and benefits"),
    ("Travel", "Business travel and accommodation"),
    ("Equipment", "Hardware, tools and furniture"),
    ("Training", "Courses, certifications and conferences"),
];

const DEMO_BUDGET_OWNERS: [(&str, &str); 4] = [
    ("Information Technology", "IT"),
    ("Marketing", "MKT"),
    ("Human Resources", "HR"),
    ("Finance", "FIN"),
];

const DEMO_BUDGET_AMOUNT: f64 = 100_000_000.0;
const DEMO_USER_EMAIL: &str = "user@dashfinance.com";
const DEMO_USER_PASSWORD: &str = "user12345";

/// Seeds demo master data, a budget per owner for the current year and a demo user.
///
/// Records that already exist are left untouched, so running this on every startup is
/// safe. Budgets need a creator, so nothing beyond master data is seeded until a super
/// admin exists.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), AppError> {
    let category_repo = CategoryRepository::new(db);
    for (name, description) in DEMO_CATEGORIES {
        if category_repo.find_by_name_ignore_case(name).await?.is_none() {
            category_repo
                .create(CreateCategoryParams {
                    name: name.to_string(),
                    description: Some(description.to_string()),
                    status: Status::Active,
                })
                .await?;
        }
    }

    let owner_repo = BudgetOwnerRepository::new(db);
    let mut owner_ids = Vec::with_capacity(DEMO_BUDGET_OWNERS.len());
    for (name, code) in DEMO_BUDGET_OWNERS {
        let owner = match owner_repo.find_by_code(code).await? {
            Some(owner) => owner,
            None => {
                owner_repo
                    .create(CreateBudgetOwnerParams {
                        name: name.to_string(),
                        code: Some(code.to_string()),
                        description: None,
                        status: Status::Active,
                    })
                    .await?
            }
        };
        owner_ids.push(owner.id);
    }

    let user_repo = UserRepository::new(db);
    let Some(admin) = user_repo.find_first_super_admin().await? else {
        tracing::warn!("Skipping demo budgets and user: no super admin exists");
        return Ok(());
    };

    let year = Utc::now().year();
    let budget_repo = BudgetRepository::new(db);
    for owner_id in &owner_ids {
        if budget_repo
            .find_by_owner_and_year(*owner_id, year)
            .await?
            .is_none()
        {
            BudgetService::new(db)
                .create(CreateBudgetParams {
                    budget_owner_id: *owner_id,
                    year,
                    amount_planned: DEMO_BUDGET_AMOUNT,
                    amount_revised: None,
                    created_by: admin.id,
                })
                .await?;
        }
    }

    if user_repo.find_by_email(DEMO_USER_EMAIL).await?.is_none() {
        let user = UserService::new(db)
            .create(CreateUserParams {
                email: DEMO_USER_EMAIL.to_string(),
                name: "Demo User".to_string(),
                password: DEMO_USER_PASSWORD.to_string(),
                role: UserRole::User,
                status: Status::Active,
            })
            .await?;

        if let Some(first_owner) = owner_ids.first() {
            UserAccessRepository::new(db)
                .grant(user.id, *first_owner)
                .await?;
        }

        tracing::info!("Created demo user {}", DEMO_USER_EMAIL);
    }

    tracing::info!("Demo data seeded");

    Ok(())
}
