//! Authentication service for account registration, login, and token issuance

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::config::Config;
use crate::error::{AppError, AppResult};
use shared::models::{CompanySize, Industry, UserRole};
use shared::validation::{validate_email, validate_password};

/// Authentication service
#[derive(Clone)]
pub struct AuthService {
    db: PgPool,
    jwt_secret: String,
    access_token_expiry: i64,
}

/// Input for registering a new company with its owner account
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterCompanyInput {
    pub email: String,
    pub password: String,
    pub company_name: String,
    pub industry: Industry,
    pub company_size: CompanySize,
    pub description: Option<String>,
    pub website: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

/// Tokens and identity returned after registration or login
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    #[serde(rename = "type")]
    pub token_type: String,
    pub user_id: Uuid,
    pub email: String,
    pub role: UserRole,
    pub company_id: Uuid,
    pub company_name: String,
    pub expires_in: i64,
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub company_id: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// User info from database
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    password_hash: String,
    role: String,
    is_active: bool,
}

impl AuthService {
    /// Create a new AuthService instance
    pub fn new(db: PgPool, config: &Config) -> Self {
        Self {
            db,
            jwt_secret: config.jwt.secret.clone(),
            access_token_expiry: config.jwt.access_token_expiry,
        }
    }

    /// Register a new company with its owner account.
    ///
    /// User and company are created in one transaction so no account can
    /// exist without its company profile.
    pub async fn register(&self, input: RegisterCompanyInput) -> AppResult<AuthResponse> {
        if let Err(message) = validate_email(&input.email) {
            return Err(AppError::Validation {
                field: "email".to_string(),
                message: message.to_string(),
            });
        }
        if let Err(message) = validate_password(&input.password) {
            return Err(AppError::Validation {
                field: "password".to_string(),
                message: message.to_string(),
            });
        }
        if input.company_name.trim().is_empty() {
            return Err(AppError::Validation {
                field: "companyName".to_string(),
                message: "Company name is required".to_string(),
            });
        }

        // Check if email already exists
        let existing =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE email = $1")
                .bind(&input.email)
                .fetch_one(&self.db)
                .await?;

        if existing > 0 {
            return Err(AppError::DuplicateEntry("email".to_string()));
        }

        // Hash password
        let password_hash = hash(&input.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        // Start transaction
        let mut tx = self.db.begin().await?;

        // Create user
        let user_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO users (email, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&input.email)
        .bind(&password_hash)
        .bind(UserRole::Company.as_str())
        .fetch_one(&mut *tx)
        .await?;

        // Create company profile with zeroed aggregates
        let company_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO companies (user_id, name, industry, size, description, website, address, phone)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&input.company_name)
        .bind(input.industry.as_str())
        .bind(input.company_size.as_str())
        .bind(&input.description)
        .bind(&input.website)
        .bind(&input.address)
        .bind(&input.phone)
        .fetch_one(&mut *tx)
        .await?;

        // Commit transaction
        tx.commit().await?;

        // Generate JWT token
        let token = self.generate_token(user_id, company_id, UserRole::Company)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            user_id,
            email: input.email,
            role: UserRole::Company,
            company_id,
            company_name: input.company_name,
            expires_in: self.access_token_expiry,
        })
    }

    /// Authenticate a user with email and password
    pub async fn login(&self, email: &str, password: &str) -> AppResult<AuthResponse> {
        // Find user by email
        let user = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, password_hash, role, is_active
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

        // Check if user is active
        if !user.is_active {
            return Err(AppError::Unauthorized {
                message: "Account is disabled".to_string(),
            });
        }

        // Verify password
        let valid = verify(password, &user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        // Get the owned company
        let (company_id, company_name) = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, name FROM companies WHERE user_id = $1",
        )
        .bind(user.id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Company".to_string()))?;

        let role = UserRole::parse(&user.role).unwrap_or(UserRole::Company);

        // Generate JWT token
        let token = self.generate_token(user.id, company_id, role)?;

        Ok(AuthResponse {
            token,
            token_type: "Bearer".to_string(),
            user_id: user.id,
            email: user.email,
            role,
            company_id,
            company_name,
            expires_in: self.access_token_expiry,
        })
    }

    /// Generate a signed access token
    fn generate_token(
        &self,
        user_id: Uuid,
        company_id: Uuid,
        role: UserRole,
    ) -> AppResult<String> {
        let now = Utc::now();
        let exp = now + Duration::seconds(self.access_token_expiry);

        let claims = Claims {
            sub: user_id.to_string(),
            company_id: company_id.to_string(),
            role: role.as_str().to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Token generation failed: {}", e)))
    }
}
