//! Authentication service: employee registration and login.
//!
//! Passwords are stored only as salted argon2 hashes; the plaintext is
//! dropped as soon as the hash exists. Login failures are indistinguishable
//! to the caller whether the email is unknown or the password is wrong.

use argon2::{
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
    password_hash::{SaltString, rand_core::OsRng},
};
use sqlx::types::Json;

use crate::{
    config::Config,
    db::DbPool,
    error::{AppError, is_unique_violation},
    models::employee::{
        Employee, EmployeeResponse, LoginRequest, LoginResponse, PROCESS_WITHDRAWAL,
        RegisterRequest,
    },
    services::token,
};

/// Register a new employee.
///
/// # Process
///
/// 1. Validate the request fields
/// 2. Hash the password (argon2, fresh salt)
/// 3. Insert, granting the default permission set
///
/// Uniqueness of `employee_id` and `email` is enforced by the database
/// constraints; a violation surfaces as `DuplicateEmployee`. There is no
/// pre-insert existence check to race against.
///
/// # Errors
///
/// - `InvalidRequest`: missing/empty fields
/// - `DuplicateEmployee`: identifier or email already registered
/// - `PasswordHash` / `Database`: unexpected failures
pub async fn register(
    pool: &DbPool,
    request: RegisterRequest,
) -> Result<EmployeeResponse, AppError> {
    if request.employee_id.trim().is_empty()
        || request.name.trim().is_empty()
        || request.email.trim().is_empty()
    {
        return Err(AppError::InvalidRequest(
            "employee_id, name and email are required".to_string(),
        ));
    }
    if request.password.is_empty() {
        return Err(AppError::InvalidRequest("password is required".to_string()));
    }

    let password_hash = hash_password(&request.password)?;

    // Every employee can process withdrawals by default; further grants are
    // an administrative action outside this API
    let permissions = vec![PROCESS_WITHDRAWAL.to_string()];

    let employee = sqlx::query_as::<_, Employee>(
        r#"
        INSERT INTO employees (employee_id, name, email, password_hash, permissions)
        VALUES (?, ?, ?, ?, ?)
        RETURNING employee_id, name, email, password_hash, permissions
        "#,
    )
    .bind(&request.employee_id)
    .bind(&request.name)
    .bind(&request.email)
    .bind(&password_hash)
    .bind(Json(permissions))
    .fetch_one(pool)
    .await
    .map_err(|err| {
        if is_unique_violation(&err) {
            AppError::DuplicateEmployee
        } else {
            AppError::Database(err)
        }
    })?;

    Ok(employee.into())
}

/// Authenticate an employee and issue a session token.
///
/// Unknown email and wrong password both return `InvalidCredentials`, so
/// the response leaks nothing about which emails are registered.
pub async fn login(
    pool: &DbPool,
    config: &Config,
    request: LoginRequest,
) -> Result<LoginResponse, AppError> {
    let employee = find_by_email(pool, &request.email)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    if !verify_password(&request.password, &employee.password_hash) {
        return Err(AppError::InvalidCredentials);
    }

    let token = token::issue(
        &config.token_secret,
        &employee.employee_id,
        employee.permissions.0.clone(),
        config.token_ttl_secs,
    );

    Ok(LoginResponse {
        token,
        employee_id: employee.employee_id,
        name: employee.name,
    })
}

/// Look up an employee by email. Internal: the result still carries the hash.
pub async fn find_by_email(pool: &DbPool, email: &str) -> Result<Option<Employee>, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT employee_id, name, email, password_hash, permissions
         FROM employees
         WHERE email = ?",
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

/// Look up an employee by identifier. Internal: the result still carries the hash.
pub async fn find_by_employee_id(
    pool: &DbPool,
    employee_id: &str,
) -> Result<Option<Employee>, AppError> {
    let employee = sqlx::query_as::<_, Employee>(
        "SELECT employee_id, name, email, password_hash, permissions
         FROM employees
         WHERE employee_id = ?",
    )
    .bind(employee_id)
    .fetch_optional(pool)
    .await?;

    Ok(employee)
}

/// Hash a password with argon2 and a freshly generated salt.
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|_| AppError::PasswordHash)?
        .to_string();

    Ok(hash)
}

/// Check a password against a stored argon2 hash.
///
/// An unparseable stored hash counts as a mismatch rather than an error, so
/// login keeps its uniform failure mode.
pub fn verify_password(password: &str, password_hash: &str) -> bool {
    PasswordHash::new(password_hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_verifies_original_password_only() {
        let hash = hash_password("correct horse battery staple").unwrap();

        assert_ne!(hash, "correct horse battery staple");
        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("correct horse battery", &hash));
    }

    #[test]
    fn same_password_hashes_differently() {
        // Fresh salt per hash
        let first = hash_password("hunter2hunter2").unwrap();
        let second = hash_password("hunter2hunter2").unwrap();

        assert_ne!(first, second);
        assert!(verify_password("hunter2hunter2", &first));
        assert!(verify_password("hunter2hunter2", &second));
    }

    #[test]
    fn corrupt_stored_hash_is_a_mismatch() {
        assert!(!verify_password("anything", "not-a-phc-string"));
    }
}
