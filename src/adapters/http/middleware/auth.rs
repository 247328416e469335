use actix_web::{
  Error, HttpMessage, ResponseError,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  http::header::AUTHORIZATION,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::{ApiError, AuthErrorKind},
  domain::auth::{AuthService, RoleRequirement, entities::User},
};

/// Guards a route behind a bearer token and, optionally, a role
///
/// This middleware:
/// 1. Reads the `Authorization: Bearer <token>` header
/// 2. Resolves the caller through `AuthService::authorize`
/// 3. Attaches the `User` to request extensions for the handler
/// 4. Short-circuits with the mapped error (401 or 403) otherwise
///
/// # Example
///
/// ```no_run
/// use actix_web::{App, web};
/// use std::sync::Arc;
/// # use jobboard::domain::auth::{AuthService, RoleRequirement};
/// # use jobboard::adapters::http::middleware::auth::AuthMiddleware;
///
/// # async fn example(auth_service: Arc<AuthService>) {
/// let app = App::new().service(
///   web::resource("/jobs")
///     .route(web::post().to(|| async { "posted" }))
///     .wrap(AuthMiddleware::new(auth_service, RoleRequirement::Employer)),
/// );
/// # }
/// ```
pub struct AuthMiddleware {
  auth_service: Arc<AuthService>,
  requirement: RoleRequirement,
}

impl AuthMiddleware {
  pub fn new(auth_service: Arc<AuthService>, requirement: RoleRequirement) -> Self {
    Self {
      auth_service,
      requirement,
    }
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      auth_service: self.auth_service.clone(),
      requirement: self.requirement,
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  auth_service: Arc<AuthService>,
  requirement: RoleRequirement,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let auth_service = self.auth_service.clone();
    let requirement = self.requirement;

    Box::pin(async move {
      let header = authorization_header(&req);
      let caller = auth_service
        .authorize(header.as_deref(), requirement)
        .await;

      let user = match caller {
        Ok(user) => user,
        Err(e) => {
          if e.is_unauthenticated() {
            tracing::debug!(path = %req.path(), error = %e, "Rejected unauthenticated request");
          } else {
            tracing::warn!(path = %req.path(), error = %e, "Rejected request");
          }
          let (request, _) = req.into_parts();
          let response = ApiError::from(e).error_response().map_into_right_body();
          return Ok(ServiceResponse::new(request, response));
        }
      };

      req.extensions_mut().insert(user);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Raw `Authorization` header value. A value that is not valid ASCII is
/// treated as absent.
fn authorization_header(req: &ServiceRequest) -> Option<String> {
  req
    .headers()
    .get(AUTHORIZATION)
    .and_then(|h| h.to_str().ok())
    .map(str::to_string)
}

/// Extension trait to extract the caller attached by `AuthMiddleware`
pub trait AuthUser {
  /// Returns the authenticated user, or `TokenMissing` when the route was not
  /// wrapped in `AuthMiddleware`
  fn authenticated_user(&self) -> Result<User, ApiError>;
}

impl AuthUser for actix_web::HttpRequest {
  fn authenticated_user(&self) -> Result<User, ApiError> {
    self
      .extensions()
      .get::<User>()
      .cloned()
      .ok_or(ApiError::Auth(AuthErrorKind::TokenMissing))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::{
    App, HttpRequest, HttpResponse,
    http::StatusCode,
    test::{self, TestRequest},
    web,
  };

  use crate::domain::auth::{TokenService, UserProfile, UserRepository, UserRole};
  use crate::infrastructure::persistence::memory::InMemoryUserRepository;
  use crate::infrastructure::security::{Argon2PasswordHasher, JwtTokenService, TokenConfig};

  async fn whoami(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let user = req.authenticated_user()?;
    Ok(HttpResponse::Ok().body(user.email))
  }

  async fn fixture() -> (Arc<AuthService>, Arc<JwtTokenService>, User) {
    let users = Arc::new(InMemoryUserRepository::new());
    let tokens = Arc::new(JwtTokenService::new(TokenConfig::new("middleware-secret")));
    let user = users
      .create(User::new(
        "boss@example.com".to_string(),
        "unused-hash".to_string(),
        "Boss".to_string(),
        UserRole::Employer,
        UserProfile::default(),
      ))
      .await
      .unwrap();

    let service = Arc::new(AuthService::new(
      users,
      Arc::new(Argon2PasswordHasher::new().unwrap()),
      tokens.clone(),
    ));
    (service, tokens, user)
  }

  #[test]
  fn test_authorization_header_passthrough() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_srv_request();
    assert_eq!(
      authorization_header(&req).as_deref(),
      Some("Bearer test_token_123")
    );

    let req = TestRequest::default().to_srv_request();
    assert!(authorization_header(&req).is_none());
  }

  #[actix_web::test]
  async fn test_attaches_user_for_matching_role() {
    let (service, tokens, user) = fixture().await;
    let app = test::init_service(
      App::new().route(
        "/",
        web::get()
          .to(whoami)
          .wrap(AuthMiddleware::new(service, RoleRequirement::Employer)),
      ),
    )
    .await;

    let token = tokens.issue(user.id).unwrap().token;
    let req = TestRequest::get()
      .uri("/")
      .insert_header(("Authorization", format!("Bearer {}", token)))
      .to_request();
    let body = test::call_and_read_body(&app, req).await;

    assert_eq!(&body[..], b"boss@example.com");
  }

  #[actix_web::test]
  async fn test_rejects_missing_token_and_wrong_role() {
    let (service, tokens, user) = fixture().await;
    let app = test::init_service(
      App::new().route(
        "/",
        web::get()
          .to(whoami)
          .wrap(AuthMiddleware::new(service, RoleRequirement::Applicant)),
      ),
    )
    .await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let token = tokens.issue(user.id).unwrap().token;
    let req = TestRequest::get()
      .uri("/")
      .insert_header(("Authorization", format!("Bearer {}", token)))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  #[actix_web::test]
  async fn test_unguarded_route_reports_missing_user() {
    let app = test::init_service(App::new().route("/", web::get().to(whoami))).await;

    let resp = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }
}
