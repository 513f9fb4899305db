use std::collections::HashSet;

use base64::Engine as _;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::ports::token_service::TokenService;
use crate::domain::users::user::{AUTH_ACCESS, AuthToken};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub access: String,
    pub iat: i64,
    pub jti: String,
}

/// HS256 tokens without expiry; revocation happens by dropping the token
/// from the user's stored list.
pub struct JwtTokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtTokenService {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }
}

fn random_jti() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

impl TokenService for JwtTokenService {
    fn issue(&self, user_id: Uuid) -> anyhow::Result<AuthToken> {
        let claims = Claims {
            sub: user_id.to_string(),
            access: AUTH_ACCESS.to_string(),
            iat: chrono::Utc::now().timestamp(),
            jti: random_jti(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| anyhow::anyhow!("encode token: {}", e))?;
        Ok(AuthToken::auth(token))
    }

    fn subject(&self, token: &str) -> Option<Uuid> {
        let data =
            jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation).ok()?;
        if data.claims.access != AUTH_ACCESS {
            return None;
        }
        Uuid::parse_str(&data.claims.sub).ok()
    }
}
